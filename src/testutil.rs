//! Builders and fixtures shared by unit tests.

use crate::db::{AddressBook, Model};
use crate::models::*;

pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            person: Person::new(Name::parse(name).unwrap()),
        }
    }

    pub fn from(person: &Person) -> Self {
        Self {
            person: person.clone(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.person.name = Name::parse(name).unwrap();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.person.phone = Some(Phone::parse(phone).unwrap());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.person.email = Some(Email::parse(email).unwrap());
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.person.address = Some(Address::parse(address).unwrap());
        self
    }

    pub fn birthday(mut self, birthday: &str) -> Self {
        self.person.birthday = Some(Birthday::parse(birthday).unwrap());
        self
    }

    pub fn instagram(mut self, handle: &str) -> Self {
        self.person.social_media.instagram = Some(Instagram::parse(handle).unwrap());
        self
    }

    pub fn telegram(mut self, handle: &str) -> Self {
        self.person.social_media.telegram = Some(Telegram::parse(handle).unwrap());
        self
    }

    pub fn whatsapp(mut self, number: &str) -> Self {
        self.person.social_media.whatsapp = Some(WhatsApp::parse(number).unwrap());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.person.tags = tags.iter().map(|t| Tag::parse(t).unwrap()).collect();
        self
    }

    pub fn remarks(mut self, remarks: &[&str]) -> Self {
        self.person.remarks = remarks.iter().map(|r| Remark::parse(r).unwrap()).collect();
        self
    }

    pub fn modules(mut self, modules: &[&str]) -> Self {
        self.person.modules = modules.iter().map(|m| Module::parse(m).unwrap()).collect();
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

pub fn alice() -> Person {
    PersonBuilder::new("Alice Pauline")
        .phone("94351253")
        .email("alice@example.com")
        .address("123, Jurong West Ave 6, #08-111")
        .tags(&["friends"])
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::new("Benson Meier")
        .phone("98765432")
        .email("johnd@example.com")
        .address("311, Clementi Ave 2, #02-25")
        .tags(&["owesMoney", "friends"])
        .remarks(&["roommate"])
        .modules(&["CS2101"])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::new("Carl Kurz")
        .phone("95352563")
        .email("heinz@example.com")
        .address("wall street")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::new("Daniel Meier")
        .phone("87652533")
        .email("cornelia@example.com")
        .tags(&["friends"])
        .build()
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel()]
}

pub fn typical_address_book() -> AddressBook {
    AddressBook::from_persons(typical_persons()).unwrap()
}

pub fn typical_model() -> Model {
    Model::new(typical_address_book())
}
