use std::collections::BTreeSet;

use super::persons::{AddressBook, BookError};
use crate::models::{
    Address, Email, Label, LabelKind, Name, Person, Phone, SocialMedia, Telegram, ValidationError,
};

/// Contacts used to seed a fresh data file.
pub fn sample_address_book() -> Result<AddressBook, SampleError> {
    let persons = vec![
        sample_person(
            "Alex Yeoh",
            "87438807",
            "alexyeoh@example.com",
            "Blk 30 Geylang Street 29, #06-40",
            Some("alexyeoh"),
            &["friends"],
            &["CS2103"],
        )?,
        sample_person(
            "Bernice Yu",
            "99272758",
            "berniceyu@example.com",
            "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
            None,
            &["colleagues", "friends"],
            &["CS2101", "CS2103"],
        )?,
        sample_person(
            "Charlotte Oliveiro",
            "93210283",
            "charlotte@example.com",
            "Blk 11 Ang Mo Kio Street 74, #11-04",
            Some("charlotte_o"),
            &["neighbours"],
            &[],
        )?,
        sample_person(
            "David Li",
            "91031282",
            "lidavid@example.com",
            "Blk 436 Serangoon Gardens Street 26, #16-43",
            None,
            &["family"],
            &["MA1521"],
        )?,
        sample_person(
            "Irfan Ibrahim",
            "92492021",
            "irfan@example.com",
            "Blk 47 Tampines Street 20, #17-35",
            None,
            &["classmates"],
            &["CS2103", "ST2334"],
        )?,
    ];
    Ok(AddressBook::from_persons(persons)?)
}

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Book(#[from] BookError),
}

fn sample_person(
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    telegram: Option<&str>,
    remarks: &[&str],
    modules: &[&str],
) -> Result<Person, ValidationError> {
    let mut person = Person::new(Name::parse(name)?);
    person.phone = Some(Phone::parse(phone)?);
    person.email = Some(Email::parse(email)?);
    person.address = Some(Address::parse(address)?);
    person.social_media = SocialMedia {
        telegram: telegram.map(Telegram::parse).transpose()?,
        ..SocialMedia::default()
    };
    person.remarks = label_set(remarks)?;
    person.modules = label_set(modules)?;
    Ok(person)
}

fn label_set<K: LabelKind>(names: &[&str]) -> Result<BTreeSet<Label<K>>, ValidationError> {
    names.iter().map(|name| Label::parse(name)).collect()
}
