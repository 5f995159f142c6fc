use std::collections::BTreeSet;

use super::command::{displayed_person, CommandError, CommandResult, Index};
use super::parser::{
    parse_labels, parse_preamble_index, tokenize, ParseError, Prefix, PREFIX_ADDRESS,
    PREFIX_BIRTHDAY, PREFIX_EMAIL, PREFIX_INSTAGRAM, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
    PREFIX_TELEGRAM, PREFIX_WHATSAPP, SINGLE_VALUED_PREFIXES,
};
use crate::db::Model;
use crate::models::{
    Address, Birthday, Email, Instagram, Name, Person, Phone, Tag, Telegram, ValidationError,
    WhatsApp,
};

const PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_BIRTHDAY,
    PREFIX_INSTAGRAM,
    PREFIX_TELEGRAM,
    PREFIX_WHATSAPP,
    PREFIX_TAG,
];

/// Fields to change. For optional fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Option<Phone>>,
    pub email: Option<Option<Email>>,
    pub address: Option<Option<Address>>,
    pub birthday: Option<Option<Birthday>>,
    pub instagram: Option<Option<Instagram>>,
    pub telegram: Option<Option<Telegram>>,
    pub whatsapp: Option<Option<WhatsApp>>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.birthday.is_some()
            || self.instagram.is_some()
            || self.telegram.is_some()
            || self.whatsapp.is_some()
            || self.tags.is_some()
    }

    /// Replacement for `person` with the described fields changed.
    pub fn apply(&self, person: &Person) -> Person {
        let mut edited = person.clone();
        if let Some(ref name) = self.name {
            edited.name = name.clone();
        }
        if let Some(ref phone) = self.phone {
            edited.phone = phone.clone();
        }
        if let Some(ref email) = self.email {
            edited.email = email.clone();
        }
        if let Some(ref address) = self.address {
            edited.address = address.clone();
        }
        if let Some(birthday) = self.birthday {
            edited.birthday = birthday;
        }
        if let Some(ref instagram) = self.instagram {
            edited.social_media.instagram = instagram.clone();
        }
        if let Some(ref telegram) = self.telegram {
            edited.social_media.telegram = telegram.clone();
        }
        if let Some(ref whatsapp) = self.whatsapp {
            edited.social_media.whatsapp = whatsapp.clone();
        }
        if let Some(ref tags) = self.tags {
            edited.tags = tags.clone();
        }
        edited
    }
}

/// Edits the details of the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the person identified \
        by the index number used in the displayed person list. \
        Existing values will be overwritten by the input values; an empty value removes an optional field.\n\
        Parameters: INDEX (must be a positive integer) [name=NAME] [phone=PHONE] [email=EMAIL] \
        [address=ADDRESS] [birthday=DD/MM/YYYY] [ig=INSTAGRAM] [tg=TELEGRAM] [wa=WHATSAPP] [tag=TAG]...\n\
        Example: edit 1 phone=91234567 email=johndoe@example.com";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn parse(args: &str) -> Result<Self, ParseError> {
        let map = tokenize(args, PREFIXES);
        let index = parse_preamble_index(&map, Self::MESSAGE_USAGE)?;
        map.verify_no_duplicates(SINGLE_VALUED_PREFIXES)?;

        let descriptor = EditPersonDescriptor {
            name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
            phone: clearable(map.value(PREFIX_PHONE), Phone::parse)?,
            email: clearable(map.value(PREFIX_EMAIL), Email::parse)?,
            address: clearable(map.value(PREFIX_ADDRESS), Address::parse)?,
            birthday: clearable(map.value(PREFIX_BIRTHDAY), Birthday::parse)?,
            instagram: clearable(map.value(PREFIX_INSTAGRAM), Instagram::parse)?,
            telegram: clearable(map.value(PREFIX_TELEGRAM), Telegram::parse)?,
            whatsapp: clearable(map.value(PREFIX_WHATSAPP), WhatsApp::parse)?,
            tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
        };

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::NoFieldsEdited);
        }
        Ok(Self::new(index, descriptor))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let person = displayed_person(model, self.index)?;
        let edited = self.descriptor.apply(&person);

        if !person.is_same_person(&edited) && model.has_person(&edited) {
            return Err(CommandError::DuplicatePerson);
        }

        model.set_person(&person, edited.clone())?;
        model.update_filter(Model::SHOW_ALL);
        Ok(CommandResult::new(format!("Edited Person: {}", edited)))
    }
}

/// Absent → no change, empty → clear, otherwise the parsed value.
fn clearable<T>(
    value: Option<&str>,
    parse: fn(&str) -> Result<T, ValidationError>,
) -> Result<Option<Option<T>>, ValidationError> {
    match value {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(Some(None)),
        Some(v) => parse(v).map(|parsed| Some(Some(parsed))),
    }
}

/// A lone empty `tag=` resets the tags.
fn parse_tags_for_edit(values: &[String]) -> Result<Option<BTreeSet<Tag>>, ValidationError> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_labels(values).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{alice, benson, carl, typical_model, PersonBuilder};
    use crate::db::PersonFilter;

    fn index(one_based: usize) -> Index {
        Index::from_one_based(one_based).unwrap()
    }

    #[test]
    fn test_parse_fields() {
        let cmd = EditCommand::parse(" 2 phone=91234567 email= tag=").unwrap();
        let expected = EditPersonDescriptor {
            phone: Some(Some(Phone::parse("91234567").unwrap())),
            email: Some(None),
            tags: Some(BTreeSet::new()),
            ..EditPersonDescriptor::default()
        };
        assert_eq!(cmd, EditCommand::new(index(2), expected));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(EditCommand::parse(" 1"), Err(ParseError::NoFieldsEdited));
        assert_eq!(
            EditCommand::parse(" phone=123"),
            Err(ParseError::InvalidFormat {
                usage: EditCommand::MESSAGE_USAGE
            })
        );
        assert_eq!(
            EditCommand::parse(" 0 phone=123"),
            Err(ParseError::InvalidFormat {
                usage: EditCommand::MESSAGE_USAGE
            })
        );
        assert_eq!(
            EditCommand::parse(" 1 name=").unwrap_err().to_string(),
            Name::MESSAGE_CONSTRAINTS
        );
        assert_eq!(
            EditCommand::parse(" 1 tg=abc").unwrap_err().to_string(),
            Telegram::MESSAGE_CONSTRAINTS
        );
    }

    #[test]
    fn test_execute_edits_and_clears() {
        let mut model = typical_model();
        let cmd = EditCommand::parse(" 3 phone= birthday=02/02/1990 ig=carl.kurz").unwrap();
        let result = cmd.execute(&mut model).unwrap();

        let expected = PersonBuilder::from(&carl())
            .birthday("02/02/1990")
            .instagram("carl.kurz")
            .build();
        let expected = Person {
            phone: None,
            ..expected
        };
        assert_eq!(model.persons()[2], expected);
        assert_eq!(result.feedback, format!("Edited Person: {}", expected));
    }

    #[test]
    fn test_execute_keeps_labels() {
        let mut model = typical_model();
        EditCommand::parse(" 2 name=Benson Tan").unwrap().execute(&mut model).unwrap();
        let edited = &model.persons()[1];
        assert_eq!(edited.name.as_str(), "Benson Tan");
        assert_eq!(edited.remarks, benson().remarks);
        assert_eq!(edited.modules, benson().modules);
    }

    #[test]
    fn test_execute_on_filtered_list() {
        let mut model = typical_model();
        model.update_filter(PersonFilter::keywords(["carl"]));
        EditCommand::parse(" 1 tag=gym").unwrap().execute(&mut model).unwrap();

        assert_eq!(model.persons()[2].tags.len(), 1);
        assert_eq!(model.filter(), &Model::SHOW_ALL);
    }

    #[test]
    fn test_execute_duplicate_and_out_of_range() {
        let mut model = typical_model();
        let rename = EditCommand::parse(" 2 name=Alice Pauline").unwrap();
        assert_eq!(rename.execute(&mut model), Err(CommandError::DuplicatePerson));

        let out_of_range = EditCommand::parse(" 5 phone=123").unwrap();
        assert_eq!(
            out_of_range.execute(&mut model),
            Err(CommandError::InvalidPersonIndex)
        );
        assert_eq!(model.persons()[0], alice());
        assert_eq!(model.revision(), 0);
    }
}
