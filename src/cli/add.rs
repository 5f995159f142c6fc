use super::command::{CommandError, CommandResult};
use super::parser::{
    parse_labels, tokenize, ParseError, Prefix, PREFIX_ADDRESS, PREFIX_BIRTHDAY, PREFIX_EMAIL,
    PREFIX_INSTAGRAM, PREFIX_MODULE, PREFIX_NAME, PREFIX_PHONE, PREFIX_REMARK, PREFIX_TAG,
    PREFIX_TELEGRAM, PREFIX_WHATSAPP, SINGLE_VALUED_PREFIXES,
};
use crate::db::Model;
use crate::models::{
    Address, Birthday, Email, Instagram, Name, Person, Phone, Telegram, ValidationError, WhatsApp,
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
    PREFIX_REMARK,
    PREFIX_MODULE,
];

/// Adds a new person to the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the address book. \n\
        Parameters: name=NAME [phone=PHONE] [email=EMAIL] [address=ADDRESS] [birthday=DD/MM/YYYY] \
        [ig=INSTAGRAM] [tg=TELEGRAM] [wa=WHATSAPP] [tag=TAG]... [remark=REMARK]... [module=MODULE]...\n\
        Example: add name=John Doe phone=98765432 email=johnd@example.com \
        address=311, Clementi Ave 2, #02-25 tag=friends remark=owesMoney module=CS2103";

    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn parse(args: &str) -> Result<Self, ParseError> {
        let map = tokenize(args, PREFIXES);
        let name = match map.value(PREFIX_NAME) {
            Some(name) if map.preamble().is_empty() => name,
            _ => {
                return Err(ParseError::InvalidFormat {
                    usage: Self::MESSAGE_USAGE,
                })
            }
        };
        map.verify_no_duplicates(SINGLE_VALUED_PREFIXES)?;

        let mut person = Person::new(Name::parse(name)?);
        person.phone = optional(map.value(PREFIX_PHONE), Phone::parse)?;
        person.email = optional(map.value(PREFIX_EMAIL), Email::parse)?;
        person.address = optional(map.value(PREFIX_ADDRESS), Address::parse)?;
        person.birthday = optional(map.value(PREFIX_BIRTHDAY), Birthday::parse)?;
        person.social_media.instagram = optional(map.value(PREFIX_INSTAGRAM), Instagram::parse)?;
        person.social_media.telegram = optional(map.value(PREFIX_TELEGRAM), Telegram::parse)?;
        person.social_media.whatsapp = optional(map.value(PREFIX_WHATSAPP), WhatsApp::parse)?;
        person.tags = parse_labels(map.all_values(PREFIX_TAG))?;
        person.remarks = parse_labels(map.all_values(PREFIX_REMARK))?;
        person.modules = parse_labels(map.all_values(PREFIX_MODULE))?;

        Ok(Self::new(person))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }
        model.add_person(self.person.clone())?;
        Ok(CommandResult::new(format!("New person added: {}", self.person)))
    }
}

fn optional<T>(
    value: Option<&str>,
    parse: fn(&str) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    value.map(parse).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Birthday, Module};
    use crate::testutil::{alice, typical_model, PersonBuilder};

    #[test]
    fn test_parse_all_fields() {
        let cmd = AddCommand::parse(
            " name=Amy Bee phone=85355255 email=amy@gmail.com address=123, Jurong West Ave 6, #08-111 \
             birthday=01/01/2000 ig=amy.bee tg=amybee wa=6585355255 tag=friend module=CS2103 module=CS2101",
        )
        .unwrap();

        let expected = PersonBuilder::new("Amy Bee")
            .phone("85355255")
            .email("amy@gmail.com")
            .address("123, Jurong West Ave 6, #08-111")
            .birthday("01/01/2000")
            .instagram("amy.bee")
            .telegram("amybee")
            .whatsapp("6585355255")
            .tags(&["friend"])
            .modules(&["CS2103", "CS2101"])
            .build();
        assert_eq!(cmd, AddCommand::new(expected));
    }

    #[test]
    fn test_parse_name_only() {
        let cmd = AddCommand::parse(" name=Amy Bee").unwrap();
        assert_eq!(cmd, AddCommand::new(PersonBuilder::new("Amy Bee").build()));
    }

    #[test]
    fn test_parse_missing_name_or_preamble() {
        let usage = ParseError::InvalidFormat {
            usage: AddCommand::MESSAGE_USAGE,
        };
        assert_eq!(AddCommand::parse(" phone=85355255"), Err(usage.clone()));
        assert_eq!(AddCommand::parse(" some text name=Amy"), Err(usage));
    }

    #[test]
    fn test_parse_invalid_values() {
        assert_eq!(
            AddCommand::parse(" name=Amy* phone=123").unwrap_err().to_string(),
            Name::MESSAGE_CONSTRAINTS
        );
        assert_eq!(
            AddCommand::parse(" name=Amy birthday=2000-01-01").unwrap_err().to_string(),
            Birthday::MESSAGE_CONSTRAINTS
        );
        assert_eq!(
            AddCommand::parse(" name=Amy module=CS 2103").unwrap_err().to_string(),
            Module::MESSAGE_CONSTRAINTS
        );
        assert!(matches!(
            AddCommand::parse(" name=Amy phone=123 phone=456"),
            Err(ParseError::DuplicatePrefixes(_))
        ));
    }

    #[test]
    fn test_execute_adds_person() {
        let mut model = typical_model();
        let amy = PersonBuilder::new("Amy Bee").phone("85355255").build();

        let result = AddCommand::new(amy.clone()).execute(&mut model).unwrap();
        assert_eq!(result.feedback, format!("New person added: {}", amy));
        assert_eq!(model.persons().last(), Some(&amy));
    }

    #[test]
    fn test_execute_duplicate_person() {
        let mut model = typical_model();
        let twin = PersonBuilder::new("Alice Pauline").build();
        assert_eq!(
            AddCommand::new(twin).execute(&mut model),
            Err(CommandError::DuplicatePerson)
        );
        assert_eq!(model.persons()[0], alice());
        assert_eq!(model.revision(), 0);
    }
}
