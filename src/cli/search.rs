use super::command::{CommandError, CommandResult};
use super::parser::ParseError;
use crate::db::{Model, PersonFilter};

/// Narrows the displayed list to persons matching any keyword.
///
/// A keyword matches a whole word of the name, or a whole tag, remark or
/// module, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    filter: PersonFilter,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose names, tags, remarks or modules \
        contain any of the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice CS2103";

    pub fn new(filter: PersonFilter) -> Self {
        Self { filter }
    }

    pub fn parse(args: &str) -> Result<Self, ParseError> {
        let keywords: Vec<&str> = args.split_whitespace().collect();
        if keywords.is_empty() {
            return Err(ParseError::InvalidFormat {
                usage: Self::MESSAGE_USAGE,
            });
        }
        Ok(Self::new(PersonFilter::keywords(keywords)))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filter(self.filter.clone());
        Ok(CommandResult::new(format!(
            "{} persons listed!",
            model.filtered_persons().len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{benson, carl, daniel, typical_model};

    #[test]
    fn test_parse() {
        assert_eq!(
            FindCommand::parse(" \n Alice \t Bob  "),
            Ok(FindCommand::new(PersonFilter::keywords(["Alice", "Bob"])))
        );
        assert_eq!(
            FindCommand::parse("   "),
            Err(ParseError::InvalidFormat {
                usage: FindCommand::MESSAGE_USAGE
            })
        );
    }

    #[test]
    fn test_execute_zero_matches() {
        let mut model = typical_model();
        let result = FindCommand::parse(" nobody").unwrap().execute(&mut model).unwrap();
        assert_eq!(result.feedback, "0 persons listed!");
        assert!(model.filtered_persons().is_empty());
    }

    #[test]
    fn test_execute_multiple_matches() {
        let mut model = typical_model();
        let result = FindCommand::parse(" Kurz Meier").unwrap().execute(&mut model).unwrap();
        assert_eq!(result.feedback, "3 persons listed!");
        assert_eq!(model.filtered_persons(), vec![&benson(), &carl(), &daniel()]);
    }
}
