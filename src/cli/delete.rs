use super::command::{displayed_person, CommandError, CommandResult, Index};
use super::parser::{parse_index, ParseError};
use crate::db::Model;

/// Deletes the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person identified by the index number \
        used in the displayed person list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn parse(args: &str) -> Result<Self, ParseError> {
        parse_index(args).map(Self::new).ok_or(ParseError::InvalidFormat {
            usage: Self::MESSAGE_USAGE,
        })
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let person = displayed_person(model, self.index)?;
        model.delete_person(&person)?;
        Ok(CommandResult::new(format!("Deleted Person: {}", person)))
    }
}
