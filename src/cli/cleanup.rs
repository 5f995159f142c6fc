use super::command::{CommandError, CommandResult};
use crate::db::Model;

/// Removes every person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_USAGE: &'static str =
        "clear: Clears all entries from the address book.\nExample: clear";

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.clear();
        Ok(CommandResult::new("Address book has been cleared!"))
    }
}
