use super::command::{CommandError, CommandResult};
use crate::db::Model;

/// Shows every person again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_USAGE: &'static str = "list: Lists all persons.\nExample: list";

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filter(Model::SHOW_ALL);
        Ok(CommandResult::new("Listed all persons"))
    }
}
