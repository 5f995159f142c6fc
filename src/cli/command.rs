//! Command objects and their shared vocabulary.
//!
//! A parsed line becomes a `Command`. Executing it against the `Model`
//! yields a `CommandResult` for the user or a `CommandError`; a failed
//! command leaves the model untouched.

use std::collections::BTreeSet;
use thiserror::Error;

use super::add::AddCommand;
use super::cleanup::ClearCommand;
use super::delete::DeleteCommand;
use super::list::ListCommand;
use super::search::FindCommand;
use super::tag::{AddTagToPersonCommand, DeleteTagFromPersonCommand};
use super::update::EditCommand;
use crate::db::{BookError, Model};
use crate::models::{Label, LabelKind, Person};

/// Position in the displayed list. Stored zero-based, entered one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    /// `None` for zero, which is not a valid one-based position.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self)
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("The person index provided is invalid")]
    InvalidPersonIndex,
    #[error("This person already exists in the address book")]
    DuplicatePerson,
    #[error("The person does not have {0}")]
    LabelNotFound(String),
    #[error("At least one remark or module must be provided")]
    NoLabelsGiven,
    #[error(transparent)]
    Book(#[from] BookError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    AddTag(AddTagToPersonCommand),
    DeleteTag(DeleteTagFromPersonCommand),
    Find(FindCommand),
    List(ListCommand),
    Clear(ClearCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::COMMAND_WORD,
            Self::Edit(_) => EditCommand::COMMAND_WORD,
            Self::Delete(_) => DeleteCommand::COMMAND_WORD,
            Self::AddTag(_) => AddTagToPersonCommand::COMMAND_WORD,
            Self::DeleteTag(_) => DeleteTagFromPersonCommand::COMMAND_WORD,
            Self::Find(_) => FindCommand::COMMAND_WORD,
            Self::List(_) => ListCommand::COMMAND_WORD,
            Self::Clear(_) => ClearCommand::COMMAND_WORD,
            Self::Help(_) => HelpCommand::COMMAND_WORD,
            Self::Exit(_) => ExitCommand::COMMAND_WORD,
        }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(cmd) => cmd.execute(model),
            Self::Edit(cmd) => cmd.execute(model),
            Self::Delete(cmd) => cmd.execute(model),
            Self::AddTag(cmd) => cmd.execute(model),
            Self::DeleteTag(cmd) => cmd.execute(model),
            Self::Find(cmd) => cmd.execute(model),
            Self::List(cmd) => cmd.execute(model),
            Self::Clear(cmd) => cmd.execute(model),
            Self::Help(cmd) => cmd.execute(model),
            Self::Exit(cmd) => cmd.execute(model),
        }
    }
}

/// Usage of every command, in the order `help` prints them.
pub const ALL_USAGES: &[&str] = &[
    AddCommand::MESSAGE_USAGE,
    EditCommand::MESSAGE_USAGE,
    DeleteCommand::MESSAGE_USAGE,
    AddTagToPersonCommand::MESSAGE_USAGE,
    DeleteTagFromPersonCommand::MESSAGE_USAGE,
    FindCommand::MESSAGE_USAGE,
    ListCommand::MESSAGE_USAGE,
    ClearCommand::MESSAGE_USAGE,
    HelpCommand::MESSAGE_USAGE,
    ExitCommand::MESSAGE_USAGE,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str =
        "help: Shows program usage instructions.\nExample: help";

    pub fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            feedback: ALL_USAGES.join("\n\n"),
            show_help: true,
            exit: false,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_USAGE: &'static str = "exit: Exits the program.\nExample: exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting ConnectUS as requested ...";

    pub fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            feedback: Self::MESSAGE_EXIT_ACKNOWLEDGEMENT.to_string(),
            show_help: false,
            exit: true,
        })
    }
}

/// Person at `index` in the displayed list.
pub(crate) fn displayed_person(model: &Model, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_persons()
        .get(index.zero_based())
        .map(|p| (*p).clone())
        .ok_or(CommandError::InvalidPersonIndex)
}

/// "remark friend" or "modules CS2101, CS2103"; `None` for an empty set.
pub(crate) fn label_summary<K: LabelKind>(labels: &BTreeSet<Label<K>>) -> Option<String> {
    if labels.is_empty() {
        return None;
    }
    let names: Vec<&str> = labels.iter().map(|l| l.name()).collect();
    let plural = if names.len() > 1 { "s" } else { "" };
    Some(format!("{}{} {}", K::CATEGORY, plural, names.join(", ")))
}
