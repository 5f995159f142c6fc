//! Turns a typed command line into a `Command`.
//!
//! Arguments use `key=value` prefixes. A prefix only counts when it starts
//! the argument string or follows whitespace, and its value runs up to the
//! next prefix. Text before the first prefix is the preamble, which holds
//! the index for commands that take one.

use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

use super::add::AddCommand;
use super::cleanup::ClearCommand;
use super::command::{Command, ExitCommand, HelpCommand, Index};
use super::delete::DeleteCommand;
use super::list::ListCommand;
use super::search::FindCommand;
use super::tag::{AddTagToPersonCommand, DeleteTagFromPersonCommand};
use super::update::EditCommand;
use crate::models::{Label, LabelKind, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },
    #[error("Unknown command")]
    UnknownCommand,
    #[error("At least one field to edit must be provided.")]
    NoFieldsEdited,
    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefixes(String),
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix("name=");
pub const PREFIX_PHONE: Prefix = Prefix("phone=");
pub const PREFIX_EMAIL: Prefix = Prefix("email=");
pub const PREFIX_ADDRESS: Prefix = Prefix("address=");
pub const PREFIX_BIRTHDAY: Prefix = Prefix("birthday=");
pub const PREFIX_INSTAGRAM: Prefix = Prefix("ig=");
pub const PREFIX_TELEGRAM: Prefix = Prefix("tg=");
pub const PREFIX_WHATSAPP: Prefix = Prefix("wa=");
pub const PREFIX_TAG: Prefix = Prefix("tag=");
pub const PREFIX_REMARK: Prefix = Prefix("remark=");
pub const PREFIX_MODULE: Prefix = Prefix("module=");

/// Prefixes that may appear at most once.
pub const SINGLE_VALUED_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_BIRTHDAY,
    PREFIX_INSTAGRAM,
    PREFIX_TELEGRAM,
    PREFIX_WHATSAPP,
];

/// Tokenized arguments: the preamble plus every value seen per prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn has(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let repeated: Vec<&str> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(|p| p.as_str())
            .collect();
        if repeated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(repeated.join(" ")))
        }
    }

    /// Usage error when a value still holds `=`, i.e. a prefix the command
    /// does not take. Only for commands whose values are labels.
    pub fn verify_no_stray_prefixes(&self, usage: &'static str) -> Result<(), ParseError> {
        if self.values.values().flatten().any(|value| value.contains('=')) {
            Err(ParseError::InvalidFormat { usage })
        } else {
            Ok(())
        }
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .map(|(pos, _)| pos)
                .filter(|&pos| pos == 0 || args[..pos].ends_with(char::is_whitespace))
                .map(move |pos| (pos, prefix))
                .collect::<Vec<_>>()
        })
        .collect();
    positions.sort_by_key(|&(pos, _)| pos);

    let mut map = ArgumentMultimap::default();
    let preamble_end = positions.first().map_or(args.len(), |&(pos, _)| pos);
    map.preamble = args[..preamble_end].trim().to_string();

    for (i, &(pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(args.len(), |&(next, _)| next);
        map.values
            .entry(prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }
    map
}

/// A positive integer, digits only.
pub fn parse_index(text: &str) -> Option<Index> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<usize>().ok().and_then(Index::from_one_based)
}

/// Index from the preamble, or the usage error for the command.
pub fn parse_preamble_index(
    map: &ArgumentMultimap,
    usage: &'static str,
) -> Result<Index, ParseError> {
    parse_index(map.preamble()).ok_or(ParseError::InvalidFormat { usage })
}

pub fn parse_labels<K: LabelKind>(names: &[String]) -> Result<BTreeSet<Label<K>>, ValidationError> {
    names.iter().map(|name| Label::parse(name)).collect()
}

/// Parse a full command line.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: HelpCommand::MESSAGE_USAGE,
        });
    }

    let (word, args) = match line.find(char::is_whitespace) {
        Some(split) => line.split_at(split),
        None => (line, ""),
    };

    match word {
        AddCommand::COMMAND_WORD => AddCommand::parse(args).map(Command::Add),
        EditCommand::COMMAND_WORD => EditCommand::parse(args).map(Command::Edit),
        DeleteCommand::COMMAND_WORD => DeleteCommand::parse(args).map(Command::Delete),
        AddTagToPersonCommand::COMMAND_WORD => {
            AddTagToPersonCommand::parse(args).map(Command::AddTag)
        }
        DeleteTagFromPersonCommand::COMMAND_WORD => {
            DeleteTagFromPersonCommand::parse(args).map(Command::DeleteTag)
        }
        FindCommand::COMMAND_WORD => FindCommand::parse(args).map(Command::Find),
        ListCommand::COMMAND_WORD => Ok(Command::List(ListCommand)),
        ClearCommand::COMMAND_WORD => Ok(Command::Clear(ClearCommand)),
        HelpCommand::COMMAND_WORD => Ok(Command::Help(HelpCommand)),
        ExitCommand::COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
        _ => Err(ParseError::UnknownCommand),
    }
}
