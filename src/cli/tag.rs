//! Adding and removing labels on a single person.

use std::collections::BTreeSet;

use super::command::{displayed_person, label_summary, CommandError, CommandResult, Index};
use super::parser::{
    parse_labels, parse_preamble_index, tokenize, ParseError, PREFIX_MODULE, PREFIX_REMARK,
    PREFIX_TAG,
};
use crate::db::Model;
use crate::models::{Label, LabelKind, Module, Remark, Tag};

/// Remarks and modules to add. `None` leaves that category alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTagDescriptor {
    remarks: Option<BTreeSet<Remark>>,
    modules: Option<BTreeSet<Module>>,
}

impl AddTagDescriptor {
    pub fn new(remarks: Option<BTreeSet<Remark>>, modules: Option<BTreeSet<Module>>) -> Self {
        Self { remarks, modules }
    }

    pub fn remarks(&self) -> Option<&BTreeSet<Remark>> {
        self.remarks.as_ref()
    }

    pub fn modules(&self) -> Option<&BTreeSet<Module>> {
        self.modules.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.remarks.as_ref().map_or(true, BTreeSet::is_empty)
            && self.modules.as_ref().map_or(true, BTreeSet::is_empty)
    }

    /// "remark friend and modules CS2101, CS2103"
    fn summary(&self) -> String {
        let parts: Vec<String> = [
            self.remarks.as_ref().and_then(label_summary),
            self.modules.as_ref().and_then(label_summary),
        ]
        .into_iter()
        .flatten()
        .collect();
        parts.join(" and ")
    }
}

/// Adds remarks and/or modules to the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTagToPersonCommand {
    index: Index,
    descriptor: AddTagDescriptor,
}

impl AddTagToPersonCommand {
    pub const COMMAND_WORD: &'static str = "addt";
    pub const MESSAGE_USAGE: &'static str = "addt: Adds a tag to the person identified \
        by the index number used in the displayed person list. \n\
        Parameters: INDEX (must be a positive integer) [remark=REMARK]... [module=MODULE]...\n\
        Example: addt 1 remark=friend module=CS1231";

    pub fn new(index: Index, descriptor: AddTagDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn parse(args: &str) -> Result<Self, ParseError> {
        let map = tokenize(args, &[PREFIX_REMARK, PREFIX_MODULE]);
        let index = parse_preamble_index(&map, Self::MESSAGE_USAGE)?;
        map.verify_no_stray_prefixes(Self::MESSAGE_USAGE)?;

        let remarks = if map.has(PREFIX_REMARK) {
            Some(parse_labels(map.all_values(PREFIX_REMARK))?)
        } else {
            None
        };
        let modules = if map.has(PREFIX_MODULE) {
            Some(parse_labels(map.all_values(PREFIX_MODULE))?)
        } else {
            None
        };

        let descriptor = AddTagDescriptor::new(remarks, modules);
        if descriptor.is_empty() {
            return Err(ParseError::InvalidFormat {
                usage: Self::MESSAGE_USAGE,
            });
        }
        Ok(Self::new(index, descriptor))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if self.descriptor.is_empty() {
            return Err(CommandError::NoLabelsGiven);
        }
        let person = displayed_person(model, self.index)?;

        let remarks = union(&person.remarks, self.descriptor.remarks());
        let modules = union(&person.modules, self.descriptor.modules());
        let edited = person.with_labels(remarks, modules);

        model.set_person(&person, edited.clone())?;
        model.update_filter(Model::SHOW_ALL);
        Ok(CommandResult::new(format!(
            "Added {} to Person: {}",
            self.descriptor.summary(),
            edited
        )))
    }
}

fn union<K: LabelKind>(
    existing: &BTreeSet<Label<K>>,
    added: Option<&BTreeSet<Label<K>>>,
) -> BTreeSet<Label<K>> {
    match added {
        Some(added) => existing.union(added).cloned().collect(),
        None => existing.clone(),
    }
}

/// Removes named tags, remarks and/or modules from the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTagFromPersonCommand {
    index: Index,
    tags: BTreeSet<Tag>,
    remarks: BTreeSet<Remark>,
    modules: BTreeSet<Module>,
}

impl DeleteTagFromPersonCommand {
    pub const COMMAND_WORD: &'static str = "deletet";
    pub const MESSAGE_USAGE: &'static str = "deletet: Removes tags from the person identified \
        by the index number used in the displayed person list. \n\
        Parameters: INDEX (must be a positive integer) [tag=TAG]... [remark=REMARK]... [module=MODULE]...\n\
        Example: deletet 1 remark=friend module=CS1231";

    pub fn new(
        index: Index,
        tags: BTreeSet<Tag>,
        remarks: BTreeSet<Remark>,
        modules: BTreeSet<Module>,
    ) -> Self {
        Self {
            index,
            tags,
            remarks,
            modules,
        }
    }

    pub fn parse(args: &str) -> Result<Self, ParseError> {
        let map = tokenize(args, &[PREFIX_TAG, PREFIX_REMARK, PREFIX_MODULE]);
        let index = parse_preamble_index(&map, Self::MESSAGE_USAGE)?;
        map.verify_no_stray_prefixes(Self::MESSAGE_USAGE)?;

        let tags: BTreeSet<Tag> = parse_labels(map.all_values(PREFIX_TAG))?;
        let remarks: BTreeSet<Remark> = parse_labels(map.all_values(PREFIX_REMARK))?;
        let modules: BTreeSet<Module> = parse_labels(map.all_values(PREFIX_MODULE))?;

        if tags.is_empty() && remarks.is_empty() && modules.is_empty() {
            return Err(ParseError::InvalidFormat {
                usage: Self::MESSAGE_USAGE,
            });
        }
        Ok(Self::new(index, tags, remarks, modules))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let person = displayed_person(model, self.index)?;

        ensure_present(&person.tags, &self.tags)?;
        ensure_present(&person.remarks, &self.remarks)?;
        ensure_present(&person.modules, &self.modules)?;

        let mut edited = person.with_labels(
            person.remarks.difference(&self.remarks).cloned().collect(),
            person.modules.difference(&self.modules).cloned().collect(),
        );
        edited.tags = person.tags.difference(&self.tags).cloned().collect();

        model.set_person(&person, edited.clone())?;
        model.update_filter(Model::SHOW_ALL);

        let summary: Vec<String> = [
            label_summary(&self.tags),
            label_summary(&self.remarks),
            label_summary(&self.modules),
        ]
        .into_iter()
        .flatten()
        .collect();
        Ok(CommandResult::new(format!(
            "Removed {} from Person: {}",
            summary.join(" and "),
            edited
        )))
    }
}

fn ensure_present<K: LabelKind>(
    existing: &BTreeSet<Label<K>>,
    removed: &BTreeSet<Label<K>>,
) -> Result<(), CommandError> {
    match removed.iter().find(|label| !existing.contains(*label)) {
        Some(missing) => Err(CommandError::LabelNotFound(format!(
            "{} {}",
            K::CATEGORY,
            missing
        ))),
        None => Ok(()),
    }
}
