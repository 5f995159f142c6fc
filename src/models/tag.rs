//! Free-form labels attached to a contact.
//!
//! Generic tags, remarks and modules share one representation, `Label<K>`.
//! The kind parameter supplies the category name and the validator, so a
//! `Remark` can never be mixed up with a `Module` even though both are
//! plain strings underneath.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{is_alphanumeric, ValidationError};

/// Category of a label: its name for messages and the rule its values obey.
pub trait LabelKind {
    /// Singular noun used in feedback, e.g. "remark".
    const CATEGORY: &'static str;
    const MESSAGE_CONSTRAINTS: &'static str;

    fn is_valid(name: &str) -> bool {
        is_alphanumeric(name)
    }
}

pub enum TagKind {}
pub enum RemarkKind {}
pub enum ModuleKind {}

impl LabelKind for TagKind {
    const CATEGORY: &'static str = "tag";
    const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";
}

impl LabelKind for RemarkKind {
    const CATEGORY: &'static str = "remark";
    const MESSAGE_CONSTRAINTS: &'static str = "Remark names should be alphanumeric";
}

impl LabelKind for ModuleKind {
    const CATEGORY: &'static str = "module";
    const MESSAGE_CONSTRAINTS: &'static str = "Module names should be alphanumeric";
}

pub type Tag = Label<TagKind>;
pub type Remark = Label<RemarkKind>;
pub type Module = Label<ModuleKind>;

/// An immutable, validated label name of kind `K`. Compared by value.
pub struct Label<K> {
    name: String,
    kind: PhantomData<fn() -> K>,
}

impl<K: LabelKind> Label<K> {
    pub const MESSAGE_CONSTRAINTS: &'static str = K::MESSAGE_CONSTRAINTS;

    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        Self::try_from(name.trim().to_string())
    }

    pub fn is_valid(name: &str) -> bool {
        K::is_valid(name)
    }

    pub fn category() -> &'static str {
        K::CATEGORY
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<K: LabelKind> TryFrom<String> for Label<K> {
    type Error = ValidationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        if K::is_valid(&name) {
            Ok(Self {
                name,
                kind: PhantomData,
            })
        } else {
            Err(ValidationError::new(K::MESSAGE_CONSTRAINTS))
        }
    }
}

// Manual impls: derives would demand the same traits of the marker `K`.

impl<K> Clone for Label<K> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: PhantomData,
        }
    }
}

impl<K> fmt::Debug for Label<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Label").field(&self.name).finish()
    }
}

impl<K> fmt::Display for Label<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<K> PartialEq for Label<K> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<K> Eq for Label<K> {}

impl<K> PartialOrd for Label<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Label<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl<K> Hash for Label<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<K> Serialize for Label<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de, K: LabelKind> Deserialize<'de> for Label<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::try_from(name).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_label_validation() {
        assert!(Remark::parse("friend").is_ok());
        assert!(Module::parse("CS2103").is_ok());
        assert_eq!(
            Module::parse("CS 2103").unwrap_err().message,
            ModuleKind::MESSAGE_CONSTRAINTS
        );
        assert_eq!(
            Remark::parse("").unwrap_err().message,
            RemarkKind::MESSAGE_CONSTRAINTS
        );
        assert!(Tag::parse("#friends").is_err());
    }

    #[test]
    fn test_label_category() {
        assert_eq!(Tag::category(), "tag");
        assert_eq!(Remark::category(), "remark");
        assert_eq!(Module::category(), "module");
    }

    #[test]
    fn test_label_set_semantics() {
        let mut remarks = BTreeSet::new();
        assert!(remarks.insert(Remark::parse("friend").unwrap()));
        assert!(!remarks.insert(Remark::parse("friend").unwrap()));
        assert!(remarks.insert(Remark::parse("colleague").unwrap()));
        let names: Vec<&str> = remarks.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["colleague", "friend"]);
    }

    #[test]
    fn test_label_serde() {
        let module = Module::parse("CS2103").unwrap();
        assert_eq!(serde_json::to_string(&module).unwrap(), "\"CS2103\"");

        let parsed: Module = serde_json::from_str("\"CS2101\"").unwrap();
        assert_eq!(parsed.name(), "CS2101");

        let err = serde_json::from_str::<Module>("\"CS 2101\"").unwrap_err();
        assert!(err.to_string().contains(ModuleKind::MESSAGE_CONSTRAINTS));
    }
}
