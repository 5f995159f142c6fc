mod address;
mod birthday;
mod email;
mod person;
mod phone;
mod social_media;
mod tag;

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub use address::Address;
pub use birthday::Birthday;
pub use email::Email;
pub use person::{Name, Person};
pub use phone::Phone;
pub use social_media::{Instagram, SocialMedia, Telegram, WhatsApp};
pub use tag::{Label, LabelKind, Module, ModuleKind, Remark, RemarkKind, Tag, TagKind};

/// A value rejected by its type's constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Compile a constant pattern once and hand out the shared instance.
pub(crate) fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("constant pattern must compile"))
}

/// Non-empty and ASCII alphanumeric only. Shared by names of every label kind.
pub(crate) fn is_alphanumeric(value: &str) -> bool {
    static ALNUM: OnceLock<Regex> = OnceLock::new();
    pattern(&ALNUM, r"^[A-Za-z0-9]+$").is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric("friend"));
        assert!(is_alphanumeric("CS2103"));
        assert!(!is_alphanumeric(""));
        assert!(!is_alphanumeric("CS 2103"));
        assert!(!is_alphanumeric("best-friend"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("Names should be alphanumeric");
        assert_eq!(err.to_string(), "Names should be alphanumeric");
    }
}
