use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::{pattern, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
        and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special characters, \
        excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
        separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::try_from(value.trim().to_string())
    }

    pub fn is_valid(value: &str) -> bool {
        static EMAIL: OnceLock<regex::Regex> = OnceLock::new();
        let re = pattern(
            &EMAIL,
            r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$",
        );
        if !re.is_match(value) {
            return false;
        }
        // Top-level label needs at least two characters
        value
            .rsplit(['@', '.'])
            .next()
            .map_or(false, |last| last.len() >= 2)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::new(Self::MESSAGE_CONSTRAINTS))
        }
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
