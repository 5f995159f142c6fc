use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::{pattern, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    /// Parse user input, ignoring surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::try_from(value.trim().to_string())
    }

    pub fn is_valid(value: &str) -> bool {
        is_phone_number(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// At least three digits and nothing else. WhatsApp numbers follow the same rule.
pub(crate) fn is_phone_number(value: &str) -> bool {
    static DIGITS: OnceLock<regex::Regex> = OnceLock::new();
    pattern(&DIGITS, r"^[0-9]{3,}$").is_match(value)
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::new(Self::MESSAGE_CONSTRAINTS))
        }
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
