use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::phone::is_phone_number;
use super::{pattern, ValidationError};

/// Define a validated handle type backed by a `String`.
macro_rules! handle_type {
    ($name:ident, $constraints:expr, $validator:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            pub fn parse(value: &str) -> Result<Self, ValidationError> {
                Self::try_from(value.trim().to_string())
            }

            pub fn is_valid(value: &str) -> bool {
                let validator: fn(&str) -> bool = $validator;
                validator(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if Self::is_valid(&value) {
                    Ok(Self(value))
                } else {
                    Err(ValidationError::new(Self::MESSAGE_CONSTRAINTS))
                }
            }
        }

        impl From<$name> for String {
            fn from(handle: $name) -> Self {
                handle.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

handle_type!(
    Instagram,
    "Instagram usernames should be 1 to 30 characters long, contain only letters, numbers, \
     periods and underscores, and must not start or end with a period or contain two periods in a row",
    is_instagram_username
);

handle_type!(
    Telegram,
    "Telegram usernames should be 5 to 32 characters long and contain only letters, numbers and underscores",
    is_telegram_username
);

handle_type!(
    WhatsApp,
    "WhatsApp numbers should only contain numbers, and it should be at least 3 digits long",
    is_phone_number
);

fn is_instagram_username(value: &str) -> bool {
    static CHARSET: OnceLock<regex::Regex> = OnceLock::new();
    pattern(&CHARSET, r"^[A-Za-z0-9_.]{1,30}$").is_match(value)
        && !value.starts_with('.')
        && !value.ends_with('.')
        && !value.contains("..")
}

fn is_telegram_username(value: &str) -> bool {
    static CHARSET: OnceLock<regex::Regex> = OnceLock::new();
    pattern(&CHARSET, r"^[A-Za-z0-9_]{5,32}$").is_match(value)
}

/// Social-media handles of a contact. Every platform is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<Instagram>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<Telegram>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<WhatsApp>,
}

impl SocialMedia {
    pub fn is_empty(&self) -> bool {
        self.instagram.is_none() && self.telegram.is_none() && self.whatsapp.is_none()
    }
}
