use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use super::{
    pattern, Address, Birthday, Email, Label, Module, Phone, Remark, SocialMedia, Tag,
    ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::try_from(value.trim().to_string())
    }

    pub fn is_valid(value: &str) -> bool {
        static NAME: OnceLock<regex::Regex> = OnceLock::new();
        pattern(&NAME, r"^[A-Za-z0-9][A-Za-z0-9 ]*$").is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::new(Self::MESSAGE_CONSTRAINTS))
        }
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contact. Edits never mutate a stored person; commands build a
/// replacement and swap it into the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
    #[serde(default, skip_serializing_if = "SocialMedia::is_empty")]
    pub social_media: SocialMedia,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub remarks: BTreeSet<Remark>,
    #[serde(default)]
    pub modules: BTreeSet<Module>,
}

impl Person {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phone: None,
            email: None,
            address: None,
            birthday: None,
            social_media: SocialMedia::default(),
            tags: BTreeSet::new(),
            remarks: BTreeSet::new(),
            modules: BTreeSet::new(),
        }
    }

    /// Weaker notion of equality used for duplicate detection: same name.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    /// Copy of this person carrying the given remark and module sets.
    pub fn with_labels(&self, remarks: BTreeSet<Remark>, modules: BTreeSet<Module>) -> Self {
        Self {
            remarks,
            modules,
            ..self.clone()
        }
    }
}

fn write_labels<K>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    labels: &BTreeSet<Label<K>>,
) -> fmt::Result {
    if labels.is_empty() {
        return Ok(());
    }
    write!(f, "; {}: ", title)?;
    for label in labels {
        write!(f, "[{}]", label)?;
    }
    Ok(())
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ref phone) = self.phone {
            write!(f, "; Phone: {}", phone)?;
        }
        if let Some(ref email) = self.email {
            write!(f, "; Email: {}", email)?;
        }
        if let Some(ref address) = self.address {
            write!(f, "; Address: {}", address)?;
        }
        if let Some(ref birthday) = self.birthday {
            write!(f, "; Birthday: {}", birthday)?;
        }
        if let Some(ref ig) = self.social_media.instagram {
            write!(f, "; Instagram: {}", ig)?;
        }
        if let Some(ref tg) = self.social_media.telegram {
            write!(f, "; Telegram: {}", tg)?;
        }
        if let Some(ref wa) = self.social_media.whatsapp {
            write!(f, "; WhatsApp: {}", wa)?;
        }
        write_labels(f, "Tags", &self.tags)?;
        write_labels(f, "Remarks", &self.remarks)?;
        write_labels(f, "Modules", &self.modules)
    }
}
