use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::{pattern, ValidationError};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// A calendar date that is not in the future, written `DD/MM/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Birthdays should be a valid date in the format DD/MM/YYYY and must not be in the future";

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::parse_on(value.trim(), Local::now().date_naive())
    }

    /// Parse relative to a given `today`.
    pub fn parse_on(value: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        static SHAPE: OnceLock<regex::Regex> = OnceLock::new();
        let invalid = || ValidationError::new(Self::MESSAGE_CONSTRAINTS);

        if !pattern(&SHAPE, r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").is_match(value) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;
        if date > today {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_on(&value, Local::now().date_naive())
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()
    }

    #[test]
    fn test_valid_birthday() {
        let birthday = Birthday::parse_on("01/01/2000", today()).unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(birthday.to_string(), "01/01/2000");
        assert!(Birthday::parse_on("15/03/2023", today()).is_ok());
        assert!(Birthday::parse_on("29/02/2020", today()).is_ok());
    }

    #[test]
    fn test_invalid_birthday() {
        assert!(Birthday::parse_on("", today()).is_err());
        assert!(Birthday::parse_on("1/1/2000", today()).is_err());
        assert!(Birthday::parse_on("2000-01-01", today()).is_err());
        assert!(Birthday::parse_on("31/02/2000", today()).is_err());
        assert!(Birthday::parse_on("29/02/2021", today()).is_err());
        assert!(Birthday::parse_on("16/03/2023", today()).is_err());
    }

    #[test]
    fn test_far_future_rejected() {
        assert!(!Birthday::is_valid("01/01/3000"));
        assert!(Birthday::is_valid("01/01/1990"));
    }
}
