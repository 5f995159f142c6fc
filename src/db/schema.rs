use serde::{Deserialize, Serialize};

use crate::models::Person;

pub const SCHEMA_VERSION: u32 = 1;

fn current_version() -> u32 {
    SCHEMA_VERSION
}

/// The whole persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(default)]
    pub persons: Vec<Person>,
}

impl Snapshot {
    pub fn new(persons: Vec<Person>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            persons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_version_defaults() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"persons": []}"#).unwrap();
        assert_eq!(snapshot.version, SCHEMA_VERSION);
        assert!(snapshot.persons.is_empty());
    }

    #[test]
    fn test_document_shape() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "version": 1,
                "persons": [{
                    "name": "Alice Pauline",
                    "phone": "94351253",
                    "social_media": {"telegram": "alice_pauline"},
                    "tags": ["friends"],
                    "remarks": ["classmate"],
                    "modules": ["CS2103", "CS2101"]
                }]
            }"#,
        )
        .unwrap();
        let alice = &snapshot.persons[0];
        assert_eq!(alice.name.as_str(), "Alice Pauline");
        assert_eq!(alice.modules.len(), 2);
        assert_eq!(
            alice.social_media.telegram.as_ref().map(|t| t.as_str()),
            Some("alice_pauline")
        );
    }
}
