//! Tag document

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A named text snippet members can recall in chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Member id of the tag owner
    pub owner: u64,
    /// Primary name
    pub name: String,
    /// The text recalled when the tag is used
    pub content: String,
    /// Numeric id minted from the creation timestamp's microsecond field
    pub id: u32,
    /// How many times the tag has been recalled
    pub uses: u64,
    /// Creation time
    pub created: DateTime<Utc>,
    /// Alternate names resolving to this tag
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Tag {
    /// Creates a tag owned by `owner`, minting its id from the creation
    /// instant.
    pub fn new(owner: u64, name: impl Into<String>, content: impl Into<String>) -> Self {
        let created = Utc::now();
        Self {
            owner,
            name: name.into(),
            content: content.into(),
            id: created.nanosecond() / 1_000,
            uses: 0,
            created,
            aliases: Vec::new(),
        }
    }

    /// True if `name` is the tag's primary name or one of its aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_new_defaults() {
        let tag = Tag::new(42, "rules", "be kind");

        assert_eq!(tag.owner, 42);
        assert_eq!(tag.uses, 0);
        assert!(tag.aliases.is_empty());
        assert!(tag.id < 1_000_000);
    }

    #[test]
    fn test_answers_to() {
        let mut tag = Tag::new(1, "rules", "be kind");
        tag.aliases.push("conduct".to_string());

        assert!(tag.answers_to("rules"));
        assert!(tag.answers_to("conduct"));
        assert!(!tag.answers_to("welcome"));
    }

    #[test]
    fn test_tag_deserialize_without_aliases() {
        let json = serde_json::json!({
            "owner": 7,
            "name": "faq",
            "content": "see pins",
            "id": 1234,
            "uses": 9,
            "created": "2021-06-01T10:00:00Z"
        });

        let tag: Tag = serde_json::from_value(json).unwrap();
        assert!(tag.aliases.is_empty());
        assert_eq!(tag.uses, 9);
    }
}
