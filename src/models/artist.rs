//! Artist registry document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An artist signed to the label.
///
/// `added` records when the artist joined; it is stamped once at creation
/// and displayed as the "with us since" date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Display name, unique across the registry (case-insensitive)
    pub name: String,
    /// Music style or main release link
    pub music: String,
    /// Showcase playlist URL
    pub playlist: String,
    /// Avatar image URL
    pub avatar: String,
    /// When the artist was added to the registry
    pub added: DateTime<Utc>,
}

impl Artist {
    /// Creates an artist document stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        music: impl Into<String>,
        playlist: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            music: music.into(),
            playlist: playlist.into(),
            avatar: avatar.into(),
            added: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_roundtrip() {
        let artist = Artist::new("Aeden", "EDM", "https://p.example/aeden", "https://a.example/1.png");

        let json = serde_json::to_value(&artist).unwrap();
        assert_eq!(json["name"], "Aeden");

        let back: Artist = serde_json::from_value(json).unwrap();
        assert_eq!(back, artist);
    }
}
