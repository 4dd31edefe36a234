//! Error types for the bot's data layer
//!
//! Provides unified error handling using thiserror, one enum per subsystem.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by the expiring cache.
///
/// Lookup misses (absent or expired keys) are deliberately NOT errors; they
/// surface as `None`. Removing a key that was never stored is the one
/// operation that fails.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not present in cache storage
    #[error("key not found in cache: {0}")]
    KeyNotFound(String),
}

// == Store Error Enum ==
/// Errors raised by document-store backends.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Document failed to serialize or deserialize
    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend rejected or could not complete the operation
    #[error("store backend error: {0}")]
    Backend(String),
}

// == Registry Error Enum ==
/// Errors raised by the artist registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No artist with the given name
    #[error("no artist registered under the name: {0}")]
    UnknownArtist(String),

    /// An artist with the given name already exists
    #[error("artist already registered: {0}")]
    DuplicateArtist(String),

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == Tag Error Enum ==
/// Errors raised by the tag store.
#[derive(Error, Debug)]
pub enum TagError {
    /// No tag with the given name or alias
    #[error("no tag named: {0}")]
    UnknownTag(String),

    /// A tag with the given name or alias already exists
    #[error("tag name already taken: {0}")]
    DuplicateTag(String),

    /// Caller is neither the tag owner nor staff
    #[error("tag '{0}' belongs to another member")]
    NotTagOwner(String),

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == News Error Enum ==
/// Errors raised by the news service.
#[derive(Error, Debug)]
pub enum NewsError {
    /// HTTP transport or non-success status from the news API or webhook
    #[error("news request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The news API returned no articles, even after a retry
    #[error("news API returned an empty article batch for country: {0}")]
    EmptyBatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_error_display() {
        let err = CacheError::KeyNotFound("abc".to_string());
        assert_eq!(err.to_string(), "key not found in cache: abc");
    }

    #[test]
    fn test_store_error_from_serde() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: StoreError = bad.unwrap_err().into();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn test_registry_error_wraps_store() {
        let err: RegistryError = StoreError::Backend("closed".to_string()).into();
        assert!(matches!(err, RegistryError::Store(_)));
        assert_eq!(err.to_string(), "store backend error: closed");
    }

    #[test]
    fn test_tag_owner_error_display() {
        let err = TagError::NotTagOwner("rules".to_string());
        assert!(err.to_string().contains("rules"));
    }
}
