//! Expiring Cache Module
//!
//! Mapping from string keys to opaque values where every entry silently
//! expires a fixed duration after its most recent insertion. Expiry is lazy:
//! stale entries are evicted by the next operation that observes them, never
//! by a background sweep, so an expired-but-untouched entry keeps occupying
//! raw storage until then. The cache is unbounded apart from TTL shrinkage.
//!
//! The cache itself is synchronous and never suspends; callers sharing one
//! across tasks or threads wrap it in a lock for the full duration of each
//! operation, since even read-shaped operations (`get`, `len`, `keys`)
//! mutate storage through eviction.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::CacheError;

// == Expiring Cache ==
/// In-memory key-value cache with per-entry TTL and lazy eviction.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use dscn_bot::cache::ExpiringCache;
///
/// let mut cache = ExpiringCache::case_insensitive(Duration::from_secs(60));
/// cache.insert("Aeden", "artist-document");
/// assert_eq!(cache.get("aeden"), Some(&"artist-document"));
/// ```
#[derive(Debug)]
pub struct ExpiringCache<V> {
    /// Key-value storage; may transiently hold stale entries
    entries: HashMap<String, CacheEntry<V>>,
    /// Time-to-live measured from each entry's most recent insertion
    ttl: Duration,
    /// Normalize keys to lowercase on both write and read
    case_insensitive: bool,
    /// Lookup statistics
    stats: CacheStats,
}

impl<V> ExpiringCache<V> {
    // == Constructors ==
    /// Creates a cache whose entries expire `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            case_insensitive: false,
            stats: CacheStats::new(),
        }
    }

    /// Creates a cache that lowercases keys at both write and read time.
    pub fn case_insensitive(ttl: Duration) -> Self {
        Self {
            case_insensitive: true,
            ..Self::new(ttl)
        }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Insert ==
    /// Stores a value under `key`, stamped with the current instant.
    ///
    /// An existing entry for the key is overwritten unconditionally, which
    /// also resets its TTL clock: a key reinserted at T2 stays live until
    /// T2 + ttl regardless of when it was first stored.
    pub fn insert(&mut self, key: &str, value: V) {
        let key = self.normalize(key);
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the value for `key` if a live entry exists.
    ///
    /// A stale entry found under the key is removed as a side effect and the
    /// lookup reports a miss. Missing and expired keys are indistinguishable
    /// to the caller.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let key = self.normalize(key);
        let expired = match self.entries.get(&key) {
            Some(entry) => entry.is_expired(self.ttl),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            debug!(key = %key, "cache entry expired, evicting");
            self.entries.remove(&key);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        let entry = self.entries.get(&key)?;
        debug!(key = %key, remaining = ?entry.time_remaining(self.ttl), "cache hit");
        Some(&entry.value)
    }

    // == Contains ==
    /// Checks whether a live entry exists for `key`.
    ///
    /// Applies the same liveness rule and stale-eviction side effect as
    /// [`get`](Self::get).
    pub fn contains_key(&mut self, key: &str) -> bool {
        let key = self.normalize(key);
        match self.entries.get(&key) {
            Some(entry) if entry.is_expired(self.ttl) => {
                debug!(key = %key, "cache entry expired, evicting");
                self.entries.remove(&key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    // == Remove ==
    /// Removes the entry for `key` unconditionally, live or stale.
    ///
    /// This is the only cache operation that signals an error: removing a
    /// key absent from raw storage returns [`CacheError::KeyNotFound`].
    /// Callers wanting an idempotent delete check `contains_key` first.
    pub fn remove(&mut self, key: &str) -> Result<(), CacheError> {
        let key = self.normalize(key);
        match self.entries.remove(&key) {
            Some(_) => Ok(()),
            None => Err(CacheError::KeyNotFound(key)),
        }
    }

    // == Length ==
    /// Returns the number of currently live entries.
    ///
    /// Full-scan cost: every stale entry found during the scan is purged as
    /// a side effect.
    pub fn len(&mut self) -> usize {
        self.purge_expired();
        self.entries.len()
    }

    /// Returns true if no live entries remain.
    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    // == Keys ==
    /// Iterates over the keys of live entries, in arbitrary order.
    ///
    /// Stale entries observed by the scan are evicted before the iterator is
    /// handed out, so only live keys are ever yielded.
    pub fn keys(&mut self) -> impl Iterator<Item = &str> + '_ {
        self.purge_expired();
        self.entries.keys().map(String::as_str)
    }

    // == Clear ==
    /// Drops every entry, live or stale.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Raw Length ==
    /// Returns the raw storage size, counting expired-but-unswept entries.
    ///
    /// Unlike [`len`](Self::len) this takes no eviction side effect, so it
    /// exposes how much memory lazy expiry is still holding on to.
    pub fn raw_len(&self) -> usize {
        self.entries.len()
    }

    // == Stats ==
    /// Returns the lookup statistics accumulated so far.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    // == Internals ==
    /// Canonical form of a key under the configured case policy.
    fn normalize(&self, key: &str) -> String {
        if self.case_insensitive {
            key.to_lowercase()
        } else {
            key.to_string()
        }
    }

    /// Drops every stale entry in one pass over raw storage.
    fn purge_expired(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
    }
}
