//! Cache Entry Module
//!
//! Defines the structure for individual cache entries. The TTL is a property
//! of the owning cache, not of the entry, so liveness checks take it as an
//! argument.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single stored value together with its insertion timestamp.
///
/// The payload is opaque to the cache; expiry is judged purely on the
/// monotonic clock captured at insertion time.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic timestamp captured when the value was (re)inserted
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is live strictly while less than `ttl`
    /// has elapsed since insertion. Once the full TTL duration has elapsed
    /// the entry counts as expired.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }

    // == Time Remaining ==
    /// Returns the remaining lifetime under the given TTL.
    ///
    /// Returns `Duration::ZERO` once the entry has expired.
    pub fn time_remaining(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.inserted_at.elapsed())
    }
}
