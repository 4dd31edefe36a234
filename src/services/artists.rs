//! Artist Registry Service
//!
//! CRUD over the artist collection with a short-lived lookup cache in front
//! of `find_one`. The cache is case-insensitive so that `aeden`, `Aeden` and
//! `AEDEN` resolve to the same hot entry, and it is owned by the registry
//! instance rather than shared process-wide.

use std::sync::Arc;
use std::time::Duration;

use futures::TryStreamExt;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheStats, ExpiringCache};
use crate::error::RegistryError;
use crate::models::Artist;
use crate::store::{Collection, Filter, Update};

/// How long a fetched artist document stays hot.
pub const DEFAULT_ARTIST_CACHE_TTL: Duration = Duration::from_secs(60);

// == Artist Registry ==
/// Keeps the label's artist roster.
pub struct ArtistRegistry {
    /// Backing document collection
    collection: Arc<dyn Collection<Artist>>,
    /// Lookup cache; the lock is held for the full duration of each cache
    /// operation because even reads evict stale entries
    cache: RwLock<ExpiringCache<Artist>>,
}

impl ArtistRegistry {
    // == Constructor ==
    /// Creates a registry over `collection` with the given cache TTL.
    pub fn new(collection: Arc<dyn Collection<Artist>>, cache_ttl: Duration) -> Self {
        Self {
            collection,
            cache: RwLock::new(ExpiringCache::case_insensitive(cache_ttl)),
        }
    }

    fn name_filter(name: &str) -> Filter {
        Filter::eq("name", name)
    }

    // == Get ==
    /// Looks up an artist by name, serving from cache when the entry is
    /// still live.
    ///
    /// A database hit is cached under the stored document's name, so
    /// follow-up lookups in any casing stay off the database until the TTL
    /// lapses.
    pub async fn get(&self, name: &str) -> Result<Artist, RegistryError> {
        if let Some(artist) = self.cache.write().await.get(name) {
            debug!(name, "artist served from cache");
            return Ok(artist.clone());
        }

        match self.collection.find_one(&Self::name_filter(name)).await? {
            Some(artist) => {
                self.cache
                    .write()
                    .await
                    .insert(&artist.name, artist.clone());
                Ok(artist)
            }
            None => Err(RegistryError::UnknownArtist(name.to_string())),
        }
    }

    // == Add ==
    /// Registers a new artist.
    ///
    /// Fails with [`RegistryError::DuplicateArtist`] if the name is already
    /// taken, checking live cache entries first and the collection second.
    pub async fn add(&self, artist: Artist) -> Result<(), RegistryError> {
        let duplicate = self.cache.write().await.contains_key(&artist.name)
            || self
                .collection
                .find_one(&Self::name_filter(&artist.name))
                .await?
                .is_some();
        if duplicate {
            return Err(RegistryError::DuplicateArtist(artist.name));
        }

        self.collection.insert_one(&artist).await?;
        info!(name = %artist.name, "artist registered");

        let key = artist.name.clone();
        self.cache.write().await.insert(&key, artist);
        Ok(())
    }

    // == Update ==
    /// Applies `changes` to the named artist's document.
    ///
    /// The cached copy, if any, is dropped so the next lookup rereads the
    /// updated document.
    pub async fn update(&self, name: &str, changes: Update) -> Result<(), RegistryError> {
        let matched = self
            .collection
            .update_one(&Self::name_filter(name), &changes)
            .await?;
        if !matched {
            return Err(RegistryError::UnknownArtist(name.to_string()));
        }

        // Idempotent on the cache side: the entry may have expired already.
        let _ = self.cache.write().await.remove(name);
        info!(name, "artist updated");
        Ok(())
    }

    // == Remove ==
    /// Deletes the named artist from the roster.
    pub async fn remove(&self, name: &str) -> Result<(), RegistryError> {
        let deleted = self
            .collection
            .delete_one(&Self::name_filter(name))
            .await?;
        if !deleted {
            return Err(RegistryError::UnknownArtist(name.to_string()));
        }

        let _ = self.cache.write().await.remove(name);
        info!(name, "artist removed");
        Ok(())
    }

    // == List ==
    /// Returns the full roster, bypassing the cache.
    pub async fn list(&self) -> Result<Vec<Artist>, RegistryError> {
        let artists = self
            .collection
            .find(&Filter::all())
            .await?
            .try_collect()
            .await?;
        Ok(artists)
    }

    // == Stats ==
    /// Snapshot of the lookup cache's hit/miss counters.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats().clone()
    }
}
