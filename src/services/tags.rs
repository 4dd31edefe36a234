//! Tag Store Service
//!
//! Tags are named text snippets members recall in chat. Lookups accept the
//! primary name or any alias; creation and aliasing guard against
//! collisions with a full scan, the same discipline the bot has always
//! used for its small tag collection.

use std::sync::Arc;

use futures::TryStreamExt;
use tracing::info;

use crate::error::TagError;
use crate::models::Tag;
use crate::store::{Collection, Filter, Update};

/// Maximum number of suggestions returned by [`TagStore::search`].
const MAX_SUGGESTIONS: usize = 5;

// == Tag Store ==
/// CRUD over the tag collection. No cache: tag traffic never justified one.
pub struct TagStore {
    collection: Arc<dyn Collection<Tag>>,
}

impl TagStore {
    // == Constructor ==
    pub fn new(collection: Arc<dyn Collection<Tag>>) -> Self {
        Self { collection }
    }

    /// Matches a tag by primary name or alias.
    fn lookup_filter(name: &str) -> Filter {
        Filter::any_of([
            Filter::eq("name", name),
            Filter::contains("aliases", name),
        ])
    }

    /// True if any existing tag already answers to `name`.
    async fn name_taken(&self, name: &str) -> Result<bool, TagError> {
        let mut tags = self.collection.find(&Filter::all()).await?;
        while let Some(tag) = tags.try_next().await? {
            if tag.answers_to(name) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // == Get ==
    /// Fetches a tag by name or alias.
    pub async fn get(&self, name: &str) -> Result<Tag, TagError> {
        self.collection
            .find_one(&Self::lookup_filter(name))
            .await?
            .ok_or_else(|| TagError::UnknownTag(name.to_string()))
    }

    // == Create ==
    /// Creates a tag and returns its minted id.
    pub async fn create(&self, owner: u64, name: &str, content: &str) -> Result<u32, TagError> {
        if self.name_taken(name).await? {
            return Err(TagError::DuplicateTag(name.to_string()));
        }

        let tag = Tag::new(owner, name, content);
        let id = tag.id;
        self.collection.insert_one(&tag).await?;
        info!(name, id, "tag created");
        Ok(id)
    }

    // == Delete ==
    /// Deletes a tag. Only the owner, or staff, may delete it.
    ///
    /// Role resolution happens upstream; this layer only receives the
    /// verdict as `is_staff`.
    pub async fn delete(&self, name: &str, requester: u64, is_staff: bool) -> Result<(), TagError> {
        let tag = self.get(name).await?;
        if tag.owner != requester && !is_staff {
            return Err(TagError::NotTagOwner(tag.name));
        }

        self.collection
            .delete_one(&Filter::eq("name", tag.name.as_str()))
            .await?;
        info!(name = %tag.name, "tag deleted");
        Ok(())
    }

    // == Alias ==
    /// Registers `alias` as an alternate name for an existing tag.
    pub async fn add_alias(&self, name: &str, alias: &str) -> Result<(), TagError> {
        if self.name_taken(alias).await? {
            return Err(TagError::DuplicateTag(alias.to_string()));
        }

        let tag = self.get(name).await?;
        self.collection
            .update_one(
                &Filter::eq("name", tag.name.as_str()),
                &Update::new().push("aliases", alias),
            )
            .await?;
        info!(name = %tag.name, alias, "tag alias added");
        Ok(())
    }

    // == Usage Counter ==
    /// Bumps the tag's use counter.
    pub async fn increment_uses(&self, name: &str) -> Result<(), TagError> {
        let matched = self
            .collection
            .update_one(&Self::lookup_filter(name), &Update::new().inc("uses", 1))
            .await?;
        if !matched {
            return Err(TagError::UnknownTag(name.to_string()));
        }
        Ok(())
    }

    // == Search ==
    /// Case-insensitive substring suggestions over primary tag names,
    /// closest match (earliest occurrence, then shortest name) first.
    pub async fn search(&self, query: &str) -> Result<Vec<String>, TagError> {
        let tags: Vec<Tag> = self
            .collection
            .find(&Filter::all())
            .await?
            .try_collect()
            .await?;

        let needle = query.to_lowercase();
        let mut ranked: Vec<(usize, usize, String)> = tags
            .into_iter()
            .filter_map(|tag| {
                tag.name
                    .to_lowercase()
                    .find(&needle)
                    .map(|pos| (pos, tag.name.len(), tag.name))
            })
            .collect();
        ranked.sort();

        Ok(ranked
            .into_iter()
            .map(|(_, _, name)| name)
            .take(MAX_SUGGESTIONS)
            .collect())
    }
}
