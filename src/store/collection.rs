//! Collection Trait
//!
//! The narrow interface services consume. Mirrors the handful of operations
//! the bot issues against its document database; anything a backend cannot
//! complete surfaces as a [`StoreError`], never a panic.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::StoreError;
use crate::store::{Filter, Update};

/// Async sequence of documents produced by [`Collection::find`].
pub type DocumentStream<T> = BoxStream<'static, Result<T, StoreError>>;

// == Collection ==
/// A typed document collection.
///
/// Implementations are shared behind `Arc` and called concurrently; interior
/// synchronization is the backend's responsibility.
#[async_trait]
pub trait Collection<T>: Send + Sync {
    /// Returns the first document matching `filter`, if any.
    async fn find_one(&self, filter: &Filter) -> Result<Option<T>, StoreError>;

    /// Returns a cursor over every document matching `filter`.
    async fn find(&self, filter: &Filter) -> Result<DocumentStream<T>, StoreError>;

    /// Inserts a document.
    async fn insert_one(&self, document: &T) -> Result<(), StoreError>;

    /// Applies `update` to the first document matching `filter`.
    ///
    /// Returns true if a document matched.
    async fn update_one(&self, filter: &Filter, update: &Update) -> Result<bool, StoreError>;

    /// Deletes the first document matching `filter`.
    ///
    /// Returns true if a document was deleted.
    async fn delete_one(&self, filter: &Filter) -> Result<bool, StoreError>;

    /// Counts the documents matching `filter`.
    async fn count_documents(&self, filter: &Filter) -> Result<u64, StoreError>;
}
