//! In-Memory Collection Backend
//!
//! Stores documents as JSON values behind an async RwLock, the way a
//! document database would hold them schemaless and type them only at the
//! edges. Backs the integration tests and self-contained deployments.

use std::marker::PhantomData;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::{Collection, DocumentStream, Filter, Update};

// == Memory Collection ==
/// A [`Collection`] backed by an in-process vector of JSON documents.
#[derive(Debug, Default)]
pub struct MemoryCollection<T> {
    /// Raw document storage
    documents: RwLock<Vec<Value>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MemoryCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T> Collection<T> for MemoryCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn find_one(&self, filter: &Filter) -> Result<Option<T>, StoreError> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .find(|doc| filter.matches(doc))
            .map(|doc| serde_json::from_value(doc.clone()).map_err(StoreError::from))
            .transpose()
    }

    async fn find(&self, filter: &Filter) -> Result<DocumentStream<T>, StoreError> {
        let documents = self.documents.read().await;
        let matched: Vec<Result<T, StoreError>> = documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .map(|doc| serde_json::from_value(doc.clone()).map_err(StoreError::from))
            .collect();

        Ok(stream::iter(matched).boxed())
    }

    async fn insert_one(&self, document: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(document)?;
        self.documents.write().await.push(value);
        Ok(())
    }

    async fn update_one(&self, filter: &Filter, update: &Update) -> Result<bool, StoreError> {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|doc| filter.matches(doc)) {
            Some(doc) => {
                update.apply(doc);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_one(&self, filter: &Filter) -> Result<bool, StoreError> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|doc| filter.matches(doc)) {
            Some(index) => {
                documents.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().filter(|doc| filter.matches(doc)).count() as u64)
    }
}
