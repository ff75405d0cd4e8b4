//! In-memory storage implementation for the document store.
//!
//! Documents are plain BSON mappings held in HashMaps behind a single
//! async-aware read-write lock. Every operation takes the lock exactly once
//! for its whole read or read-modify-write, so operations against the same
//! identifier serialize and the shared maps stay structurally consistent.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use bson::{Bson, Document, doc};
use mea::rwlock::RwLock;
use tracing::debug;

use docstub_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::ID_FIELD,
    error::{StoreError, StoreResult},
    query::Query,
    update::{Mutator, Update, UpdateResult},
};

use crate::matcher::{ClauseMatcher, distinct_schedule_days};

type CollectionMap = HashMap<String, Document>;
type StoreMap = HashMap<String, CollectionMap>;

/// Thread-safe in-memory document storage backend.
///
/// `MemoryStore` is cloneable and uses an `Arc`-wrapped internal state;
/// clones of the same instance share the same underlying data. Collections
/// are created implicitly on first insert.
///
/// # Performance
///
/// Queries scan every document in a collection; there is no indexing.
/// The store is meant to hold the handful of records a development
/// deployment needs while a real database server is unavailable, so a full
/// scan is always cheap.
///
/// # Example
///
/// ```ignore
/// use docstub_memory::MemoryStore;
/// use docstub::{backend::StoreBackend, query::Query};
/// use bson::doc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = MemoryStore::new();
///
///     let document = doc! { "_id": "Chess Club", "participants": [] };
///     store.insert_one(document, "activities").await?;
///
///     let found = store.find_one(&Query::by_id("Chess Club"), "activities").await?;
///     assert!(found.is_some());
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct MemoryStore {
    /// The main storage map: collection name -> (identifier -> document)
    store: Arc<RwLock<StoreMap>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(StoreMap::new())),
        }
    }

    /// Creates a builder for constructing a `MemoryStore`.
    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::default()
    }
}

#[async_trait]
impl StoreBackend for MemoryStore {
    async fn insert_one(&self, mut document: Document, collection: &str) -> StoreResult<()> {
        let id = match document.remove(ID_FIELD) {
            Some(Bson::String(id)) => id,
            _ => return Err(StoreError::MissingIdentifier(collection.to_string())),
        };

        let mut store = self.store.write().await;
        let collection_map = store
            .entry(collection.to_string())
            .or_default();

        debug!(collection, id = id.as_str(), "inserting document");
        collection_map.insert(id, document);

        Ok(())
    }

    async fn find(&self, query: &Query, collection: &str) -> StoreResult<Vec<Document>> {
        let store = self.store.read().await;
        let collection_map = match store.get(collection) {
            Some(col) => col,
            None => return Ok(vec![]),
        };

        let mut results = Vec::new();
        for (id, document) in collection_map.iter() {
            if ClauseMatcher::new(document).matches(query) {
                results.push(with_id(document, id));
            }
        }

        Ok(results)
    }

    async fn find_one(&self, query: &Query, collection: &str) -> StoreResult<Option<Document>> {
        let id = match query.id_lookup() {
            Some(id) => id,
            None => return Ok(None),
        };

        let store = self.store.read().await;
        Ok(store
            .get(collection)
            .and_then(|col| col.get(id))
            .map(|document| with_id(document, id)))
    }

    async fn update_one(
        &self,
        query: &Query,
        update: &Update,
        collection: &str,
    ) -> StoreResult<UpdateResult> {
        let id = match query.id_lookup() {
            Some(id) => id,
            None => return Ok(UpdateResult::default()),
        };

        let mut store = self.store.write().await;
        let document = match store
            .get_mut(collection)
            .and_then(|col| col.get_mut(id))
        {
            Some(document) => document,
            None => return Ok(UpdateResult::default()),
        };

        for mutator in &update.mutators {
            apply_mutator(document, mutator);
        }

        debug!(collection, id, "updated document");

        // The count reflects that the target existed, not that a field changed.
        Ok(UpdateResult { modified_count: 1 })
    }

    async fn count_documents(&self, _query: &Query, collection: &str) -> StoreResult<u64> {
        let store = self.store.read().await;

        Ok(store
            .get(collection)
            .map_or(0, |col| col.len() as u64))
    }

    async fn aggregate(
        &self,
        _pipeline: &[Document],
        collection: &str,
    ) -> StoreResult<Vec<Document>> {
        let store = self.store.read().await;
        let days = match store.get(collection) {
            Some(col) => distinct_schedule_days(col.values()),
            None => vec![],
        };

        Ok(days
            .into_iter()
            .map(|day| doc! { "_id": day })
            .collect())
    }
}

/// Deep copy of a stored document with its identifier injected.
fn with_id(document: &Document, id: &str) -> Document {
    let mut copy = document.clone();
    copy.insert(ID_FIELD, id);
    copy
}

fn apply_mutator(document: &mut Document, mutator: &Mutator) {
    match mutator {
        Mutator::Push { field, value } => {
            if !document.contains_key(field) {
                document.insert(field.as_str(), Bson::Array(vec![]));
            }
            // A push onto an existing non-array field falls through silently.
            if let Some(Bson::Array(items)) = document.get_mut(field) {
                items.push(value.clone());
            }
        }
        Mutator::Pull { field, value } => {
            if let Some(Bson::Array(items)) = document.get_mut(field) {
                if let Some(position) = items.iter().position(|item| item == value) {
                    items.remove(position);
                }
            }
        }
    }
}

/// Builder for constructing [`MemoryStore`] instances.
///
/// Currently a no-op builder; it exists so callers can construct the
/// backend through the same factory shape as any other implementation.
#[derive(Default)]
pub struct MemoryStoreBuilder;

#[async_trait]
impl StoreBackendBuilder for MemoryStoreBuilder {
    type Backend = MemoryStore;

    /// Builds and returns a new [`MemoryStore`] instance.
    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(MemoryStore::new())
    }
}
