//! Storage backend abstraction for the document store.
//!
//! The [`StoreBackend`] trait defines the small operation set the emulation
//! supports: insert, filtered scan, point lookup, incremental update, count,
//! and one fixed aggregation. It stops there; that is the exact surface the
//! surrounding application consumes, and there is no delete operation, no
//! indexing, and no general pipeline support.
//!
//! # Thread Safety
//!
//! Implementations must be thread-safe (`Send + Sync`). The exact locking
//! model is implementation-specific, but every operation must complete as a
//! single atomic read or read-modify-write over the collection mapping, so
//! that concurrent updates against the same identifier serialize and scans
//! never observe a partially applied mutation.
//!
//! # Error Handling
//!
//! Operations return [`StoreResult<T>`](crate::error::StoreResult). Misses
//! are sentinel results (`None`, empty vectors, a zero modification count),
//! never errors; the only hard failure is inserting a document without a
//! string `_id`.

use async_trait::async_trait;
use bson::Document;
use std::fmt::Debug;

use crate::{
    error::StoreResult,
    query::Query,
    update::{Update, UpdateResult},
};

/// Abstract interface for document storage backends.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts a document into a collection.
    ///
    /// The document must carry its identifier as a BSON string under the
    /// reserved `_id` key; the key is removed and the remaining fields are
    /// stored under that identifier. Inserting an existing identifier
    /// replaces the stored document. The collection is created
    /// automatically if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingIdentifier`](crate::error::StoreError::MissingIdentifier)
    /// if the document has no string `_id`.
    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<()>;

    /// Returns copies of all documents matching the query, each with its
    /// identifier injected under `_id`, in collection enumeration order.
    ///
    /// Clauses combine with logical AND; an identifier clause imposes no
    /// constraint here. An unknown collection yields an empty result.
    async fn find(&self, query: &Query, collection: &str) -> StoreResult<Vec<Document>>;

    /// Returns a copy of the document selected by the query's identifier
    /// clause, or `None` if the query carries no identifier clause or no
    /// such document exists.
    async fn find_one(&self, query: &Query, collection: &str) -> StoreResult<Option<Document>>;

    /// Applies the update's mutators to the document selected by the
    /// query's identifier clause.
    ///
    /// The returned [`UpdateResult`] reports a modification count of 1 if
    /// the target identifier existed and 0 otherwise, regardless of whether
    /// any field actually changed.
    async fn update_one(
        &self,
        query: &Query,
        update: &Update,
        collection: &str,
    ) -> StoreResult<UpdateResult>;

    /// Returns the total number of documents in the collection.
    ///
    /// The query parameter is accepted for interface compatibility and
    /// deliberately ignored; the count is always the full collection size.
    async fn count_documents(&self, query: &Query, collection: &str) -> StoreResult<u64>;

    /// Returns the distinct weekday names across all documents'
    /// `schedule_details.days`, as `{"_id": day}` documents sorted
    /// lexicographically by day.
    ///
    /// The pipeline parameter is accepted for interface compatibility and
    /// ignored; this is a fixed special case, not an aggregation engine.
    async fn aggregate(
        &self,
        pipeline: &[Document],
        collection: &str,
    ) -> StoreResult<Vec<Document>>;
}

#[async_trait]
impl<B> StoreBackend for &B
where
    B: StoreBackend,
{
    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<()> {
        (*self)
            .insert_one(document, collection)
            .await
    }

    async fn find(&self, query: &Query, collection: &str) -> StoreResult<Vec<Document>> {
        (*self).find(query, collection).await
    }

    async fn find_one(&self, query: &Query, collection: &str) -> StoreResult<Option<Document>> {
        (*self).find_one(query, collection).await
    }

    async fn update_one(
        &self,
        query: &Query,
        update: &Update,
        collection: &str,
    ) -> StoreResult<UpdateResult> {
        (*self)
            .update_one(query, update, collection)
            .await
    }

    async fn count_documents(&self, query: &Query, collection: &str) -> StoreResult<u64> {
        (*self)
            .count_documents(query, collection)
            .await
    }

    async fn aggregate(
        &self,
        pipeline: &[Document],
        collection: &str,
    ) -> StoreResult<Vec<Document>> {
        (*self)
            .aggregate(pipeline, collection)
            .await
    }
}

/// Factory trait for creating backend instances.
#[async_trait]
pub trait StoreBackendBuilder {
    /// The backend type this builder produces.
    type Backend: StoreBackend;

    /// Builds and returns a new backend instance.
    async fn build(self) -> StoreResult<Self::Backend>;
}
