//! Collection handles for document store operations.
//!
//! A [`Collection`] binds a collection name to a backend reference and
//! forwards each operation with that name. Typed convenience methods
//! convert between serde-defined [`Record`]s and the stored document shape.
//!
//! # Example
//!
//! ```ignore
//! # async fn example(store: &docstub::store::DocumentStore<impl docstub::backend::StoreBackend>) -> docstub::error::StoreResult<()> {
//! use docstub::query::Query;
//!
//! let activities = store.collection("activities");
//! let all = activities.find(&Query::new()).await?;
//! # Ok(()) }
//! ```

use bson::Document;

use crate::{
    backend::StoreBackend,
    document::{Record, RecordExt},
    error::StoreResult,
    query::Query,
    update::{Update, UpdateResult},
};

/// A named collection bound to a storage backend.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the backend reference
/// * `B` - The storage backend type
#[derive(Debug)]
pub struct Collection<'a, B: StoreBackend> {
    name: String,
    backend: &'a B,
}

impl<'a, B: StoreBackend> Collection<'a, B> {
    /// Creates a new collection reference (internal use).
    pub(crate) fn new(name: String, backend: &'a B) -> Self {
        Self { name, backend }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a document carrying its identifier under `_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if the document
    /// has no string `_id`.
    pub async fn insert_one(&self, document: Document) -> StoreResult<()> {
        self.backend
            .insert_one(document, self.name())
            .await
    }

    /// Serializes a record and inserts it.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if serialization
    /// or insertion fails.
    pub async fn insert_record<R: Record>(&self, record: &R) -> StoreResult<()> {
        self.backend
            .insert_one(record.to_document()?, self.name())
            .await
    }

    /// Returns copies of all documents matching the query.
    pub async fn find(&self, query: &Query) -> StoreResult<Vec<Document>> {
        self.backend.find(query, self.name()).await
    }

    /// Runs [`find`](Self::find) and deserializes each match into a record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if any matched
    /// document fails to deserialize.
    pub async fn find_as<R: Record>(&self, query: &Query) -> StoreResult<Vec<R>> {
        self.backend
            .find(query, self.name())
            .await?
            .into_iter()
            .map(R::from_document)
            .collect()
    }

    /// Returns a copy of the document selected by the query's identifier
    /// clause, or `None` on a miss.
    pub async fn find_one(&self, query: &Query) -> StoreResult<Option<Document>> {
        self.backend.find_one(query, self.name()).await
    }

    /// Looks up a document by identifier and deserializes it into a record.
    pub async fn find_one_as<R: Record>(&self, id: &str) -> StoreResult<Option<R>> {
        self.backend
            .find_one(&Query::by_id(id), self.name())
            .await?
            .map(R::from_document)
            .transpose()
    }

    /// Applies an update to the document selected by the query's identifier clause.
    ///
    /// The result's modification count is 1 if the target identifier
    /// existed, 0 otherwise.
    pub async fn update_one(&self, query: &Query, update: &Update) -> StoreResult<UpdateResult> {
        self.backend
            .update_one(query, update, self.name())
            .await
    }

    /// Returns the total number of documents; the query is deliberately ignored.
    pub async fn count_documents(&self, query: &Query) -> StoreResult<u64> {
        self.backend
            .count_documents(query, self.name())
            .await
    }

    /// Returns the distinct schedule days across the collection; the
    /// pipeline is ignored.
    pub async fn aggregate(&self, pipeline: &[Document]) -> StoreResult<Vec<Document>> {
        self.backend
            .aggregate(pipeline, self.name())
            .await
    }
}
