//! Main document store interface for interacting with document backends.
//!
//! [`DocumentStore`] owns a backend and hands out [`Collection`] handles.
//! Stores are constructed once at process start and passed by reference to
//! whatever layer needs them; nothing in this crate relies on ambient
//! global state, so each test can construct a fresh store.
//!
//! # Example
//!
//! ```ignore
//! use docstub::store::DocumentStore;
//!
//! let store = DocumentStore::new(backend);
//! let activities = store.collection("activities");
//! ```

use crate::{backend::StoreBackend, collection::Collection, document::Record};

/// A document store bound to a specific backend implementation.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Gets a collection handle with the given name.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the collection
    pub fn collection<'a>(&'a self, name: &str) -> Collection<'a, B> {
        Collection::new(name.to_string(), &self.backend)
    }

    /// Gets the collection a record type belongs to.
    ///
    /// The collection name is determined by the record type's
    /// `collection_name()` method.
    pub fn record_collection<'a, R: Record>(&'a self) -> Collection<'a, B> {
        Collection::new(R::collection_name().to_string(), &self.backend)
    }
}
