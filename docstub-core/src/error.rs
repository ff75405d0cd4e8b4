//! Error types and result types for document store operations.
//!
//! The emulation favors silent fallback over raising: lookup misses and
//! update-target misses surface as `None` results or a zero modification
//! count, never as errors. The variants below cover the few conditions that
//! are actual failures.

use bson::error::Error as BsonError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error when converting between record formats (BSON, JSON).
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// A document was handed to `insert_one` without a string identifier under
    /// the reserved `_id` key. The contract requires callers to always supply one.
    #[error("Document inserted into collection {0} has no string _id field")]
    MissingIdentifier(String),
}

/// A specialized `Result` type for document store operations.
///
/// This type alias is used throughout the crate to indicate operations that may fail
/// with a [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<BsonError> for StoreError {
    fn from(err: BsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
