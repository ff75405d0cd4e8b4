//! Core traits for typed records and their document conversions.
//!
//! Stored documents are plain BSON mappings keyed by an externally visible
//! string identifier. The identifier travels on the wire under the reserved
//! [`ID_FIELD`] key: it is stripped from a document on insert and injected
//! into every returned copy.

use bson::{Bson, Document, de::deserialize_from_bson, ser::serialize_to_bson};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::{StoreError, StoreResult};

/// Reserved key carrying a document's identifier on the wire.
pub const ID_FIELD: &str = "_id";

/// Core trait that all typed records stored in a document store must implement.
///
/// Every record has a unique string identifier and names the collection it
/// belongs to. The identifier field must serialize under the reserved
/// [`ID_FIELD`] key (e.g. with `#[serde(rename = "_id")]`) so that record
/// conversions line up with the stored document shape.
///
/// # Example
///
/// ```ignore
/// use docstub::document::Record;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Club {
///     #[serde(rename = "_id")]
///     pub name: String,
///     pub members: Vec<String>,
/// }
///
/// impl Record for Club {
///     fn id(&self) -> &str {
///         &self.name
///     }
///
///     fn collection_name() -> &'static str {
///         "clubs"
///     }
/// }
/// ```
pub trait Record: Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + 'static {
    /// Returns this record's unique identifier.
    fn id(&self) -> &str;

    /// Returns the name of the collection this record belongs to.
    ///
    /// This should be a static, lowercase identifier (e.g. "activities", "teachers").
    fn collection_name() -> &'static str;
}

/// Extension trait providing serialization/deserialization utilities for records.
///
/// This trait is automatically implemented for all types that implement [`Record`].
pub trait RecordExt: Record {
    /// Converts this record to a BSON document, identifier included under [`ID_FIELD`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the record does not
    /// serialize to a document.
    fn to_document(&self) -> StoreResult<Document>;

    /// Creates a record from a BSON document carrying its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_document(document: Document) -> StoreResult<Self>;

    /// Converts this record to a JSON value for serialization.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> StoreResult<Value>;

    /// Creates a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_json(value: Value) -> StoreResult<Self>;
}

impl<R: Record> RecordExt for R {
    fn to_document(&self) -> StoreResult<Document> {
        match serialize_to_bson(self)? {
            Bson::Document(document) => Ok(document),
            other => Err(StoreError::Serialization(format!(
                "record serialized to a non-document BSON value: {other:?}"
            ))),
        }
    }

    fn from_document(document: Document) -> StoreResult<Self> {
        Ok(deserialize_from_bson(Bson::Document(document))?)
    }

    fn to_json(&self) -> StoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> StoreResult<Self> {
        Ok(from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Club {
        #[serde(rename = "_id")]
        name: String,
        members: Vec<String>,
    }

    impl Record for Club {
        fn id(&self) -> &str {
            &self.name
        }

        fn collection_name() -> &'static str {
            "clubs"
        }
    }

    #[test]
    fn record_roundtrips_through_document() {
        let club = Club {
            name: "Chess Club".to_string(),
            members: vec!["michael@mergington.edu".to_string()],
        };

        let document = club.to_document().unwrap();
        assert_eq!(
            document.get(ID_FIELD).and_then(Bson::as_str),
            Some("Chess Club")
        );

        let restored = Club::from_document(document).unwrap();
        assert_eq!(restored, club);
    }

    #[test]
    fn record_roundtrips_through_json() {
        let club = Club {
            name: "Art Club".to_string(),
            members: vec![],
        };

        let json = club.to_json().unwrap();
        assert_eq!(json["_id"], "Art Club");
        assert_eq!(Club::from_json(json).unwrap(), club);
    }
}
