//! Convenient re-exports of commonly used types from docstub.
//!
//! Import this prelude module to quickly access the most frequently used
//! types and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use docstub::prelude::*;
//! ```

pub use docstub_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    collection::Collection,
    document::{ID_FIELD, Record, RecordExt},
    error::{StoreError, StoreResult},
    query::{Clause, Filter, Query},
    store::DocumentStore,
    update::{Mutator, Update, UpdateResult},
};
pub use docstub_memory::MemoryStore;
