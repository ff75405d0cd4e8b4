//! Main docstub crate: an in-memory stand-in for a document database.
//!
//! This crate is the primary entry point for users of the docstub project.
//! It re-exports the core types from the sub-crates, provides the in-memory
//! storage backend, and carries the application layer: typed activity and
//! teacher records, the development password-hashing stub, and the static
//! seed catalog with its idempotent seeding entry point.
//!
//! The store emulates only the query and update shapes the surrounding
//! application issues: day-intersection and time-window filters over
//! `schedule_details`, identifier point lookups, array push/pull mutations,
//! a full-size count, and one fixed distinct-days aggregation. It is not a
//! general document-database clone.
//!
//! # Quick Start
//!
//! ```ignore
//! use docstub::{prelude::*, memory::MemoryStore, seed};
//!
//! #[tokio::main]
//! async fn main() -> StoreResult<()> {
//!     // Construct one store at process start and pass it by reference.
//!     let store = DocumentStore::new(MemoryStore::new());
//!
//!     // Populate the activity and teacher collections if they are empty.
//!     seed::init_database(&store).await?;
//!
//!     // Query activities meeting on Friday afternoons.
//!     let friday = Query::new()
//!         .with(Filter::days_intersect(["Friday"]))
//!         .with(Filter::start_time_at_least("15:00"));
//!     let matches = store.collection(seed::ACTIVITIES).find(&friday).await?;
//!     println!("{} activities", matches.len());
//!
//!     // Sign a student up.
//!     let signup = Update::new().push("participants", "kai@mergington.edu");
//!     store
//!         .collection(seed::ACTIVITIES)
//!         .update_one(&Query::by_id("Chess Club"), &signup)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod model;
pub mod prelude;
pub mod seed;

pub use docstub_core::{backend, collection, document, error, query, store, update};

// Re-export BSON types for convenience
pub use bson;

/// In-memory storage backend implementation.
pub mod memory {
    pub use docstub_memory::{MemoryStore, MemoryStoreBuilder};
}
