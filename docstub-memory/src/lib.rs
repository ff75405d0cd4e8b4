//! In-memory document storage backend for docstub.
//!
//! This crate provides the in-memory implementation of the `StoreBackend`
//! trait: a plain key-value mapping per collection behind an async-aware
//! read-write lock, with a clause matcher emulating the handful of
//! query/update shapes the surrounding application issues. It exists for
//! development and testing when a real database server is unavailable.
//!
//! # Features
//!
//! - **Thread-safe access** - One async-aware RwLock serializes operations over the shared maps
//! - **Copy-on-read** - Every returned document is a deep copy; stored state never aliases
//! - **Permissive matching** - Unsupported predicate shapes degrade to no-op clauses
//!
//! # Quick Start
//!
//! ```ignore
//! use docstub::{prelude::*, memory::MemoryStore};
//! use bson::doc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = DocumentStore::new(MemoryStore::new());
//!     let activities = store.collection("activities");
//!
//!     activities
//!         .insert_one(doc! { "_id": "Chess Club", "participants": [] })
//!         .await?;
//!
//!     let found = activities.find_one(&Query::by_id("Chess Club")).await?;
//!     assert!(found.is_some());
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstub_memory;

pub mod matcher;
pub mod store;

pub use store::{MemoryStore, MemoryStoreBuilder};
