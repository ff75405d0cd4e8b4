//! A thin in-memory stand-in for a JSON document database.
//!
//! This crate is the core of the docstub project and provides:
//!
//! - **Record traits** ([`document`]) - Traits for typed records and their document conversions
//! - **Store backend abstraction** ([`backend`]) - The operation set a storage backend implements
//! - **Query clauses** ([`query`]) - The closed set of predicate shapes the emulation supports
//! - **Update mutators** ([`update`]) - Incremental field mutations and their result summary
//! - **Collections interface** ([`collection`]) - Named handles for interacting with collections
//! - **Document store** ([`store`]) - Main entry point binding a backend to collection handles
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use docstub::{document::Record, store::DocumentStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Club {
//!     #[serde(rename = "_id")]
//!     pub name: String,
//!     pub members: Vec<String>,
//! }
//!
//! impl Record for Club {
//!     fn id(&self) -> &str {
//!         &self.name
//!     }
//!
//!     fn collection_name() -> &'static str {
//!         "clubs"
//!     }
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstub_core;

pub mod backend;
pub mod collection;
pub mod document;
pub mod error;
pub mod query;
pub mod store;
pub mod update;
