//! Datastore subsystem.
//!
//! # Data Flow
//! ```text
//! Handler receives untrusted name
//!     → query.rs (fixed statement text + bound parameter)
//!     → Datastore::fetch (parameter treated as pure data)
//!     → Vec<UserRecord> back to the handler
//! ```
//!
//! # Design Decisions
//! - Statement text is `&'static str`: query syntax cannot be assembled
//!   from request data at the type level
//! - Untrusted values travel only as bound parameters
//! - The store is a trait seam; the in-memory implementation honors the
//!   same parameter semantics a SQL engine would

pub mod memory;
pub mod query;

pub use memory::MemoryDatastore;
pub use query::{user_by_name, Datastore, DatastoreError, Param, Statement, UserRecord};
