//! Durable persistence for the todo service.
//!
//! # Overview
//! Owns the single `todos` table in an embedded SQLite database and exposes
//! it through exactly four operations: list, create, update, delete. The HTTP
//! layer never touches SQL directly.
//!
//! # Design
//! - `TodoStore` wraps one shared connection; constructing it applies the
//!   schema, so a freshly opened store is always usable.
//! - Identifiers are assigned by SQLite (`AUTOINCREMENT`) and never reused.
//! - Update and delete do not distinguish "zero rows matched" from "one row
//!   changed"; both are success. Callers that need a miss signal do not exist
//!   in this contract.

pub mod error;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use store::{TodoStore, DEFAULT_STATUS};
pub use types::TodoItem;
