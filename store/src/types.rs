//! The persisted todo entity.
//!
//! # Design
//! `TodoItem` mirrors the `todos` table one-to-one. `completed` is free text
//! rather than a boolean: the store writes `"incomplete"` on creation and
//! accepts whatever string the caller supplies on update. JSON field names
//! match the wire contract exactly (`id`, `title`, `completed`).

use serde::{Deserialize, Serialize};

/// A single todo row as stored and as serialized over the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub completed: String,
}
