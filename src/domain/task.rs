//! Task Model
//!
//! The single domain entity: a named task with a completed flag.

use serde::{Deserialize, Serialize};

/// Task identifier: opaque, assigned by the remote store on creation.
///
/// The store hands out identifiers as strings; they are never generated
/// client-side and never change after creation.
pub type TaskId = String;

/// A to-do list entry.
///
/// A task's local representation always comes from the most recent remote
/// response for that task; no locally-invented value survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique key for all remote operations
    pub id: TaskId,
    /// Display text, mutable by the user
    pub name: String,
    /// Completion flag, mutable by the user
    pub completed: bool,
}

impl Task {
    /// Create a task from a remote response's fields
    #[must_use]
    pub fn new(id: impl Into<TaskId>, name: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed,
        }
    }
}
