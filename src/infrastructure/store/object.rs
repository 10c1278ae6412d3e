//! Wire Types
//!
//! Serde shapes for the shared object store and the mapping down to the
//! canonical `Task`. The collection is multi-tenant: list responses carry
//! every tenant's objects, so retrieval filters by the fixed type tag and
//! this application's owner tag and silently discards everything else.

use crate::domain::Task;
use serde::{Deserialize, Serialize};

/// Fixed type tag written into every object's `data` and required on read.
pub const TYPE_TAG: &str = "tasks";

/// An object as returned by the store (list, create and update responses
/// all share this shape).
#[derive(Debug, Clone, Deserialize)]
pub struct StoredObject {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Free-form per-object metadata. Foreign tenants may omit it or use
    /// an entirely different shape, so every field is optional.
    #[serde(default)]
    pub data: Option<StoredData>,
}

/// The `data` map of an object, as far as this application reads it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoredData {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub owner: Option<String>,
    pub completed: Option<bool>,
}

impl StoredObject {
    /// Whether this object belongs to this application: the metadata's
    /// `type` must equal [`TYPE_TAG`] and its `owner` the given tag.
    /// Objects without `data` never match.
    #[must_use]
    pub fn matches(&self, owner: &str) -> bool {
        self.data
            .as_ref()
            .is_some_and(|d| d.kind.as_deref() == Some(TYPE_TAG) && d.owner.as_deref() == Some(owner))
    }

    /// Map the object down to the canonical task shape. A missing
    /// `completed` flag reads as `false`.
    #[must_use]
    pub fn into_task(self) -> Task {
        let completed = self.data.and_then(|d| d.completed).unwrap_or(false);
        Task {
            id: self.id,
            name: self.name,
            completed,
        }
    }
}

/// Filter a raw list response down to this application's tasks,
/// preserving the store's order.
#[must_use]
pub fn tasks_from_objects(objects: Vec<StoredObject>, owner: &str) -> Vec<Task> {
    objects
        .into_iter()
        .filter(|obj| obj.matches(owner))
        .map(StoredObject::into_task)
        .collect()
}

/// Request body for create (POST) and update (PUT).
///
/// The store has no partial-update verb: every write resends the complete
/// object, tags included. Omitting a field would clear it server-side.
#[derive(Debug, Serialize)]
pub struct ObjectPayload<'a> {
    pub name: &'a str,
    pub data: PayloadData<'a>,
}

#[derive(Debug, Serialize)]
pub struct PayloadData<'a> {
    pub completed: bool,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub owner: &'a str,
}

impl<'a> ObjectPayload<'a> {
    /// Build a full-replacement body with this application's tags.
    #[must_use]
    pub fn new(name: &'a str, completed: bool, owner: &'a str) -> Self {
        Self {
            name,
            data: PayloadData {
                completed,
                kind: TYPE_TAG,
                owner,
            },
        }
    }
}
