//! Remote Object Store
//!
//! Client for the shared object-storage REST API that acts as the sole
//! persistence layer. The store is a multi-tenant collection of
//! `{id, name, data}` objects; this application scopes its own records
//! with fixed type and owner tags carried in `data`.

pub mod client;
pub mod object;

pub use client::{RemoteStore, TaskStore};
pub use object::{tasks_from_objects, StoredObject, TYPE_TAG};
