//! Todoterm Library
//!
//! A terminal to-do list backed by a generic object-storage REST API.
//! The list, create, update and delete operations all go straight to the
//! remote store; the in-memory state is a mirror of the most recent
//! server-confirmed responses.

pub mod app;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
