//! Domain Layer
//!
//! Core data structures, independent of transport and rendering.

pub mod task;

pub use task::{Task, TaskId};
