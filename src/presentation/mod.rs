//! Presentation Layer (TUI)
//!
//! Terminal user interface components and widgets. Rendering is a pure
//! function of the application state; nothing in this layer mutates it.

pub mod tui;
pub mod widgets;

pub use tui::{init, install_panic_hook, restore, Tui};
pub use widgets::{StatusBar, TaskList};
