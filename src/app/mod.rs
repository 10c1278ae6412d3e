//! Application Layer
//!
//! Contains application-level components including configuration,
//! state management, the controller and the main event loop.

pub mod config;
pub mod controller;
pub mod event_loop;
pub mod logging;
pub mod state;

pub use config::AppConfig;
pub use controller::TaskListController;
pub use event_loop::App;
pub use state::{InputMode, TodoState};
