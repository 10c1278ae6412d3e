//! TUI Widgets

pub mod status_bar;
pub mod task_list;

pub use status_bar::StatusBar;
pub use task_list::TaskList;
