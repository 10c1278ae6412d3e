//! Terminal Setup
//!
//! Raw-mode / alternate-screen init and restore, plus a panic hook that
//! puts the terminal back before the panic message prints.

use crate::error::{TuiError, TuiResult};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};

/// The terminal handle used by the event loop.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen and build the terminal.
pub fn init() -> TuiResult<Tui> {
    enable_raw_mode().map_err(|e| TuiError::InitFailed(e.to_string()))?;
    execute!(stdout(), EnterAlternateScreen).map_err(|e| TuiError::InitFailed(e.to_string()))?;
    Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| TuiError::InitFailed(e.to_string()))
}

/// Leave the alternate screen and raw mode.
pub fn restore() -> TuiResult<()> {
    execute!(stdout(), LeaveAlternateScreen)
        .map_err(|e| TuiError::RestoreFailed(e.to_string()))?;
    disable_raw_mode().map_err(|e| TuiError::RestoreFailed(e.to_string()))?;
    Ok(())
}

/// Restore the terminal before any panic output, then delegate to the
/// previous hook.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}
