//! Logging Initialization
//!
//! Configures tracing-subscriber for structured logging. The TUI owns
//! stdout while running, so the default sink is a daily-rolling file
//! under the platform data dir; console output is opt-in for debugging
//! outside the TUI.

use crate::app::config::LoggingConfig;
use crate::error::Result;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Environment override, e.g. `TODOTERM_LOG=todoterm=debug`.
const ENV_FILTER_VAR: &str = "TODOTERM_LOG";

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todoterm")
        .join("logs")
}

/// Initialize the logging system based on configuration.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_env(ENV_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new(format!("todoterm={}", config.level.to_lowercase())));

    let file_layer = if config.file_output {
        let log_dir = config.file_path.clone().unwrap_or_else(default_log_dir);
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "todoterm.log");
        Some(
            fmt::layer()
                .with_writer(file_appender)
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .boxed(),
        )
    } else {
        None
    };

    let console_layer = if config.console_output {
        let layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_ansi(true);
        let layer = match config.format.as_str() {
            "json" => layer.json().boxed(),
            "compact" => layer.compact().boxed(),
            _ => layer.boxed(),
        };
        Some(layer)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!(
        level = %config.level,
        format = %config.format,
        file_output = config.file_output,
        "Logging initialized"
    );

    Ok(())
}
