//! Configuration Management
//!
//! Loads application configuration from a TOML file at the platform
//! config directory (`~/.config/todoterm/config.toml` on Linux), with
//! serde defaults for every field and environment overrides for the
//! store endpoint and owner tag. A missing file is not an error; the
//! defaults point at the public demo store.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment override for the store base URL.
const ENV_STORE_URL: &str = "TODOTERM_STORE_URL";
/// Environment override for the owner tag.
const ENV_OWNER: &str = "TODOTERM_OWNER";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Remote object store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// TUI settings
    #[serde(default)]
    pub tui: TuiConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Collection endpoint of the object store
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Owner tag scoping this application's records within the shared
    /// multi-tenant collection (a client-side filter only; the store
    /// enforces no isolation)
    #[serde(default = "default_owner")]
    pub owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Input poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format for console output: "pretty", "json", "compact"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Log to a rolling file under the platform data dir (the TUI owns
    /// stdout, so this is the default sink)
    #[serde(default = "default_true")]
    pub file_output: bool,

    /// Override directory for log files
    pub file_path: Option<PathBuf>,

    /// Also log to the console (only useful outside the TUI)
    #[serde(default)]
    pub console_output: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            owner: default_owner(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file_output: true,
            file_path: None,
            console_output: false,
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.restful-api.dev/objects".to_string()
}

fn default_owner() -> String {
    "mytodolistapp".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist, then apply environment overrides.
    pub fn load() -> ConfigResult<Self> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let raw =
            std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// `$XDG_CONFIG_HOME/todoterm/config.toml` (platform equivalent).
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("todoterm").join("config.toml"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_STORE_URL) {
            self.store.base_url = url;
        }
        if let Ok(owner) = std::env::var(ENV_OWNER) {
            self.store.owner = owner;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store.base_url, "https://api.restful-api.dev/objects");
        assert_eq!(config.store.owner, "mytodolistapp");
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file_output);
        assert!(!config.logging.console_output);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\nowner = \"someone\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.store.owner, "someone");
        // Unspecified sections and fields come from defaults.
        assert_eq!(config.store.base_url, "https://api.restful-api.dev/objects");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store = 3").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file_is_an_error_for_explicit_paths() {
        let err = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileReadFailed { .. }));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back.store.base_url, config.store.base_url);
        assert_eq!(back.tui.tick_rate_ms, config.tui.tick_rate_ms);
    }
}
