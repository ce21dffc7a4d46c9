//! Configuration for the dictionary viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/wordview/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! The endpoint default is the public dictionary API; overriding it only
//! matters for self-hosted mirrors and tests.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default dictionary lookup endpoint (entries are appended as one path segment)
pub const DEFAULT_ENDPOINT: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default request timeout in seconds. Bounds the whole round trip so a
/// dead network cannot leave the search bar busy indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Dictionary API base URL
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Theme name: "dark", "light", "nord"
    pub theme: String,

    /// Whether to enable the TUI (disabled for one-shot lookups)
    pub enable_tui: bool,

    /// Log level filter when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: "dark".to_string(),
            enable_tui: true,
            log_level: "info".to_string(),
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub theme: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Get the config file path: ~/.config/wordview/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("wordview").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Render the effective configuration as a TOML template
    pub fn to_toml(&self) -> String {
        format!(
            "# wordview configuration\n\
             # Delete this file to restore defaults.\n\
             \n\
             # Dictionary API base URL (word is appended as a path segment)\n\
             endpoint = {:?}\n\
             \n\
             # Request timeout in seconds\n\
             timeout_secs = {}\n\
             \n\
             # Theme: \"dark\", \"light\", \"nord\"\n\
             theme = {:?}\n\
             \n\
             # Log level when RUST_LOG is not set: error, warn, info, debug, trace\n\
             log_level = {:?}\n",
            self.endpoint, self.timeout_secs, self.theme, self.log_level
        )
    }

    /// Parse a config file at `path`.
    ///
    /// A missing file means defaults; a file that exists but cannot be
    /// parsed fails fast with a clear error instead of silently falling
    /// back while the user debugs the wrong thing.
    pub(crate) fn load_file_config(path: &Path) -> FileConfig {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse config file {}:", path.display());
                    eprintln!("  {e}");
                    eprintln!("To reset, run: wordview config --reset");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Cannot read config file {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path),
            None => FileConfig::default(),
        };

        Self::resolve(file)
    }

    /// Merge a parsed file config with environment overrides and defaults
    pub(crate) fn resolve(file: FileConfig) -> Self {
        let defaults = Self::default();

        let endpoint = std::env::var("WORDVIEW_ENDPOINT")
            .ok()
            .or(file.endpoint)
            .unwrap_or(defaults.endpoint);

        let timeout_secs = std::env::var("WORDVIEW_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.timeout_secs)
            .unwrap_or(defaults.timeout_secs);

        let theme = std::env::var("WORDVIEW_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // TUI toggle: env only (runtime flag)
        let enable_tui = std::env::var("WORDVIEW_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let log_level = std::env::var("RUST_LOG")
            .ok()
            .or(file.log_level)
            .unwrap_or(defaults.log_level);

        Self {
            endpoint,
            timeout_secs,
            theme,
            enable_tui,
            log_level,
        }
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
