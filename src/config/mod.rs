//! Configuration for the shortener client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/scissors/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;
mod ui;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use ui::{FileUi, UiConfig};

use crate::shortener::{Metadata, Session};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_API_BASE: &str = "http://localhost:3000";
const DEFAULT_ENDPOINT_PATH: &str = "/api/url/shorten";
const DEFAULT_USER_ID: &str = "12345";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the shortening service
    pub api_base: String,

    /// Path of the shortening endpoint, joined onto `api_base`
    pub endpoint_path: String,

    /// Identifier sent as `userId` with every request
    pub user_id: String,

    /// Per-request timeout in seconds (0 = no timeout)
    pub request_timeout_secs: u64,

    /// Refuse a new submit while one is still in flight
    pub single_flight: bool,

    /// Theme name: "auto", "one-half-dark", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Metadata attached to every shortening request
    pub metadata: Metadata,

    /// Timings and panels of the TUI
    pub ui: UiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            single_flight: true,
            theme: "auto".to_string(),
            metadata: Metadata::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Session the request handler acts on behalf of
    pub fn session(&self) -> Session {
        Session::new(self.user_id.clone())
    }

    /// Request timeout, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata section as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_base: Option<String>,
    pub endpoint_path: Option<String>,
    pub user_id: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub single_flight: Option<bool>,
    pub theme: Option<String>,

    /// Optional [metadata] section
    pub metadata: Option<FileMetadata>,

    /// Optional [ui] section
    pub ui: Option<FileUi>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/scissors/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("scissors").join("config.toml"))
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

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but can't be read or
    /// parsed is an error: silently falling back would hide the typo.
    fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // API base: env > file > default
        let api_base = env("SCISSORS_API_BASE")
            .or(file.api_base)
            .unwrap_or(defaults.api_base);

        let endpoint_path = file.endpoint_path.unwrap_or(defaults.endpoint_path);

        // User id: env > file > placeholder
        let user_id = env("SCISSORS_USER_ID")
            .filter(|v| !v.trim().is_empty())
            .or(file.user_id)
            .unwrap_or(defaults.user_id);

        let request_timeout_secs = file
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs);

        let single_flight = file.single_flight.unwrap_or(defaults.single_flight);

        // Theme: env > file > default
        let theme = env("SCISSORS_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let file_metadata = file.metadata.unwrap_or_default();
        let metadata = Metadata {
            title: file_metadata.title.unwrap_or(defaults.metadata.title),
            description: file_metadata
                .description
                .unwrap_or(defaults.metadata.description),
        };

        Self {
            api_base,
            endpoint_path,
            user_id,
            request_timeout_secs,
            single_flight,
            theme,
            metadata,
            ui: UiConfig::from_file(file.ui),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
