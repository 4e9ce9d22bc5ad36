//! TUI timing and panel configuration

use serde::Deserialize;
use std::time::Duration;

/// TUI settings
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// How long notifications stay on screen
    pub toast_duration_ms: u64,
    /// How long a copied URL shows its check mark
    pub copy_feedback_ms: u64,
    /// Show the system log panel on startup
    pub show_logs: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            copy_feedback_ms: 2000,
            show_logs: false,
        }
    }
}

/// UI settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileUi {
    pub toast_duration_ms: Option<u64>,
    pub copy_feedback_ms: Option<u64>,
    pub show_logs: Option<bool>,
}

impl UiConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileUi>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            toast_duration_ms: file.toast_duration_ms.unwrap_or(defaults.toast_duration_ms),
            copy_feedback_ms: file.copy_feedback_ms.unwrap_or(defaults.copy_feedback_ms),
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}
