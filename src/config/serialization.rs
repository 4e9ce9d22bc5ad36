//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use crate::theme::THEME_NAMES;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# scissors configuration

# Shortening service. The endpoint is api_base joined with endpoint_path.
api_base = {api_base}
endpoint_path = {endpoint_path}

# Identifier sent as userId (SCISSORS_USER_ID overrides)
user_id = {user_id}

# Seconds before a request is abandoned (0 = wait forever)
request_timeout_secs = {timeout}

# Refuse a new submit while one is still in flight
single_flight = {single_flight}

# Theme: {themes}
theme = {theme}

# Metadata attached to every shortening request
[metadata]
title = {title}
description = {description}

[ui]
toast_duration_ms = {toast_ms}
copy_feedback_ms = {feedback_ms}
show_logs = {show_logs}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            api_base = toml_string(&self.api_base),
            endpoint_path = toml_string(&self.endpoint_path),
            user_id = toml_string(&self.user_id),
            timeout = self.request_timeout_secs,
            single_flight = self.single_flight,
            themes = THEME_NAMES.join(", "),
            theme = toml_string(&self.theme),
            title = toml_string(&self.metadata.title),
            description = toml_string(&self.metadata.description),
            toast_ms = self.ui.toast_duration_ms,
            feedback_ms = self.ui.copy_feedback_ms,
            show_logs = self.ui.show_logs,
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            log_file_rotation = toml_string(self.logging.file_rotation.as_str()),
            log_file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}

/// A TOML basic string literal for `value`, escaped by toml itself
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
