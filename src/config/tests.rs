//! Configuration tests
//!
//! The generated template must parse back into the same values, and partial
//! files must fall back to defaults key by key.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let reloaded = Config::from_sources(parsed.unwrap(), no_env);
    assert_eq!(reloaded.api_base, config.api_base);
    assert_eq!(reloaded.endpoint_path, config.endpoint_path);
    assert_eq!(reloaded.user_id, config.user_id);
    assert_eq!(reloaded.metadata, config.metadata);
    assert_eq!(reloaded.ui, config.ui);
    assert_eq!(reloaded.logging, config.logging);
}

#[test]
fn test_config_roundtrip_escapes_strings() {
    let mut config = Config::default();
    config.metadata.description = r#"Links "for" C:\work"#.to_string();
    config.logging.file_rotation = LogRotation::Hourly;

    let reloaded = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(reloaded.metadata.description, config.metadata.description);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_config_roundtrip_control_chars() {
    let mut config = Config::default();
    config.metadata.title = "Links\u{1b}[1m\ttabbed".to_string();
    config.user_id = "it's \"me\"".to_string();

    let toml_str = config.to_toml();
    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(parsed.is_ok(), "TOML:\n{}\nError: {:?}", toml_str, parsed.err());

    let reloaded = Config::from_sources(parsed.unwrap(), no_env);
    assert_eq!(reloaded.metadata.title, config.metadata.title);
    assert_eq!(reloaded.user_id, config.user_id);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = parse(
        r#"
api_base = "https://links.example.com"

[ui]
copy_feedback_ms = 500
"#,
    );

    let config = Config::from_sources(file, no_env);

    assert_eq!(config.api_base, "https://links.example.com");
    assert_eq!(config.endpoint_path, "/api/url/shorten");
    assert_eq!(config.ui.copy_feedback_ms, 500);
    assert_eq!(config.ui.toast_duration_ms, 3000);
    assert_eq!(config.metadata, crate::shortener::Metadata::default());
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
api_base = "https://from-file.example"
user_id = "file-user"
theme = "nord"
"#,
    );
    let env: HashMap<&str, &str> = HashMap::from([
        ("SCISSORS_API_BASE", "https://from-env.example"),
        ("SCISSORS_USER_ID", "env-user"),
    ]);

    let config = Config::from_sources(file, |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.api_base, "https://from-env.example");
    assert_eq!(config.session().user_id(), "env-user");
    assert_eq!(config.theme, "nord");
}

#[test]
fn test_blank_user_id_env_is_ignored() {
    let config = Config::from_sources(FileConfig::default(), |k| {
        (k == "SCISSORS_USER_ID").then(|| "  ".to_string())
    });
    assert_eq!(config.user_id, "12345");
}

#[test]
fn test_zero_timeout_disables_it() {
    let mut config = Config::default();
    assert_eq!(
        config.request_timeout(),
        Some(std::time::Duration::from_secs(30))
    );

    config.request_timeout_secs = 0;
    assert_eq!(config.request_timeout(), None);
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = std::env::temp_dir().join(format!("scissors-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "single_flight = maybe\n").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    let missing = Config::load_file_config(&dir.join("absent.toml")).unwrap();
    assert!(missing.api_base.is_none());

    let _ = std::fs::remove_dir_all(&dir);
}
