//! Configuration tests
//!
//! The default template must always parse back, and every persisted field
//! must survive a write/read cycle so `config --reset` never loses a setting.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
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
    assert_eq!(reloaded.api_url, config.api_url);
    assert_eq!(reloaded.theme, config.theme);
    assert_eq!(reloaded.seed, None);
    assert_eq!(reloaded.board, config.board);
    assert_eq!(reloaded.fetch, config.fetch);
    assert_eq!(reloaded.logging, config.logging);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.api_url = "http://localhost:3000/api/".to_string();
    config.theme = "mono".to_string();
    config.seed = Some(99);
    config.board.categories = 4;
    config.board.clues_per_category = 3;
    config.board.category_pool = 40;
    config.board.placeholder = "$".to_string();
    config.fetch.concurrent = true;
    config.fetch.timeout_secs = 3;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let reloaded = Config::from_sources(parsed, no_env);

    assert_eq!(reloaded.api_url, config.api_url);
    assert_eq!(reloaded.theme, "mono");
    assert_eq!(reloaded.seed, Some(99));
    assert_eq!(reloaded.board, config.board);
    assert_eq!(reloaded.fetch, config.fetch);
    assert_eq!(reloaded.logging, config.logging);
}

#[test]
fn test_config_roundtrip_escapes_strings() {
    let mut config = Config::default();
    config.board.placeholder = "\u{1b}[1m?".to_string();
    config.logging.file_prefix = r#"quote " and \ slash"#.to_string();
    config.theme = "tab\there".to_string();

    let toml_str = config.to_toml();
    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(parsed.is_ok(), "TOML:\n{}\nError: {:?}", toml_str, parsed.err());

    let reloaded = Config::from_sources(parsed.unwrap(), no_env);
    assert_eq!(reloaded.board.placeholder, config.board.placeholder);
    assert_eq!(reloaded.logging.file_prefix, config.logging.file_prefix);
    assert_eq!(reloaded.theme, config.theme);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_sources(FileConfig::default(), no_env);

    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.board.categories, 6);
    assert_eq!(config.board.clues_per_category, 5);
    assert_eq!(config.board.category_pool, 100);
    assert_eq!(config.board.placeholder, "?");
    assert!(!config.fetch.concurrent);
    assert!(config.enable_tui);
    assert!(config.validate().is_ok());
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
api_url = "http://file/api"
theme = "midnight"
seed = 5
"#,
    )
    .unwrap();

    let config = Config::from_sources(
        file,
        env_from(&[
            ("CLUEBOARD_API_URL", "http://env/api"),
            ("CLUEBOARD_SEED", "11"),
        ]),
    );

    assert_eq!(config.api_url, "http://env/api");
    assert_eq!(config.seed, Some(11));
    // Not overridden by env
    assert_eq!(config.theme, "midnight");
}

#[test]
fn test_invalid_env_seed_is_rejected() {
    let file: FileConfig = toml::from_str("seed = 5").unwrap();

    let config = Config::from_sources(file, env_from(&[("CLUEBOARD_SEED", "abc")]));

    assert_eq!(config.invalid_seed.as_deref(), Some("abc"));
    let err = config.validate().unwrap_err();
    assert!(err.contains("CLUEBOARD_SEED"), "{}", err);
    assert!(err.contains("abc"), "{}", err);
}

#[test]
fn test_env_seed_tolerates_surrounding_whitespace() {
    let config = Config::from_sources(FileConfig::default(), env_from(&[("CLUEBOARD_SEED", " 8 ")]));

    assert_eq!(config.seed, Some(8));
    assert!(config.validate().is_ok());
}

#[test]
fn test_no_tui_flag() {
    for (value, expected) in [("1", false), ("true", false), ("TRUE", false), ("0", true)] {
        let config =
            Config::from_sources(FileConfig::default(), env_from(&[("CLUEBOARD_NO_TUI", value)]));
        assert_eq!(config.enable_tui, expected, "CLUEBOARD_NO_TUI={}", value);
    }
}

#[test]
fn test_partial_sections_keep_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
[board]
categories = 3

[logging]
file_rotation = "weekly"
"#,
    )
    .unwrap();

    let config = Config::from_sources(file, no_env);

    assert_eq!(config.board.categories, 3);
    assert_eq!(config.board.clues_per_category, 5);
    // Unknown rotation falls back to daily
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_validate_rejects_bad_sizes() {
    let mut config = Config::default();
    config.board.categories = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.board.clues_per_category = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.board.category_pool = 5;
    let err = config.validate().unwrap_err();
    assert!(err.contains("category_pool"), "{}", err);

    let mut config = Config::default();
    config.fetch.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_wrong_value_type_is_parse_error() {
    // Wrong types are a parse error (the loader exits on these)
    let parsed: Result<FileConfig, _> = toml::from_str("[board]\ncategories = \"six\"");
    assert!(parsed.is_err());
}
