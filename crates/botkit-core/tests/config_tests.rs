// Rust guideline compliant 2026-10-18

//! Configuration persistence tests.

use botkit_core::{Config, Language};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().unwrap();

    let original = Config {
        default_language: Language::Uz,
        default_region: Some("UZ".to_string()),
        page_size: 8,
        truncate_length: 64,
        truncate_suffix: "…".to_string(),
        message_max_length: 1024,
        log_level: "warn".to_string(),
        log_file: Some(PathBuf::from("bot.log")),
    };

    original.save(temp_dir.path()).unwrap();
    let loaded = Config::load(temp_dir.path()).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_saved_file_is_readable_toml() {
    let temp_dir = TempDir::new().unwrap();
    Config::default().save(temp_dir.path()).unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("config.toml")).unwrap();
    assert!(content.contains("default_language = \"RU\""));
    assert!(content.contains("page_size = 10"));
    assert!(!content.contains("default_region"));
}

#[test]
fn test_invalid_file_values_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "truncate_length = 1\ntruncate_suffix = \"...\"",
    )
    .unwrap();
    assert!(Config::load(temp_dir.path()).is_err());
}
