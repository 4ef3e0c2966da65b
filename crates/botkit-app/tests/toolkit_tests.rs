// Rust guideline compliant 2026-10-18

//! Integration tests for the config-bound toolkit.

use botkit_app::{AppError, Toolkit};
use botkit_core::{Config, Language};
use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;

fn uz_toolkit() -> Toolkit {
    Toolkit::new(Config {
        default_language: Language::Uz,
        default_region: Some("UZ".to_string()),
        page_size: 3,
        truncate_length: 8,
        message_max_length: 10,
        ..Config::default()
    })
}

#[test]
fn test_default_language_applies() {
    let toolkit = uz_toolkit();
    let dt = Utc::now() - Duration::minutes(10);
    assert_eq!(toolkit.time_ago(dt, None), "10 daqiqa oldin");
    assert_eq!(toolkit.time_ago(dt, Some(Language::Ru)), "10 мин. назад");
}

#[test]
fn test_format_datetime() {
    let toolkit = Toolkit::default();
    let dt = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 0).unwrap();
    assert_eq!(toolkit.format_datetime(dt, None), "31.12.2023 23:59");
}

#[test]
fn test_citizenship_label() {
    let toolkit = uz_toolkit();
    assert_eq!(toolkit.citizenship_label("UZ", None), "🇺🇿 O'zbekiston");
    assert_eq!(
        toolkit.citizenship_label("KG", Some(Language::Ru)),
        "🇰🇬 Киргизия"
    );
    assert_eq!(toolkit.citizenship_label("TJ", None), "🌍 TJ");
}

#[test]
fn test_configured_lengths() {
    let toolkit = uz_toolkit();
    assert_eq!(toolkit.truncate("abcdefghijkl"), "abcde...");
    assert_eq!(toolkit.sanitize("  0123456789abc  "), "0123456...");
}

#[test]
fn test_configured_page_size() {
    let toolkit = uz_toolkit();
    let items: Vec<u8> = (1..=7).collect();
    let page = toolkit.paginate(&items, 3);
    assert_eq!(page.items, vec![7]);
    assert_eq!(page.per_page, 3);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn test_configured_region() {
    let toolkit = uz_toolkit();
    assert!(toolkit.validate_phone("901234567"));
    assert!(toolkit.format_phone("901234567").is_some());

    let no_region = Toolkit::default();
    assert!(!no_region.validate_phone("901234567"));
    assert_eq!(no_region.format_phone("901234567"), None);
}

#[test]
fn test_load_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "default_language = \"UZ\"\npage_size = 4\n",
    )
    .unwrap();

    let toolkit = Toolkit::load(temp_dir.path()).unwrap();
    assert_eq!(toolkit.config().default_language, Language::Uz);
    assert_eq!(toolkit.config().page_size, 4);
}

#[test]
fn test_load_invalid_config_is_core_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.toml"), "page_size = 0").unwrap();

    let err = Toolkit::load(temp_dir.path()).unwrap_err();
    assert!(matches!(err, AppError::Core(_)));
}

#[test]
fn test_load_rejects_unknown_region() {
    for region in ["uz", "ZZ"] {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            format!("default_region = \"{}\"\n", region),
        )
        .unwrap();

        let err = Toolkit::load(temp_dir.path()).unwrap_err();
        assert!(
            err.to_string().contains("default_region"),
            "unexpected error for {}: {}",
            region,
            err
        );
    }
}
