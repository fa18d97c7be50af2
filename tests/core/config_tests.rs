//! Tests for runtime configuration
//!
//! Tests cover:
//! - Default values
//! - Serialization/deserialization
//! - Config path handling
//! - Environment flag parsing

use prefsync::config::{parse_flag, AppConfig};

// ============================================
// Default Tests
// ============================================

#[test]
fn test_default_is_live_mode() {
    let config = AppConfig::default();
    assert!(!config.fake_api);
}

#[test]
fn test_default_api_base_url() {
    let config = AppConfig::default();
    assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
}

// ============================================
// Serialization Tests
// ============================================

#[test]
fn test_deserialize_full_config() {
    let json = r#"{"api_base_url":"http://pi.hole","fake_api":true}"#;
    let config: AppConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.api_base_url, "http://pi.hole");
    assert!(config.fake_api);
}

#[test]
fn test_deserialize_empty_object_uses_defaults() {
    let config: AppConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
    assert!(!config.fake_api);
}

#[test]
fn test_deserialize_partial_config() {
    let json = r#"{"fake_api":true}"#;
    let config: AppConfig = serde_json::from_str(json).unwrap();

    assert!(config.fake_api);
    assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
}

#[test]
fn test_config_roundtrip() {
    let original = AppConfig {
        api_base_url: "http://10.0.0.2".to_string(),
        fake_api: true,
    };

    let json = serde_json::to_string(&original).unwrap();
    let restored: AppConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.api_base_url, original.api_base_url);
    assert_eq!(restored.fake_api, original.fake_api);
}

// ============================================
// Config Path Tests
// ============================================

#[test]
fn test_config_path_ends_with_json() {
    if let Some(path) = AppConfig::get_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.ends_with("config.json"),
            "Config path should end with config.json"
        );
    }
}

#[test]
fn test_config_dir_contains_prefsync() {
    if let Some(path) = AppConfig::get_config_dir() {
        let path_str = path.to_string_lossy().to_lowercase();
        assert!(
            path_str.contains("prefsync"),
            "Config dir should contain 'prefsync'"
        );
    }
}

// ============================================
// Environment Flag Tests
// ============================================

#[test]
fn test_parse_flag_truthy_values() {
    assert!(parse_flag("1"));
    assert!(parse_flag("true"));
    assert!(parse_flag("TRUE"));
    assert!(parse_flag("yes"));
    assert!(parse_flag("on"));
    assert!(parse_flag(" true "));
}

#[test]
fn test_parse_flag_falsy_values() {
    assert!(!parse_flag("0"));
    assert!(!parse_flag("false"));
    assert!(!parse_flag("no"));
    assert!(!parse_flag("off"));
    assert!(!parse_flag(""));
    assert!(!parse_flag("maybe"));
}
