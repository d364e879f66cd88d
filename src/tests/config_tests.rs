//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and
//! usage.

use crate::config::{suggest::SuggestConfig, ConfigLoader, LogConfig, MakaiConfig, Validate};
use crate::tests::create_test_dir;
use std::fs;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MakaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.suggest.max_results, 5);
    assert!(config.suggest.dictionary.is_none());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = MakaiConfig::default();

    // Zero suggestions per query is never useful
    config.suggest.max_results = 0;
    assert!(config.validate().is_err());

    // Fix and test an invalid log level
    config.suggest.max_results = 5;
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [suggest]
    max_results = 3

    [log]
    level = "warn"
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    // Verify values were loaded correctly
    assert_eq!(config.suggest.max_results, 3);
    assert_eq!(config.log.level, "warn");

    // Other values should be defaults
    assert!(config.suggest.dictionary.is_none());
    assert!(!config.log.json);
}

/// Test that loading an invalid configuration file fails validation.
#[test]
fn test_load_invalid_config_fails() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("invalid_config_test.toml");

    let config_content = r#"
    [suggest]
    max_results = 0
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("does_not_exist.toml");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_MISSING");
    assert!(loader.load().is_err());
}

/// Test that standalone section configs validate on their own.
#[test]
fn test_section_validation() {
    let suggest = SuggestConfig::default();
    assert!(suggest.validate().is_ok());

    let log = LogConfig::default();
    assert!(log.validate().is_ok());
}
