//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::{ErrorContext, MakaiError};
use std::path::PathBuf;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = MakaiError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let makai_error = MakaiError::Io(io_error);

    let error_string = format!("{makai_error}");
    assert!(error_string.contains("file not found"));
}

/// Test configuration error display formats.
#[test]
fn test_config_error_display() {
    let err = ConfigError::FileNotFound(PathBuf::from("/missing/config.toml"));
    assert!(err.to_string().contains("/missing/config.toml"));

    let err = ConfigError::ValidationError("max_results must be greater than 0".to_string());
    assert!(err.to_string().contains("max_results"));
}

/// Test that configuration errors convert into the core error type.
#[test]
fn test_config_error_conversion() {
    let config_error = ConfigError::ParseError("bad value".to_string());
    let makai_error: MakaiError = config_error.into();

    assert!(matches!(makai_error, MakaiError::Config(_)));
    assert!(makai_error.to_string().contains("bad value"));
}
