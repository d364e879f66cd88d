//! Configuration error module.
//!
//! This module defines error types that may occur during configuration
//! loading, parsing, and validation operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the configuration file cannot be read.
    #[error("Failed to read configuration file: {0}")]
    FileReadError(String),

    /// Error when parsing the configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// Error when validating the configuration.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error when a required configuration value is missing.
    #[error("Missing required configuration value: {0}")]
    MissingValue(String),

    /// Other configuration errors.
    #[error("Configuration error: {0}")]
    Other(String),
}
