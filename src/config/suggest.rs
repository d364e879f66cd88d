//! Suggestion configuration module.
//!
//! This module defines configuration for the suggestion engine, including
//! result truncation and optional vocabulary seeding.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Suggestion engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Maximum number of suggestions shown per query
    pub max_results: usize,

    /// Optional path to a seed dictionary, one word per line, loaded when a
    /// session starts
    pub dictionary: Option<PathBuf>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            dictionary: None,
        }
    }
}

impl Validate for SuggestConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results == 0 {
            return Err(ConfigError::ValidationError(
                "max_results must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
