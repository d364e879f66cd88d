//! Test modules for Makai Suggest.
//!
//! This module contains the testing infrastructure, including:
//! - Unit tests for each component
//! - Property-based tests using proptest
//! - Test fixtures and utilities
//!
//! The test philosophy follows the project standards:
//! - Testing all degenerate-input policies and edge cases
//! - Property-based testing for the word-storage invariants
//! - Deterministic-ordering tests for everything a caller may truncate

pub mod config_tests;
pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, word_strategy};
