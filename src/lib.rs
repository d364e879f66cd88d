//! Makai Suggest Library
//!
//! This library contains the core components of the Makai Suggest engine:
//! a prefix tree for word storage and retrieval, a suggestion engine that
//! drives autocomplete sessions, and the configuration and error handling
//! utilities shared with the binary crate. The library is designed to be
//! used by the binary crate, but can also be used as a dependency by other
//! projects.
//!
//! # Architecture
//!
//! Makai Suggest is designed with the following principles in mind:
//! - Strict component boundaries: the trie knows nothing about the layers
//!   that present its results
//! - Single ownership: one engine owns one trie, no ambient global state
//! - Degenerate inputs handled by policy, not by failure
//! - Deterministic, reproducible result ordering

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod engine;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Makai Suggest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MakaiResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
