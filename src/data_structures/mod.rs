//! Data structures for the Makai Suggest engine.
//!
//! This module contains the specialized data structures backing the
//! suggestion engine. All implementations adhere to the strict project
//! requirements:
//! - No unsafe code
//! - Deterministic traversal order for reproducible results
//! - Degenerate inputs handled by policy, never by panics

pub mod koa_trie;

// Re-export common data structures
pub use koa_trie::{KoaTrie, KoaTrieConfig};
