//! Suggestion engine for Makai Suggest.
//!
//! This module wraps a single [`KoaTrie`] behind the three actions a
//! presentation layer performs: adding a word, requesting live suggestions
//! for the current input, and dismissing a suggestion. The engine owns its
//! trie with an explicit lifetime; callers construct one engine and pass it
//! by reference into whatever frontend drives it.
//!
//! Truncation of suggestion lists happens here, not in the trie: the trie
//! always returns every match in a stable order, and the engine takes the
//! first `max_results` of them.

use crate::config::suggest::SuggestConfig;
use crate::data_structures::KoaTrie;
use tracing::debug;

/// A prefix-based suggestion engine over a single owned trie.
#[derive(Debug)]
pub struct SuggestEngine {
    /// The word store.
    trie: KoaTrie,

    /// Maximum number of suggestions returned per query.
    max_results: usize,
}

impl SuggestEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&SuggestConfig::default())
    }

    /// Creates an engine configured from a [`SuggestConfig`].
    ///
    /// # Arguments
    ///
    /// * `config` - The suggestion settings to apply.
    pub fn with_config(config: &SuggestConfig) -> Self {
        Self {
            trie: KoaTrie::new(),
            max_results: config.max_results,
        }
    }

    /// Adds a word to the engine's vocabulary.
    ///
    /// The input is stored as-is; empty input is accepted and leaves the
    /// vocabulary unchanged.
    pub fn add(&mut self, word: &str) {
        debug!(word, "adding word");
        self.trie.insert(word);
    }

    /// Returns up to `max_results` stored words starting with `input`.
    ///
    /// An empty input produces no suggestions; a live input bar with
    /// nothing typed in it should show nothing rather than the entire
    /// vocabulary.
    ///
    /// # Arguments
    ///
    /// * `input` - The current (possibly partial) user input.
    pub fn suggest(&self, input: &str) -> Vec<String> {
        if input.is_empty() {
            return Vec::new();
        }
        let mut matches = self.trie.find(input);
        matches.truncate(self.max_results);
        matches
    }

    /// Dismisses a suggestion, removing its exact text from the vocabulary.
    ///
    /// Dismissing text that is not stored is a no-op.
    pub fn dismiss(&mut self, word: &str) {
        debug!(word, "dismissing word");
        self.trie.remove(word);
    }

    /// Checks whether the exact word is stored.
    pub fn knows(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Returns every stored word in traversal order.
    pub fn words(&self) -> Vec<String> {
        self.trie.find("")
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Checks whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl Default for SuggestEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_truncates_suggestions() {
        let config = SuggestConfig {
            max_results: 2,
            ..Default::default()
        };
        let mut engine = SuggestEngine::with_config(&config);

        engine.add("apple");
        engine.add("app");
        engine.add("apt");

        // The trie yields three matches; the engine keeps the first two in
        // traversal order.
        assert_eq!(engine.suggest("ap"), vec!["app", "apple"]);
    }

    #[test]
    fn test_engine_empty_input_shows_nothing() {
        let mut engine = SuggestEngine::new();
        engine.add("anything");

        assert!(engine.suggest("").is_empty());
        assert_eq!(engine.words(), vec!["anything"]);
    }

    #[test]
    fn test_engine_dismiss() {
        let mut engine = SuggestEngine::new();
        engine.add("cat");
        engine.add("cats");

        engine.dismiss("cat");
        assert!(!engine.knows("cat"));
        assert!(engine.knows("cats"));
        assert_eq!(engine.suggest("ca"), vec!["cats"]);

        // Dismissing unknown text is a no-op.
        engine.dismiss("dog");
        assert_eq!(engine.len(), 1);
    }
}
