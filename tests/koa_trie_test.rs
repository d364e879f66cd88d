// Copyright (c) 2025 Makai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Koa Suggestion Trie and the suggestion engine.
//! Exercises the public library surface the way a frontend would: seed a
//! vocabulary, query it per keystroke, and dismiss entries.

use makai_suggest_lib::config::suggest::SuggestConfig;
use makai_suggest_lib::data_structures::{KoaTrie, KoaTrieConfig};
use makai_suggest_lib::engine::SuggestEngine;

#[test]
fn test_trie_public_surface() {
    let mut trie = KoaTrie::new();

    trie.insert("maui");
    trie.insert("mauka");
    trie.insert("makai");

    assert!(trie.contains("maui"));
    assert!(!trie.contains("ma"));
    assert_eq!(trie.find("ma"), vec!["maui", "mauka", "makai"]);

    trie.remove("maui");
    assert_eq!(trie.find("ma"), vec!["mauka", "makai"]);
}

#[test]
fn test_trie_with_custom_config() {
    let config = KoaTrieConfig {
        clear_siblings_on_detach: true,
    };
    let mut trie = KoaTrie::with_config(config);

    trie.insert("hilo");
    trie.insert("hana");

    // Destructive pruning: "hilo" and "hana" are siblings under 'h', so
    // detaching one takes the other with it.
    trie.remove("hilo");
    assert!(!trie.contains("hilo"));
    assert!(!trie.contains("hana"));
}

#[test]
fn test_incremental_session() {
    let config = SuggestConfig {
        max_results: 3,
        ..Default::default()
    };
    let mut engine = SuggestEngine::with_config(&config);

    for word in ["kona", "kohala", "koloa", "kapaa", "kailua"] {
        engine.add(word);
    }

    // Simulated keystrokes narrowing the input.
    assert_eq!(engine.suggest("k").len(), 3);
    assert_eq!(engine.suggest("ko"), vec!["kona", "kohala", "koloa"]);
    assert_eq!(engine.suggest("koh"), vec!["kohala"]);
    assert!(engine.suggest("kohx").is_empty());

    // Dismissing a suggestion promotes the next match into the page.
    engine.dismiss("kona");
    assert_eq!(engine.suggest("ko"), vec!["kohala", "koloa"]);
}

#[test]
fn test_engine_survives_degenerate_usage() {
    let mut engine = SuggestEngine::new();

    // Nothing stored yet: every query is empty, every dismissal a no-op.
    assert!(engine.suggest("a").is_empty());
    engine.dismiss("ghost");
    engine.add("");
    assert!(engine.is_empty());

    engine.add("word");
    assert_eq!(engine.suggest("word"), vec!["word"]);
}
