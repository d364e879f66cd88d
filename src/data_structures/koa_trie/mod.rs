//! Koa Suggestion Trie Implementation
//!
//! This module provides a prefix tree (trie) for storing words and retrieving
//! every stored word that shares a given prefix. It backs the suggestion
//! engine's autocomplete use cases.
//!
//! # Key Features
//!
//! * Exact-membership lookup and prefix search over shared-path storage
//! * Deterministic result ordering (children are visited in creation order)
//! * Removal that keeps overlapping words intact when one word is a prefix
//!   of another
//! * Arena-backed nodes with index-based parent references, so back-pointers
//!   never form ownership cycles
//!
//! Degenerate inputs are handled by policy rather than by failure: lookups
//! on missing words return `false` or an empty vector, and removing a word
//! that was never stored is a silent no-op. None of the operations return
//! `Result`.

mod node;

use node::{NodeId, TrieNode, ROOT};

/// Configuration options for the Koa Suggestion Trie.
#[derive(Debug, Clone)]
pub struct KoaTrieConfig {
    /// Whether detaching a childless terminal node clears the parent's
    /// entire child list instead of removing only the matched entry.
    ///
    /// With this enabled, removing a word whose final node has terminal-free
    /// siblings destroys those sibling subtrees as well. It exists for
    /// callers that depend on that destructive pruning; leave it off unless
    /// you know you need it.
    pub clear_siblings_on_detach: bool,
}

impl Default for KoaTrieConfig {
    fn default() -> Self {
        Self {
            clear_siblings_on_detach: false,
        }
    }
}

/// Koa Suggestion Trie is a prefix tree for storing words and answering
/// prefix queries with deterministic ordering.
///
/// Key features:
/// * Shared-path storage: overlapping words reuse nodes, so "cat" and "car"
///   share the "ca" path
/// * Prefix search returns complete words, pre-order, children in creation
///   order, so repeated calls on the same state produce the same sequence
/// * Removal un-flags words that are prefixes of longer words and detaches
///   leaf words entirely
///
/// Nodes live in an arena owned by the trie. Detached nodes simply become
/// unreachable slots; they are reclaimed when the trie is dropped or cleared.
#[derive(Debug)]
pub struct KoaTrie {
    /// Arena of nodes; slot 0 is the root.
    nodes: Vec<TrieNode>,

    /// Configuration options
    config: KoaTrieConfig,
}

impl KoaTrie {
    /// Creates a new empty `KoaTrie` with default configuration.
    ///
    /// # Returns
    ///
    /// A new `KoaTrie` instance.
    pub fn new() -> Self {
        Self::with_config(KoaTrieConfig::default())
    }

    /// Creates a new empty `KoaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: KoaTrieConfig) -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            config,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Walks from the root, creating one node per novel character position,
    /// and marks the final node terminal. Inserting the same word twice is
    /// idempotent, and words that are prefixes or extensions of existing
    /// words share the existing path.
    ///
    /// Inserting the empty string is a no-op: the terminal flag is only ever
    /// set on a node reached by consuming a character, so the root stays
    /// non-terminal.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    pub fn insert(&mut self, word: &str) {
        let mut current = ROOT;
        for c in word.chars() {
            current = match self.nodes[current.0].get_child(c) {
                Some(child) => child,
                None => self.create_child(current, c),
            };
        }
        if current != ROOT {
            self.nodes[current.0].is_terminal = true;
        }
    }

    /// Checks whether a word is stored in the trie.
    ///
    /// A sequence that exists only as the shared prefix of a longer stored
    /// word does not count as stored.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to check.
    ///
    /// # Returns
    ///
    /// `true` if the exact word was inserted and not subsequently removed.
    pub fn contains(&self, word: &str) -> bool {
        match self.walk(word) {
            Some(id) => self.nodes[id.0].is_terminal,
            None => false,
        }
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// The prefix node's own word (if terminal) comes first, then the words
    /// in its subtree, depth-first with children visited in creation order.
    /// The ordering is stable across repeated calls on the same trie state,
    /// so callers may truncate the result to the first N entries. Truncation
    /// itself is the caller's responsibility; this always returns every
    /// match.
    ///
    /// An empty prefix enumerates every stored word. A prefix matching no
    /// stored path returns an empty vector.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The leading character sequence to match.
    ///
    /// # Returns
    ///
    /// All matching words, in traversal order.
    pub fn find(&self, prefix: &str) -> Vec<String> {
        let start = match self.walk(prefix) {
            Some(id) => id,
            None => return Vec::new(),
        };

        // Explicit stack instead of recursion; deep words must not be able
        // to overflow the call stack. Children are pushed in reverse so they
        // pop in creation order.
        let mut words = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.is_terminal {
                words.push(self.word_of(id));
            }
            for (_, child) in node.children.iter().rev() {
                stack.push(*child);
            }
        }
        words
    }

    /// Removes a word from the trie.
    ///
    /// If the word's final node is a structural prefix of longer stored
    /// words, only its terminal flag is cleared so those words stay intact.
    /// A childless final node is detached from its parent instead.
    ///
    /// Removing the empty string or a word that was never stored is a
    /// silent no-op.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to remove.
    pub fn remove(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let id = match self.walk(word) {
            Some(id) if self.nodes[id.0].is_terminal => id,
            _ => return,
        };

        if !self.nodes[id.0].children.is_empty() {
            // The node carries longer words; un-flag it and leave the path.
            self.nodes[id.0].is_terminal = false;
            return;
        }

        // Childless terminal node: splice it out of the parent. The node's
        // arena slot becomes unreachable and is reclaimed with the trie.
        if let Some(parent) = self.nodes[id.0].parent {
            let siblings = &mut self.nodes[parent.0].children;
            if self.config.clear_siblings_on_detach {
                siblings.clear();
            } else {
                siblings.retain(|(_, child)| *child != id);
            }
        }
    }

    /// Returns the number of words in the trie.
    ///
    /// This traverses the entire trie, so it is an O(n) operation.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.is_terminal {
                count += 1;
            }
            for (_, child) in &node.children {
                stack.push(*child);
            }
        }
        count
    }

    /// Checks if the trie stores no words.
    ///
    /// Removal leaves non-terminal interior paths in place, so this counts
    /// terminals rather than checking the root's child list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all words from the trie, releasing detached arena slots too.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::root());
    }

    /// Allocates a child node for `key` under `parent` and links it in.
    fn create_child(&mut self, parent: NodeId, key: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::child(key, parent));
        self.nodes[parent.0].children.push((key, id));
        id
    }

    /// Follows `path` character by character from the root.
    ///
    /// Returns the node the full path leads to, or `None` as soon as a
    /// character has no matching child.
    fn walk(&self, path: &str) -> Option<NodeId> {
        let mut current = ROOT;
        for c in path.chars() {
            current = self.nodes[current.0].get_child(c)?;
        }
        Some(current)
    }

    /// Reconstructs the word for a node by walking parent references back to
    /// the root.
    fn word_of(&self, id: NodeId) -> String {
        let mut chars = Vec::new();
        let mut current = Some(id);
        while let Some(at) = current {
            let node = &self.nodes[at.0];
            if let Some(c) = node.key {
                chars.push(c);
            }
            current = node.parent;
        }
        chars.iter().rev().collect()
    }
}

impl Default for KoaTrie {
    fn default() -> Self {
        Self::new()
    }
}
