//! Node implementation for the Koa Suggestion Trie.
//!
//! This module provides the arena slot type used by the Koa Trie. Nodes are
//! stored in a flat vector owned by the trie and refer to each other through
//! `NodeId` indices, which keeps parent back-references free of ownership
//! cycles.

/// Index of a node inside the trie's arena.
///
/// Slot 0 is always the root. A `NodeId` is only meaningful for the arena
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct NodeId(pub(super) usize);

/// The root node's arena slot.
pub(super) const ROOT: NodeId = NodeId(0);

/// A node in the Koa Suggestion Trie.
///
/// Each node represents one character position in some set of stored words.
/// Terminal nodes mark the end of a complete word.
#[derive(Debug)]
pub(super) struct TrieNode {
    /// The character this node represents. `None` only for the root.
    pub key: Option<char>,

    /// Children in creation order. Keys are unique; the order children were
    /// created in is the order traversals visit them, which keeps prefix
    /// search results stable across calls.
    pub children: Vec<(char, NodeId)>,

    /// Whether the path from the root to this node spells a complete word.
    pub is_terminal: bool,

    /// Non-owning back-reference to the parent, used to reconstruct words
    /// on demand and to splice this node out during removal.
    pub parent: Option<NodeId>,
}

impl TrieNode {
    /// Creates the root node.
    pub fn root() -> Self {
        Self {
            key: None,
            children: Vec::new(),
            is_terminal: false,
            parent: None,
        }
    }

    /// Creates a child node for `key` under `parent`.
    pub fn child(key: char, parent: NodeId) -> Self {
        Self {
            key: Some(key),
            children: Vec::new(),
            is_terminal: false,
            parent: Some(parent),
        }
    }

    /// Looks up the child slot for `key`, if one exists.
    ///
    /// Children are kept in a small vector rather than a hash map so that
    /// iteration order is the creation order; lookups are a linear scan over
    /// an alphabet-bounded list.
    pub fn get_child(&self, key: char) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(c, _)| *c == key)
            .map(|(_, id)| *id)
    }
}
