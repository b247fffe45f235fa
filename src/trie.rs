//! Prefix tree over hint labels.

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_end: bool,
}

/// Set of words supporting prefix queries.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `word`. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.is_end {
            return false;
        }
        node.is_end = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|n| n.is_end)
    }

    /// True if some stored word starts with `prefix` (including the word itself).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        match self.find(prefix) {
            Some(node) => node.is_end || !node.children.is_empty(),
            None => false,
        }
    }

    /// True if `word` is a proper prefix of some stored word.
    pub fn is_prefix_of_word(&self, word: &str) -> bool {
        self.find(word).is_some_and(|n| !n.children.is_empty())
    }

    /// True if some stored word is a proper prefix of `word`.
    pub fn has_word_prefixing(&self, word: &str) -> bool {
        let mut node = &self.root;
        let mut chars = word.chars().peekable();
        while let Some(ch) = chars.next() {
            if node.is_end {
                return true;
            }
            match node.children.get(&ch) {
                Some(next) => node = next,
                None => return false,
            }
            // the word itself is not a proper prefix
            if chars.peek().is_none() {
                return false;
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.len = 0;
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}
