//! Incremental hint matcher.

use tracing::{trace, warn};

use crate::trie::Trie;

/// Where the typed buffer stands relative to the registered labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomatonState {
    /// No labels registered.
    Initialized,
    /// Labels registered, nothing typed yet.
    WordsAdded,
    /// The buffer is a proper prefix of at least one label.
    Advancable,
    /// The buffer equals a label.
    Match,
    /// No label starts with the buffer.
    Deadend,
}

/// A prefix-free label set plus the characters typed against it.
#[derive(Debug, Clone)]
pub struct InputAutomaton {
    trie: Trie,
    state: AutomatonState,
    buffer: String,
    matched: Option<String>,
}

impl Default for InputAutomaton {
    fn default() -> Self {
        Self {
            trie: Trie::new(),
            state: AutomatonState::Initialized,
            buffer: String::new(),
            matched: None,
        }
    }
}

impl InputAutomaton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an automaton from `labels`, skipping any that conflict.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Self::new();
        for label in labels {
            automaton.register(label.as_ref());
        }
        automaton
    }

    /// Adds `label` unless it would break prefix-freedom.
    ///
    /// Rejects empty labels, duplicates, labels that prefix a registered label
    /// and labels that a registered label prefixes.
    pub fn register(&mut self, label: &str) -> bool {
        if label.is_empty()
            || self.trie.has_prefix(label)
            || self.trie.has_word_prefixing(label)
        {
            warn!(label, "rejected conflicting hint label");
            return false;
        }
        self.trie.insert(label);
        if self.state == AutomatonState::Initialized {
            self.state = AutomatonState::WordsAdded;
        }
        true
    }

    /// Feeds one character.
    ///
    /// `Match` and `Deadend` are terminal until [`reset`](Self::reset).
    pub fn advance(&mut self, ch: char) -> AutomatonState {
        match self.state {
            AutomatonState::Match | AutomatonState::Deadend => return self.state,
            AutomatonState::Initialized => {
                self.buffer.push(ch);
                self.state = AutomatonState::Deadend;
                return self.state;
            }
            AutomatonState::WordsAdded | AutomatonState::Advancable => {}
        }

        self.buffer.push(ch);
        self.state = if self.trie.contains(&self.buffer) {
            self.matched = Some(self.buffer.clone());
            AutomatonState::Match
        } else if self.trie.has_prefix(&self.buffer) {
            AutomatonState::Advancable
        } else {
            AutomatonState::Deadend
        };
        trace!(buffer = %self.buffer, state = ?self.state, "advance");
        self.state
    }

    /// Feeds `input` until it is exhausted or the state becomes terminal.
    pub fn advance_str(&mut self, input: &str) -> AutomatonState {
        for ch in input.chars() {
            if matches!(self.advance(ch), AutomatonState::Match | AutomatonState::Deadend) {
                break;
            }
        }
        self.state
    }

    /// Forgets the typed buffer, keeping the labels.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.matched = None;
        self.state = if self.trie.is_empty() {
            AutomatonState::Initialized
        } else {
            AutomatonState::WordsAdded
        };
    }

    /// Forgets the buffer and every label.
    pub fn clear(&mut self) {
        self.trie.clear();
        self.reset();
    }

    pub fn state(&self) -> AutomatonState {
        self.state
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The label the buffer completed, if in `Match`.
    pub fn matched(&self) -> Option<&str> {
        self.matched.as_deref()
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
