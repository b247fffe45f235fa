//! Engine configuration.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Home row first, then the upper row.
pub const DEFAULT_ALPHABET: &str = "ASDFGHJKLQWERUIO";

/// Settings for one [`SelectionController`](crate::SelectionController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintConfig {
    /// Characters used for hint labels, in assignment order.
    pub alphabet: String,
    /// Character that cancels the session when typed with Control (vim's `Ctrl-[`).
    pub cancel_chord: char,
    /// Tab cycles among overlapping targets.
    pub rotate_on_tab: bool,
    /// Enter commits the currently rotated target.
    pub commit_on_enter: bool,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            cancel_chord: '[',
            rotate_on_tab: true,
            commit_on_enter: true,
        }
    }
}

impl HintConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: HintConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        Alphabet::parse(&self.alphabet).map(|_| ())
    }

    /// The validated alphabet.
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::parse(&self.alphabet)
    }
}

/// An ordered, duplicate-free set of uppercase hint characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Validates and uppercases `raw`.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut chars = Vec::new();
        for c in raw.chars().map(fold) {
            if c.is_whitespace() || c.is_control() {
                return Err(ConfigError::InvalidAlphabetChar(c));
            }
            if !seen.insert(c) {
                return Err(ConfigError::DuplicateAlphabetChar(c));
            }
            chars.push(c);
        }
        if chars.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(Self { chars })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Case-insensitive membership.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&fold(c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

/// Single-char uppercase; characters that expand (like `ß`) stay as they are.
pub(crate) fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
