//! Hint label generation.
//!
//! Labels are at most two characters long. Short counts get one character per
//! target. Once the count exceeds the alphabet, the alphabet is split in two:
//! the leading characters stay single-character labels, and each trailing
//! character becomes the first half of a block of two-character labels. No
//! single-character label can then start a two-character one, so the set is
//! prefix-free.

use crate::config::Alphabet;

#[derive(Debug, Clone, Default)]
pub struct LabelAssigner {
    alphabet: Alphabet,
}

impl LabelAssigner {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Most labels one call can produce.
    pub fn capacity(&self) -> usize {
        let n = self.alphabet.len();
        n * n
    }

    /// Number of single-character labels kept when `count` labels are needed.
    fn single_count(&self, count: usize) -> usize {
        let n = self.alphabet.len();
        if count <= n {
            count
        } else {
            // largest k with k + (n - k) * n >= count
            (n * n - count) / (n - 1)
        }
    }

    /// Generates `min(count, capacity)` prefix-free labels in alphabet order.
    pub fn generate(&self, count: usize) -> Vec<String> {
        let count = count.min(self.capacity());
        let chars = self.alphabet.chars();
        let singles = self.single_count(count);

        let mut labels: Vec<String> = chars[..singles].iter().map(|c| c.to_string()).collect();

        'outer: for &first in &chars[singles..] {
            for &second in chars {
                if labels.len() >= count {
                    break 'outer;
                }
                labels.push([first, second].iter().collect());
            }
        }

        debug_assert!(is_prefix_free(&labels), "label set is not prefix-free");
        labels
    }
}

/// True when no label is a prefix of, or equal to, another.
pub fn is_prefix_free(labels: &[String]) -> bool {
    labels.iter().enumerate().all(|(i, a)| {
        labels
            .iter()
            .enumerate()
            .all(|(j, b)| i == j || !b.starts_with(a.as_str()))
    })
}
