//! Distinct-token tracking across ingested corpus text.

use std::collections::HashSet;

use crate::tokenizer::tokenize;

/// Set of every distinct token seen during initialization.
///
/// Purely informational: its size is reported by `describe`, and it never
/// influences scoring.
#[derive(Debug, Default)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` and record every token.
    pub fn absorb(&mut self, text: &str) {
        for token in tokenize(text) {
            self.words.insert(token);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
