//! Engine facade: vocabulary lifecycle plus the analyze pipeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::classifier::classify;
use crate::scorer::score;
use crate::tokenizer::tokenize;
use crate::types::{ModelInfo, Prediction};
use crate::vocabulary::Vocabulary;

const ENGINE_KIND: &str = "rule-based";
const ENGINE_EXPLANATION: &str = "Sentiment word dictionaries for English and \
     Roman Urdu/Hindi with negation detection and intensifier support";

/// Run the full analyze pipeline on one text.
///
/// Total: empty, blank, or entirely unrecognized input yields a neutral
/// prediction at 50% confidence rather than an error.
#[must_use]
pub fn analyze(text: &str) -> Prediction {
    let tokens = tokenize(text);
    let result = score(&tokens);
    classify(&result)
}

/// Shared engine handle: the read-only scoring pipeline plus a process-wide
/// vocabulary tracker.
///
/// Scoring never touches the vocabulary, so [`SentimentEngine::analyze`]
/// takes no lock and any number of calls may run concurrently with
/// [`SentimentEngine::initialize`].
#[derive(Debug, Default)]
pub struct SentimentEngine {
    vocabulary: Mutex<Vocabulary>,
    ready: AtomicBool,
}

impl SentimentEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the vocabulary from scratch out of `corpus_texts` and mark
    /// the engine ready. Calling again replaces the previous set.
    pub fn initialize<I, S>(&self, corpus_texts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Vocabulary::new();
        for text in corpus_texts {
            vocabulary.absorb(text.as_ref());
        }
        let size = vocabulary.len();

        *self
            .vocabulary
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = vocabulary;
        self.ready.store(true, Ordering::Release);

        tracing::info!(vocabulary_size = size, "sentiment engine initialized");
    }

    /// Tokenize, score, and classify one text. See [`analyze`].
    #[must_use]
    pub fn analyze(&self, text: &str) -> Prediction {
        analyze(text)
    }

    /// Readiness, vocabulary size, and a description of the scoring
    /// approach.
    #[must_use]
    pub fn describe(&self) -> ModelInfo {
        let vocabulary_size = self
            .vocabulary
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        ModelInfo {
            ready: self.ready.load(Ordering::Acquire),
            vocabulary_size,
            kind: ENGINE_KIND,
            explanation: ENGINE_EXPLANATION,
        }
    }
}
