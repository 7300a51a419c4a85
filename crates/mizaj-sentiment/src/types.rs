use mizaj_core::Sentiment;
use serde::Serialize;

/// Aggregate outcome of scoring one token sequence.
#[derive(Debug, Clone)]
pub struct ScoreResult {
    /// Signed sum of every recognized word's contribution.
    pub sentiment_score: f32,
    /// Sum of absolute weights after intensification, regardless of sign.
    pub total_weight: f32,
    /// Length of the full token sequence, recognized or not.
    pub token_count: usize,
}

/// Terminal prediction for one input text.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub sentiment: Sentiment,
    /// Certainty percentage in `[0, 100]`, one decimal place.
    pub confidence: f32,
    /// Raw signed score, deliberately unclamped.
    pub score: f32,
    /// Token count of the whole input, not just dictionary hits.
    pub words_found: usize,
}

/// Engine metadata as reported by [`crate::SentimentEngine::describe`].
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub ready: bool,
    pub vocabulary_size: usize,
    pub kind: &'static str,
    pub explanation: &'static str,
}
