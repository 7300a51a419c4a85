//! Token-sequence scoring against the sentiment dictionaries.

use crate::lexicon::{self, Polarity};
use crate::types::ScoreResult;

/// How many tokens before a sentiment word are searched for a negation
/// marker.
const NEGATION_WINDOW: usize = 2;

/// Score an ordered token sequence.
///
/// Each recognized token contributes its dictionary weight. An intensifier
/// directly before it scales the weight; a negation marker within the two
/// preceding tokens flips the contribution's sign. A negated negative word
/// therefore counts as positive evidence. Unrecognized tokens contribute
/// nothing but still count toward `token_count`.
///
/// `total_weight` accumulates the post-intensifier absolute weight of every
/// recognized word, so evidence strength survives sign cancellation.
#[must_use]
pub fn score(tokens: &[String]) -> ScoreResult {
    let mut sentiment_score = 0.0_f32;
    let mut total_weight = 0.0_f32;

    for (i, token) in tokens.iter().enumerate() {
        let Some(entry) = lexicon::lookup(token) else {
            continue;
        };

        let mut weight = f32::from(entry.weight);

        // Only the single token immediately before can intensify.
        if i > 0 {
            if let Some(multiplier) = lexicon::intensifier_multiplier(&tokens[i - 1]) {
                weight *= multiplier;
            }
        }

        let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
            .iter()
            .any(|t| lexicon::is_negation(t));

        let contribution = match (entry.polarity, negated) {
            (Polarity::Positive, false) | (Polarity::Negative, true) => weight,
            (Polarity::Positive, true) | (Polarity::Negative, false) => -weight,
        };

        sentiment_score += contribution;
        total_weight += weight;
    }

    ScoreResult {
        sentiment_score,
        total_weight,
        token_count: tokens.len(),
    }
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
