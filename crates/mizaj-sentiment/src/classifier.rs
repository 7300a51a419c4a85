//! Label and confidence derivation from an aggregate score.

use mizaj_core::Sentiment;

use crate::types::{Prediction, ScoreResult};

/// Scores inside `[-NEUTRAL_BAND, NEUTRAL_BAND]` collapse to neutral.
const NEUTRAL_BAND: f32 = 1.0;

/// Derive the terminal prediction from an aggregate score.
///
/// Confidence starts at a neutral 50% and rises 2.5 points per unit of
/// accumulated weight, saturating at 95%. It reflects evidence strength
/// only: a text whose positive and negative words cancel still reports
/// high confidence in its neutral label. With no recognized words at all
/// the confidence stays at 50%.
#[must_use]
pub fn classify(result: &ScoreResult) -> Prediction {
    let confidence = if result.total_weight > 0.0 {
        (50.0 + (result.total_weight * 2.5).min(45.0)).clamp(0.0, 100.0)
    } else {
        50.0
    };
    // Reported to one decimal place.
    let confidence = (confidence * 10.0).round() / 10.0;

    let sentiment = if result.sentiment_score > NEUTRAL_BAND {
        Sentiment::Positive
    } else if result.sentiment_score < -NEUTRAL_BAND {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    Prediction {
        sentiment,
        confidence,
        score: result.sentiment_score,
        words_found: result.token_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(sentiment_score: f32, total_weight: f32, token_count: usize) -> ScoreResult {
        ScoreResult {
            sentiment_score,
            total_weight,
            token_count,
        }
    }

    #[test]
    fn no_evidence_is_neutral_at_fifty() {
        let prediction = classify(&result(0.0, 0.0, 4));
        assert_eq!(prediction.sentiment, Sentiment::Neutral);
        assert_eq!(prediction.confidence, 50.0);
        assert_eq!(prediction.score, 0.0);
        assert_eq!(prediction.words_found, 4);
    }

    #[test]
    fn single_strong_word_reaches_seventy() {
        let prediction = classify(&result(8.0, 8.0, 4));
        assert_eq!(prediction.sentiment, Sentiment::Positive);
        assert_eq!(prediction.confidence, 70.0);
    }

    #[test]
    fn confidence_saturates_at_ninety_five() {
        // 18 * 2.5 lands exactly on the 45-point cap.
        assert_eq!(classify(&result(18.0, 18.0, 2)).confidence, 95.0);
        assert_eq!(classify(&result(40.0, 40.0, 5)).confidence, 95.0);
    }

    #[test]
    fn confidence_rounds_to_one_decimal() {
        // 6.5 * 2.5 = 16.25, so 66.25 rounds up to 66.3.
        assert_eq!(classify(&result(6.5, 6.5, 2)).confidence, 66.3);
    }

    #[test]
    fn cancelled_words_stay_neutral_but_confident() {
        let prediction = classify(&result(0.0, 16.0, 2));
        assert_eq!(prediction.sentiment, Sentiment::Neutral);
        assert_eq!(prediction.confidence, 90.0);
    }

    #[test]
    fn scores_inside_the_band_are_neutral() {
        for score in [1.0, -1.0, 0.5, -0.9] {
            let prediction = classify(&result(score, 5.0, 1));
            assert_eq!(prediction.sentiment, Sentiment::Neutral, "score {score}");
        }
    }

    #[test]
    fn scores_beyond_the_band_take_sides() {
        assert_eq!(classify(&result(1.1, 5.0, 1)).sentiment, Sentiment::Positive);
        assert_eq!(classify(&result(-1.1, 5.0, 1)).sentiment, Sentiment::Negative);
    }

    #[test]
    fn raw_score_passes_through_unclamped() {
        let prediction = classify(&result(-131.0, 131.0, 20));
        assert_eq!(prediction.score, -131.0);
        assert_eq!(prediction.confidence, 95.0);
    }

    #[test]
    fn confidence_is_bounded_and_monotone() {
        let mut previous = 0.0_f32;
        for tenths in 0..=400 {
            #[allow(clippy::cast_precision_loss)]
            let weight = tenths as f32 / 10.0;
            let confidence = classify(&result(weight, weight, 1)).confidence;
            assert!((0.0..=100.0).contains(&confidence));
            assert!(confidence >= previous, "dipped at weight {weight}");
            previous = confidence;
        }
    }
}
