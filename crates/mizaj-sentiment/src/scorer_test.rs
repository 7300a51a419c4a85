use super::score;

fn toks(text: &str) -> Vec<String> {
    text.split_whitespace().map(ToOwned::to_owned).collect()
}

#[test]
fn empty_sequence_scores_zero() {
    let result = score(&[]);
    assert_eq!(result.sentiment_score, 0.0);
    assert_eq!(result.total_weight, 0.0);
    assert_eq!(result.token_count, 0);
}

#[test]
fn unknown_tokens_score_zero_but_still_count() {
    let result = score(&toks("the sky is blue"));
    assert_eq!(result.sentiment_score, 0.0);
    assert_eq!(result.total_weight, 0.0);
    assert_eq!(result.token_count, 4);
}

#[test]
fn single_positive_word_contributes_its_weight() {
    let result = score(&toks("love"));
    assert_eq!(result.sentiment_score, 8.0);
    assert_eq!(result.total_weight, 8.0);
    assert_eq!(result.token_count, 1);
}

#[test]
fn single_negative_word_contributes_negatively() {
    let result = score(&toks("bad"));
    assert_eq!(result.sentiment_score, -8.0);
    assert_eq!(result.total_weight, 8.0);
}

#[test]
fn weights_accumulate_across_words() {
    // good (8) + great (9)
    let result = score(&toks("good morning great"));
    assert_eq!(result.sentiment_score, 17.0);
    assert_eq!(result.total_weight, 17.0);
    assert_eq!(result.token_count, 3);
}

#[test]
fn negation_flips_a_following_positive() {
    let result = score(&toks("not good"));
    assert_eq!(result.sentiment_score, -8.0);
    assert_eq!(result.total_weight, 8.0);
}

#[test]
fn negation_flips_a_following_negative_to_positive() {
    let result = score(&toks("not bad"));
    assert_eq!(result.sentiment_score, 8.0);
    assert_eq!(result.total_weight, 8.0);
}

#[test]
fn negation_reaches_two_tokens_back() {
    // good is intensified by very (8 * 1.5) and flipped by not.
    let result = score(&toks("not very good"));
    assert_eq!(result.sentiment_score, -12.0);
    assert_eq!(result.total_weight, 12.0);
}

#[test]
fn negation_beyond_the_window_does_not_flip() {
    // "not" sits three tokens before "good", out of reach.
    let result = score(&toks("not if its good"));
    assert_eq!(result.sentiment_score, 8.0);
    assert_eq!(result.total_weight, 8.0);
}

#[test]
fn negation_preserves_magnitude() {
    for word in ["good", "bad", "kharab", "love"] {
        let plain = score(&toks(word));
        let negated = score(&toks(&format!("not {word}")));
        assert_eq!(
            negated.sentiment_score, -plain.sentiment_score,
            "flip changed magnitude for {word}"
        );
        assert_eq!(negated.total_weight, plain.total_weight);
    }
}

#[test]
fn intensifier_scales_the_adjacent_word() {
    // bad (8) * really (1.4), flipped sign and full weight.
    let result = score(&toks("really bad"));
    assert_eq!(result.sentiment_score, -11.2);
    assert_eq!(result.total_weight, 11.2);
    assert_eq!(result.token_count, 2);
}

#[test]
fn intensifier_requires_adjacency() {
    let result = score(&toks("really the bad"));
    assert_eq!(result.sentiment_score, -8.0);
    assert_eq!(result.total_weight, 8.0);
}

#[test]
fn intensifiers_do_not_stack() {
    // Only really (1.4) applies to good; very is ignored.
    let result = score(&toks("very really good"));
    assert_eq!(result.sentiment_score, 11.2);
    assert_eq!(result.total_weight, 11.2);
}

#[test]
fn intensifiers_alone_contribute_nothing() {
    let result = score(&toks("very really extremely"));
    assert_eq!(result.sentiment_score, 0.0);
    assert_eq!(result.total_weight, 0.0);
    assert_eq!(result.token_count, 3);
}

#[test]
fn negation_marker_with_own_weight_plays_both_roles() {
    // no scores -5 itself, then flips good (8) to -8.
    let result = score(&toks("no good"));
    assert_eq!(result.sentiment_score, -13.0);
    assert_eq!(result.total_weight, 13.0);
}

#[test]
fn urdu_negation_flips_urdu_word() {
    // nahi scores -6 itself and flips acha (7).
    let result = score(&toks("nahi acha"));
    assert_eq!(result.sentiment_score, -13.0);
    assert_eq!(result.total_weight, 13.0);
}

#[test]
fn mixed_language_words_accumulate() {
    // bahut (8) + acha (7)
    let result = score(&toks("ye bahut acha hai"));
    assert_eq!(result.sentiment_score, 15.0);
    assert_eq!(result.total_weight, 15.0);
    assert_eq!(result.token_count, 4);
}

#[test]
fn total_weight_survives_sign_cancellation() {
    let result = score(&toks("good bad"));
    assert_eq!(result.sentiment_score, 0.0);
    assert_eq!(result.total_weight, 16.0);
}
