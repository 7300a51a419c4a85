//! Text normalization and word splitting.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Split raw text into lowercase word tokens.
///
/// Lowercases the input, strips every character that is neither a word
/// character nor whitespace, and splits on whitespace runs. Stripping
/// rather than replacing keeps contractions as single tokens: `don't`
/// becomes `dont`, the spelling the negation table uses.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lowered, "");
    stripped.split_whitespace().map(ToOwned::to_owned).collect()
}
