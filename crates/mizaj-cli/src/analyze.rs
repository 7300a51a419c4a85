//! Single-text prediction handler.

use mizaj_core::AppConfig;
use mizaj_sentiment::SentimentEngine;

/// Score one text and print the prediction.
///
/// The engine builds its vocabulary from the configured corpus first when
/// the file is readable. A missing or invalid corpus is logged and skipped;
/// the prediction itself never depends on it.
///
/// # Errors
///
/// Returns an error if `text` is blank or the prediction cannot be
/// serialized.
pub(crate) fn run_analyze(config: &AppConfig, text: &str, json: bool) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("text is required; pass a non-empty string via --text");
    }

    let engine = SentimentEngine::new();
    match mizaj_core::load_corpus(&config.corpus_path) {
        Ok(corpus) => engine.initialize(corpus.texts()),
        Err(e) => {
            tracing::warn!(
                path = %config.corpus_path.display(),
                error = %e,
                "corpus unavailable; analyzing without a vocabulary"
            );
        }
    }

    let prediction = engine.analyze(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        println!("sentiment:  {}", prediction.sentiment);
        println!("confidence: {:.1}%", prediction.confidence);
        println!("score:      {}", prediction.score);
        println!("words:      {}", prediction.words_found);
    }

    Ok(())
}
