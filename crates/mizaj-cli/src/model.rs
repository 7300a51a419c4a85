//! Engine lifecycle and corpus evaluation handlers.

use std::path::Path;

use chrono::Utc;
use mizaj_core::AppConfig;
use mizaj_sentiment::SentimentEngine;

/// Build the vocabulary from the labeled corpus and print engine info.
///
/// # Errors
///
/// Returns an error if the corpus cannot be read or fails validation.
pub(crate) fn run_train(
    config: &AppConfig,
    corpus_override: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let path = corpus_override.unwrap_or(&config.corpus_path);
    let corpus = mizaj_core::load_corpus(path)?;

    let engine = SentimentEngine::new();
    engine.initialize(corpus.texts());

    let info = engine.describe();
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!(
            "trained on {} corpus entries; vocabulary size {}",
            corpus.entries.len(),
            info.vocabulary_size
        );
    }
    Ok(())
}

/// Print engine metadata.
///
/// Readiness is per-process, so a fresh invocation always reports an
/// un-readied engine with an empty vocabulary.
///
/// # Errors
///
/// Returns an error if the info cannot be serialized.
pub(crate) fn run_info(json: bool) -> anyhow::Result<()> {
    let info = SentimentEngine::new().describe();
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("kind:            {}", info.kind);
        println!("ready:           {}", info.ready);
        println!("vocabulary size: {}", info.vocabulary_size);
        println!("explanation:     {}", info.explanation);
    }
    Ok(())
}

/// Score every labeled corpus entry and print a markdown accuracy report.
///
/// # Errors
///
/// Returns an error if the corpus cannot be read or fails validation.
pub(crate) fn run_eval(config: &AppConfig, corpus_override: Option<&Path>) -> anyhow::Result<()> {
    let path = corpus_override.unwrap_or(&config.corpus_path);
    let corpus = mizaj_core::load_corpus(path)?;

    if corpus.entries.is_empty() {
        println!(
            "no corpus entries to evaluate; add some to {}",
            path.display()
        );
        return Ok(());
    }

    let engine = SentimentEngine::new();
    engine.initialize(corpus.texts());

    let now = Utc::now().format("%Y-%m-%d %H:%M UTC");

    println!("# Corpus Evaluation");
    println!();
    println!("**Generated**: {now}");
    println!("**Corpus**: {}", path.display());
    println!("**Entries**: {}", corpus.entries.len());
    println!();
    println!("---");
    println!();
    println!("| Text | Labeled | Predicted | Confidence | Score |");
    println!("|------|---------|-----------|------------|-------|");

    let mut label_matches = 0_usize;
    for entry in &corpus.entries {
        let prediction = engine.analyze(&entry.text);
        if prediction.sentiment == entry.sentiment {
            label_matches += 1;
        }
        println!(
            "| {} | {} | {} | {:.1}% | {} |",
            escape_table_cell(&entry.text),
            entry.sentiment,
            prediction.sentiment,
            prediction.confidence,
            prediction.score
        );
    }

    let total = corpus.entries.len();
    #[allow(clippy::cast_precision_loss)]
    let accuracy = label_matches as f32 / total as f32 * 100.0;
    println!();
    println!("{label_matches}/{total} predictions match their label ({accuracy:.1}%)");
    Ok(())
}

/// Corpus text may contain `|`, which would split a markdown table row.
fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
