use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Sentiment};

/// One labeled example text from the corpus file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Deserialize)]
pub struct CorpusFile {
    pub entries: Vec<CorpusEntry>,
}

impl CorpusFile {
    /// Iterate over the raw example texts, label-free.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }
}

/// Load and validate the labeled corpus from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_corpus(path: &Path) -> Result<CorpusFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CorpusFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let corpus_file: CorpusFile = serde_yaml::from_str(&content)?;

    validate_corpus(&corpus_file)?;

    Ok(corpus_file)
}

fn validate_corpus(corpus_file: &CorpusFile) -> Result<(), ConfigError> {
    let mut seen_texts = HashSet::new();

    for entry in &corpus_file.entries {
        let trimmed = entry.text.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Validation(
                "corpus entry text must be non-empty".to_string(),
            ));
        }

        if entry.sentiment == Sentiment::Neutral {
            return Err(ConfigError::Validation(format!(
                "corpus entry \"{trimmed}\" is labeled neutral; corpus labels must be positive or negative"
            )));
        }

        if !seen_texts.insert(trimmed.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate corpus entry text: \"{trimmed}\""
            )));
        }
    }

    Ok(())
}
