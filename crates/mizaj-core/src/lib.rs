//! Shared domain types and configuration for mizaj.
//!
//! Holds the sentiment label enum used across the workspace, environment
//! configuration loading, and the labeled corpus file the engine builds its
//! vocabulary from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod app_config;
mod config;
mod corpus;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use corpus::{load_corpus, CorpusEntry, CorpusFile};

/// Polarity label attached to a prediction or a corpus entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read corpus file {path}: {source}")]
    CorpusFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus file: {0}")]
    CorpusFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_display() {
        assert_eq!(Sentiment::Positive.to_string(), "positive");
        assert_eq!(Sentiment::Negative.to_string(), "negative");
        assert_eq!(Sentiment::Neutral.to_string(), "neutral");
    }

    #[test]
    fn sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }

    #[test]
    fn sentiment_deserializes_lowercase() {
        let label: Sentiment = serde_json::from_str("\"positive\"").unwrap();
        assert_eq!(label, Sentiment::Positive);
    }
}
