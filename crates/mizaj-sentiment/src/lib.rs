//! Rule-based sentiment analysis for mixed English and Roman Urdu/Hindi
//! text.
//!
//! Free text is lowercased and tokenized, scored word-by-word against
//! static weight dictionaries with negation and intensifier handling, and
//! classified into a polarity label with a confidence percentage. There is
//! no trained model: the pipeline is deterministic and synchronous, and
//! [`analyze`] can be called from any thread without setup.

pub mod classifier;
pub mod engine;
pub mod lexicon;
pub mod scorer;
pub mod tokenizer;
pub mod types;
pub mod vocabulary;

pub use engine::{analyze, SentimentEngine};
pub use types::{ModelInfo, Prediction, ScoreResult};
