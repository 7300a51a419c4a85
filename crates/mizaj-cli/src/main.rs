mod analyze;
mod model;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mizaj")]
#[command(about = "Rule-based sentiment analysis for English and Roman Urdu/Hindi text")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a single text and print the prediction
    Analyze {
        /// Text to analyze
        #[arg(long)]
        text: String,

        /// Print the prediction as JSON instead of human-readable lines
        #[arg(long)]
        json: bool,
    },
    /// Build the engine vocabulary from the labeled corpus
    Train {
        /// Corpus file to use instead of the configured one
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Print the resulting engine info as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show engine metadata
    Info {
        /// Print the engine info as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score every labeled corpus entry and report accuracy
    Eval {
        /// Corpus file to use instead of the configured one
        #[arg(long)]
        corpus: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = mizaj_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze { text, json }) => analyze::run_analyze(&config, &text, json),
        Some(Commands::Train { corpus, json }) => {
            model::run_train(&config, corpus.as_deref(), json)
        }
        Some(Commands::Info { json }) => model::run_info(json),
        Some(Commands::Eval { corpus }) => model::run_eval(&config, corpus.as_deref()),
        None => {
            println!("no command given; try `mizaj analyze --text \"...\"` or --help");
            Ok(())
        }
    }
}
