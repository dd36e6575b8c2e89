pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "corpus-tokenize")]
#[command(about = "Tokenize a labeled, split text corpus into train/validation/test", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode labels, partition by split and tokenize a corpus
    Tokenize {
        /// Corpus file (.csv, .jsonl or .json)
        #[arg(long)]
        corpus: PathBuf,
        /// HuggingFace tokenizer.json
        #[arg(long)]
        tokenizer: PathBuf,
        /// Directory for train/validation/test JSONL and labels.json
        #[arg(long)]
        output: Option<PathBuf>,
        /// JSON config file (CLI flags override it)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Shuffle seed
        #[arg(long)]
        seed: Option<u64>,
        /// Truncation length
        #[arg(long)]
        max_length: Option<usize>,
        /// Texts per tokenizer call
        #[arg(long)]
        batch_size: Option<usize>,
        /// Keep full-length encodings
        #[arg(long)]
        no_truncation: bool,
    },
    /// Show columns, split counts and label classes of a corpus
    Inspect {
        /// Corpus file (.csv, .jsonl or .json)
        #[arg(long)]
        corpus: PathBuf,
        /// JSON config file for column names
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokenize {
            corpus,
            tokenizer,
            output,
            config,
            seed,
            max_length,
            batch_size,
            no_truncation,
        } => {
            let mut config = commands::load_config(config.as_deref())?;
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if max_length.is_some() {
                config.tokenizer.max_length = max_length;
            }
            if let Some(batch_size) = batch_size {
                config.tokenizer.batch_size = batch_size;
            }
            if no_truncation {
                config.tokenizer.truncation = false;
            }
            config.validate()?;
            commands::tokenize(&corpus, &tokenizer, output.as_deref(), &config)
        }
        Commands::Inspect { corpus, config } => {
            let config = commands::load_config(config.as_deref())?;
            commands::inspect(&corpus, &config)
        }
    }
}
