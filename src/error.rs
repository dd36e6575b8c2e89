//! Error type shared by corpus loading, label encoding and tokenization

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    // --- Schema ---
    #[error("required column `{column}` is missing from the corpus")]
    MissingColumn { column: String },

    #[error("row {row} has no value for column `{column}`")]
    MissingValue { row: usize, column: String },

    #[error("row {row}: column `{column}` must hold text, got {value}")]
    InvalidText {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: label must be an integer or a string, got {value}")]
    InvalidLabel { row: usize, value: String },

    #[error("label {0} was not seen when the encoder was fitted")]
    UnknownLabel(String),

    // --- Tokenizer ---
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    #[error("failed to load tokenizer from {path}: {reason}")]
    TokenizerLoad { path: PathBuf, reason: String },

    // --- I/O ---
    #[error("failed to read corpus {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported corpus format: {0} (expected .csv, .jsonl or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line} is not a JSON object")]
    NotAnObject { line: usize },

    // --- Config ---
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CorpusError>;
