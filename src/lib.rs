//! Tokenized dataset preparation for text classification
//!
//! This crate turns a labeled, pre-split text corpus into three tokenized
//! partitions (train, validation, test) ready to feed a classifier.
//!
//! ## Pipeline
//!
//! 1. Shuffle the rows with a fixed seed
//! 2. Fit one label encoding over the whole corpus
//! 3. Partition rows by their split value (`train`, `dev`, `test`)
//! 4. Tokenize each partition in batches, keeping only the label id
//!    and the tokenizer output
//!
//! ## Main Components
//!
//! - `pipeline`: the corpus-to-dataset transform
//! - `data`: corpus table, loaders, label encoder, split mapping
//! - `model`: the batch tokenizer capability and its HuggingFace backend
//! - `config`: configuration management
//! - `error`: library error type

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod pipeline;

pub use config::Config;
pub use data::{Corpus, Label, LabelEncoder, Partition};
pub use error::{CorpusError, Result};
pub use model::{BatchTokenizer, HfTokenizer, TokenEncoding};
pub use pipeline::{corpus_to_dataset, DroppedRows, TokenizedDataset, TokenizedExample};
