//! CLI command implementations

use anyhow::{Context, Result};
use corpus_tokenize::data::{load_corpus, Label, LabelEncoder};
use corpus_tokenize::{corpus_to_dataset, Config, HfTokenizer};
use std::path::Path;

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

pub fn tokenize(
    corpus_path: &Path,
    tokenizer_path: &Path,
    output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let corpus = load_corpus(corpus_path)
        .with_context(|| format!("Failed to load corpus {}", corpus_path.display()))?;
    let tokenizer = HfTokenizer::from_file(tokenizer_path, &config.tokenizer)?;
    tracing::info!(
        "Tokenizing {} rows (max_length={}, truncation={})",
        corpus.len(),
        tokenizer.max_length(),
        config.tokenizer.truncation
    );

    let dataset = corpus_to_dataset(&corpus, &tokenizer, config)?;

    println!("Label classes: {}", format_classes(&dataset.label_encoder));
    for (partition, examples) in dataset.iter() {
        println!("  {:<12} {:>8} examples", partition.name(), examples.len());
    }
    if !dataset.dropped.is_empty() {
        println!("  {:<12} {:>8} rows", "dropped", dataset.dropped.total());
    }

    if let Some(dir) = output {
        dataset.write_jsonl(dir)?;
        println!("Wrote dataset to {}", dir.display());
    }

    Ok(())
}

pub fn inspect(corpus_path: &Path, config: &Config) -> Result<()> {
    let corpus = load_corpus(corpus_path)
        .with_context(|| format!("Failed to load corpus {}", corpus_path.display()))?;
    let columns = &config.corpus;

    println!("Rows:    {}", corpus.len());
    println!("Columns: {}", corpus.columns().join(", "));

    if let Err(e) = corpus.require_columns(&columns.required_columns()) {
        println!("Warning: {}", e);
    }

    println!("\nSplit values ({}):", columns.split_column);
    for (value, count) in corpus.value_counts(&columns.split_column) {
        println!("  {:<12} {:>8}", value, count);
    }

    let labels: Vec<Label> = corpus
        .rows()
        .iter()
        .filter_map(|row| row.get(&columns.label_column))
        .filter_map(Label::from_value)
        .collect();
    let encoder = LabelEncoder::fit(&labels);
    println!("\nLabel classes ({}): {}", columns.label_column, format_classes(&encoder));

    Ok(())
}

fn format_classes(encoder: &LabelEncoder) -> String {
    encoder
        .classes()
        .iter()
        .enumerate()
        .map(|(id, label)| format!("{}={}", label, id))
        .collect::<Vec<_>>()
        .join(", ")
}
