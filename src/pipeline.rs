//! Corpus to tokenized train/validation/test partitions
//!
//! The transform runs four steps in order: a seeded shuffle, one label
//! encoding fitted over every row, partitioning by split value, and batched
//! tokenization of each partition. The input corpus is never modified.

use crate::config::Config;
use crate::data::corpus::{cell_to_string, Corpus, Row};
use crate::data::{Label, LabelEncoder, Partition};
use crate::error::{CorpusError, Result};
use crate::model::{BatchTokenizer, TokenEncoding};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use crate::data::split::DroppedRows;

/// One training example: the encoded label and the tokenizer output, nothing else
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedExample {
    pub labels: u32,
    pub input_ids: Vec<u32>,
    pub attention_mask: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type_ids: Option<Vec<u32>>,
}

impl TokenizedExample {
    fn new(labels: u32, encoding: TokenEncoding) -> Self {
        Self {
            labels,
            input_ids: encoding.input_ids,
            attention_mask: encoding.attention_mask,
            token_type_ids: encoding.token_type_ids,
        }
    }
}

/// Tokenized partitions sharing one label encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizedDataset {
    pub train: Vec<TokenizedExample>,
    pub validation: Vec<TokenizedExample>,
    pub test: Vec<TokenizedExample>,
    pub label_encoder: LabelEncoder,
    pub dropped: DroppedRows,
}

impl TokenizedDataset {
    pub fn partition(&self, partition: Partition) -> &[TokenizedExample] {
        match partition {
            Partition::Train => &self.train,
            Partition::Validation => &self.validation,
            Partition::Test => &self.test,
        }
    }

    /// Look up a partition by output name: `train`, `validation` or `test`
    pub fn get(&self, name: &str) -> Option<&[TokenizedExample]> {
        Partition::from_name(name).map(|p| self.partition(p))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Partition, &[TokenizedExample])> {
        Partition::ALL.into_iter().map(move |p| (p, self.partition(p)))
    }

    /// Rows across all three partitions
    pub fn num_rows(&self) -> usize {
        self.train.len() + self.validation.len() + self.test.len()
    }

    /// Write `train.jsonl`, `validation.jsonl`, `test.jsonl` (one example per
    /// line) and `labels.json` (the encoder's class list) into `dir`.
    pub fn write_jsonl(&self, dir: &Path) -> Result<()> {
        let write_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| CorpusError::OutputWrite { path, source }
        };

        std::fs::create_dir_all(dir).map_err(write_err(dir))?;

        for (partition, examples) in self.iter() {
            let path = dir.join(format!("{}.jsonl", partition.name()));
            let file = File::create(&path).map_err(write_err(&path))?;
            let mut writer = BufWriter::new(file);
            for example in examples {
                serde_json::to_writer(&mut writer, example)
                    .map_err(|e| write_err(&path)(e.into()))?;
                writer.write_all(b"\n").map_err(write_err(&path))?;
            }
            writer.flush().map_err(write_err(&path))?;
        }

        let path = dir.join("labels.json");
        let labels = serde_json::to_string_pretty(&self.label_encoder)
            .map_err(|e| write_err(&path)(e.into()))?;
        std::fs::write(&path, labels).map_err(write_err(&path))?;
        Ok(())
    }
}

/// Split key for rows whose split cell is absent or null
const MISSING_SPLIT: &str = "<missing>";

/// What the pipeline knows about a row before tokenization
struct Record<'a> {
    idx: usize,
    row: &'a Row,
    label: Label,
    /// Target partition, or the split value the row is dropped under
    split: std::result::Result<Partition, String>,
}

/// Tokenize `corpus` into train/validation/test partitions.
///
/// Fails with `MissingColumn` before touching any row when a required column
/// is absent. Rows whose split is not `train`, `dev` or `test` (null included)
/// are counted in `TokenizedDataset::dropped` and left out of every partition;
/// their text is never read.
pub fn corpus_to_dataset<T>(corpus: &Corpus, tokenizer: &T, config: &Config) -> Result<TokenizedDataset>
where
    T: BatchTokenizer + ?Sized,
{
    let columns = &config.corpus;
    corpus.require_columns(&columns.required_columns())?;
    config.tokenizer.validate()?;

    let mut records = corpus
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| read_record(row, idx, config))
        .collect::<Result<Vec<_>>>()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    records.shuffle(&mut rng);

    // Fitted on every row, dropped ones included
    let label_encoder = LabelEncoder::fit(records.iter().map(|r| &r.label));
    tracing::info!(
        "Encoded {} rows into {} label classes",
        records.len(),
        label_encoder.num_classes()
    );

    let mut grouped: [Vec<(String, u32)>; 3] = Default::default();
    let mut dropped = DroppedRows::default();
    for record in records {
        let partition = match record.split {
            Ok(partition) => partition,
            Err(value) => {
                dropped.record(&value);
                continue;
            }
        };
        let label_id = label_encoder
            .transform(&record.label)
            .ok_or_else(|| CorpusError::UnknownLabel(record.label.to_string()))?;
        let text = read_text(record.row, record.idx, &columns.text_column)?;
        grouped[partition as usize].push((text, label_id));
    }

    if !dropped.is_empty() {
        tracing::warn!(
            "Dropped {} rows with unrecognized split values: {:?}",
            dropped.total(),
            dropped.by_split()
        );
    }

    let [train, validation, test] = grouped;
    let batch_size = config.tokenizer.batch_size;
    let truncation = config.tokenizer.truncation;
    let dataset = TokenizedDataset {
        train: tokenize_partition(Partition::Train, train, tokenizer, batch_size, truncation)?,
        validation: tokenize_partition(
            Partition::Validation,
            validation,
            tokenizer,
            batch_size,
            truncation,
        )?,
        test: tokenize_partition(Partition::Test, test, tokenizer, batch_size, truncation)?,
        label_encoder,
        dropped,
    };

    for (partition, examples) in dataset.iter() {
        tracing::info!("{}: {} examples", partition, examples.len());
    }

    Ok(dataset)
}

fn read_record<'a>(row: &'a Row, idx: usize, config: &Config) -> Result<Record<'a>> {
    let columns = &config.corpus;

    let label_value = cell(row, idx, &columns.label_column)?;
    let label = Label::from_value(label_value).ok_or_else(|| CorpusError::InvalidLabel {
        row: idx,
        value: label_value.to_string(),
    })?;

    let split = match row.get(&columns.split_column) {
        None | Some(Value::Null) => Err(MISSING_SPLIT.to_string()),
        Some(value) => {
            let value = cell_to_string(value);
            Partition::from_split(&value).ok_or(value)
        }
    };

    Ok(Record {
        idx,
        row,
        label,
        split,
    })
}

fn read_text(row: &Row, idx: usize, column: &str) -> Result<String> {
    match cell(row, idx, column)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(CorpusError::InvalidText {
            row: idx,
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}

/// A present, non-null cell
fn cell<'a>(row: &'a Row, idx: usize, column: &str) -> Result<&'a Value> {
    match row.get(column) {
        Some(Value::Null) | None => Err(CorpusError::MissingValue {
            row: idx,
            column: column.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

fn tokenize_partition<T>(
    partition: Partition,
    rows: Vec<(String, u32)>,
    tokenizer: &T,
    batch_size: usize,
    truncation: bool,
) -> Result<Vec<TokenizedExample>>
where
    T: BatchTokenizer + ?Sized,
{
    let mut examples = Vec::with_capacity(rows.len());

    for (batch_idx, batch) in rows.chunks(batch_size).enumerate() {
        let texts: Vec<&str> = batch.iter().map(|(text, _)| text.as_str()).collect();
        let encodings = tokenizer.tokenize_batch(&texts, truncation)?;
        if encodings.len() != batch.len() {
            return Err(CorpusError::Tokenization(format!(
                "{} batch {}: expected {} encodings, got {}",
                partition,
                batch_idx,
                batch.len(),
                encodings.len()
            )));
        }

        tracing::debug!("{} batch {}: {} texts", partition, batch_idx, batch.len());
        examples.extend(
            batch
                .iter()
                .zip(encodings)
                .map(|((_, label), encoding)| TokenizedExample::new(*label, encoding)),
        );
    }

    Ok(examples)
}
