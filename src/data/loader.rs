//! Corpus loading from CSV and JSON Lines

use super::corpus::{Corpus, Row};
use crate::error::{CorpusError, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a corpus, choosing the reader by file extension
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => load_csv(path),
        Some("jsonl") | Some("json") => load_jsonl(path),
        _ => Err(CorpusError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Read a CSV file with a header row.
///
/// Empty cells become null. A column whose non-empty cells all parse as
/// integers is loaded as integers, so numeric labels sort numerically.
pub fn load_csv(path: &Path) -> Result<Corpus> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut cells: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        cells.push(record.iter().map(String::from).collect());
    }

    let integer_columns: Vec<bool> = (0..columns.len())
        .map(|col| {
            let mut values = cells
                .iter()
                .filter_map(|r| r.get(col))
                .filter(|v| !v.is_empty())
                .peekable();
            values.peek().is_some() && values.all(|v| v.parse::<i64>().is_ok())
        })
        .collect();

    let mut corpus = Corpus::new(columns.clone());
    for record in cells {
        let mut row = Row::new();
        for (col, cell) in record.into_iter().enumerate() {
            let value = if cell.is_empty() {
                Value::Null
            } else if integer_columns[col] {
                cell.parse::<i64>().map(Value::from).unwrap_or(Value::String(cell))
            } else {
                Value::String(cell)
            };
            row.insert(columns[col].clone(), value);
        }
        corpus.push(row);
    }

    tracing::debug!("Loaded {} rows from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Read one JSON object per line. Blank lines are skipped.
pub fn load_jsonl(path: &Path) -> Result<Corpus> {
    let file = File::open(path).map_err(|source| CorpusError::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut corpus = Corpus::default();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| CorpusError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(&line).map_err(|source| CorpusError::Json {
            line: line_no,
            source,
        })?;
        match value {
            Value::Object(row) => corpus.push(row),
            _ => return Err(CorpusError::NotAnObject { line: line_no }),
        }
    }

    tracing::debug!("Loaded {} rows from {}", corpus.len(), path.display());
    Ok(corpus)
}
