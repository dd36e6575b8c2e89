//! In-memory corpus table

use crate::error::{CorpusError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One corpus row: column name to cell value
pub type Row = Map<String, Value>;

/// A table of rows sharing a set of named columns.
///
/// Rows are not required to carry every column; a missing cell surfaces as
/// `CorpusError::MissingValue` when a consumer needs it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Corpus {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a corpus with an explicit column list
    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let mut corpus = Self::new(columns);
        for row in rows {
            corpus.push(row);
        }
        corpus
    }

    /// Build a corpus whose columns are the union of the rows' keys, first seen first
    pub fn from_records(records: impl IntoIterator<Item = Row>) -> Self {
        let mut corpus = Self::default();
        for row in records {
            corpus.push(row);
        }
        corpus
    }

    /// Append a row, registering any column it introduces
    pub fn push(&mut self, row: Row) {
        for key in row.keys() {
            if !self.has_column(key) {
                self.columns.push(key.clone());
            }
        }
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Fail with `MissingColumn` on the first absent column
    pub fn require_columns(&self, columns: &[&str]) -> Result<()> {
        match columns.iter().find(|c| !self.has_column(c)) {
            Some(column) => Err(CorpusError::MissingColumn {
                column: column.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Count rows per distinct value of `column`. Absent and null cells count as `<missing>`.
    pub fn value_counts(&self, column: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            let key = match row.get(column) {
                Some(Value::Null) | None => "<missing>".to_string(),
                Some(value) => cell_to_string(value),
            };
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }
}

/// Render a cell the way it reads in a table: strings unquoted, everything else as JSON
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_from_records_collects_columns() {
        let corpus = Corpus::from_records(vec![
            row(json!({"Sentence": "a", "labels": "x"})),
            row(json!({"Sentence": "b", "split": "train"})),
        ]);
        assert_eq!(corpus.len(), 2);
        assert!(corpus.has_column("Sentence"));
        assert!(corpus.has_column("labels"));
        assert!(corpus.has_column("split"));
        assert_eq!(corpus.columns().len(), 3);
    }

    #[test]
    fn test_require_columns_names_first_missing() {
        let corpus = Corpus::new(vec!["labels".to_string(), "split".to_string()]);
        let err = corpus
            .require_columns(&["Sentence", "labels", "split"])
            .unwrap_err();
        match err {
            CorpusError::MissingColumn { column } => assert_eq!(column, "Sentence"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(corpus.require_columns(&["labels"]).is_ok());
    }

    #[test]
    fn test_value_counts() {
        let corpus = Corpus::from_records(vec![
            row(json!({"split": "train"})),
            row(json!({"split": "train"})),
            row(json!({"split": "dev"})),
            row(json!({"other": 1})),
            row(json!({"split": null})),
        ]);
        let counts = corpus.value_counts("split");
        assert_eq!(counts["train"], 2);
        assert_eq!(counts["dev"], 1);
        assert_eq!(counts["<missing>"], 2);
    }
}
