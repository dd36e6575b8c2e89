use serde::{Deserialize, Serialize};

/// Names of the columns the pipeline reads from a corpus
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CorpusConfig {
    pub text_column: String,
    pub label_column: String,
    pub split_column: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            text_column: "Sentence".to_string(),
            label_column: "labels".to_string(),
            split_column: "split".to_string(),
        }
    }
}

impl CorpusConfig {
    /// Columns every corpus must carry, in the order they are checked
    pub fn required_columns(&self) -> [&str; 3] {
        [&self.text_column, &self.label_column, &self.split_column]
    }
}
