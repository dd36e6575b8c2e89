use corpus_tokenize::data::Row;
use corpus_tokenize::{BatchTokenizer, Corpus, CorpusError, Result, TokenEncoding};
use serde_json::Value;
use std::cell::Cell;

/// Character-code tokenizer: one id per char, counts calls
pub struct CharTokenizer {
    pub max_length: usize,
    pub calls: Cell<usize>,
}

impl CharTokenizer {
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            calls: Cell::new(0),
        }
    }
}

impl BatchTokenizer for CharTokenizer {
    fn tokenize_batch(&self, texts: &[&str], truncation: bool) -> Result<Vec<TokenEncoding>> {
        self.calls.set(self.calls.get() + 1);
        Ok(texts
            .iter()
            .map(|text| {
                let mut ids: Vec<u32> = text.chars().map(|c| c as u32).collect();
                if truncation {
                    ids.truncate(self.max_length);
                }
                TokenEncoding {
                    attention_mask: vec![1; ids.len()],
                    input_ids: ids,
                    token_type_ids: None,
                }
            })
            .collect())
    }
}

/// Rejects any batch containing an empty text
pub struct RejectEmpty;

impl BatchTokenizer for RejectEmpty {
    fn tokenize_batch(&self, texts: &[&str], _truncation: bool) -> Result<Vec<TokenEncoding>> {
        if texts.iter().any(|t| t.is_empty()) {
            return Err(CorpusError::Tokenization("empty input".to_string()));
        }
        CharTokenizer::new(usize::MAX).tokenize_batch(texts, false)
    }
}

/// Returns one encoding fewer than asked for
pub struct ShortBatch;

impl BatchTokenizer for ShortBatch {
    fn tokenize_batch(&self, texts: &[&str], truncation: bool) -> Result<Vec<TokenEncoding>> {
        let mut out = CharTokenizer::new(usize::MAX).tokenize_batch(texts, truncation)?;
        out.pop();
        Ok(out)
    }
}

pub fn row(sentence: &str, label: Value, split: &str) -> Row {
    let mut row = Row::new();
    row.insert("Sentence".to_string(), Value::from(sentence));
    row.insert("labels".to_string(), label);
    row.insert("split".to_string(), Value::from(split));
    row
}

pub fn corpus(rows: Vec<Row>) -> Corpus {
    Corpus::from_rows(
        vec!["Sentence".to_string(), "labels".to_string(), "split".to_string()],
        rows,
    )
}
