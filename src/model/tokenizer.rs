//! Batch tokenization capability and its HuggingFace tokenizers backend

use crate::config::{TokenizerConfig, DEFAULT_MAX_LENGTH};
use crate::error::{CorpusError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokenizers::{Encoding, Tokenizer, TruncationParams};

/// Tokenizer output for one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEncoding {
    pub input_ids: Vec<u32>,
    pub attention_mask: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type_ids: Option<Vec<u32>>,
}

/// Anything that turns a batch of texts into one encoding per text.
///
/// Implementations must return exactly `texts.len()` encodings, in order.
pub trait BatchTokenizer {
    fn tokenize_batch(&self, texts: &[&str], truncation: bool) -> Result<Vec<TokenEncoding>>;
}

/// `tokenizers::Tokenizer` with an explicit truncation length
pub struct HfTokenizer {
    plain: Tokenizer,
    truncating: Tokenizer,
    max_length: usize,
    add_special_tokens: bool,
    token_type_ids: bool,
}

impl HfTokenizer {
    pub fn from_file(path: impl AsRef<Path>, config: &TokenizerConfig) -> Result<Self> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::from_file(path).map_err(|e| CorpusError::TokenizerLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_tokenizer(tokenizer, config)
    }

    /// Wrap a loaded tokenizer.
    ///
    /// Padding stored in the tokenizer is dropped: encodings never depend on
    /// which texts share a batch. The truncation length is `config.max_length`,
    /// else the truncation stored in the tokenizer, else `DEFAULT_MAX_LENGTH`.
    pub fn from_tokenizer(tokenizer: Tokenizer, config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;

        let max_length = config
            .max_length
            .or_else(|| tokenizer.get_truncation().map(|t| t.max_length))
            .unwrap_or(DEFAULT_MAX_LENGTH);

        let mut plain = tokenizer;
        plain
            .with_truncation(None)
            .map_err(|e| CorpusError::Tokenization(e.to_string()))?;
        plain.with_padding(None);

        let mut truncating = plain.clone();
        truncating
            .with_truncation(Some(TruncationParams {
                max_length,
                ..Default::default()
            }))
            .map_err(|e| CorpusError::Tokenization(e.to_string()))?;

        // Pair-aware post-processors (BERT style) emit segment ids worth keeping
        let token_type_ids = plain.get_post_processor().is_some();

        Ok(Self {
            plain,
            truncating,
            max_length,
            add_special_tokens: config.add_special_tokens,
            token_type_ids,
        })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let encoding = self
            .plain
            .encode(text, self.add_special_tokens)
            .map_err(|e| CorpusError::Tokenization(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn convert(&self, encoding: &Encoding) -> TokenEncoding {
        TokenEncoding {
            input_ids: encoding.get_ids().to_vec(),
            attention_mask: encoding.get_attention_mask().to_vec(),
            token_type_ids: self
                .token_type_ids
                .then(|| encoding.get_type_ids().to_vec()),
        }
    }
}

impl BatchTokenizer for HfTokenizer {
    fn tokenize_batch(&self, texts: &[&str], truncation: bool) -> Result<Vec<TokenEncoding>> {
        let tokenizer = if truncation {
            &self.truncating
        } else {
            &self.plain
        };
        let encodings = tokenizer
            .encode_batch(texts.to_vec(), self.add_special_tokens)
            .map_err(|e| CorpusError::Tokenization(e.to_string()))?;
        Ok(encodings.iter().map(|e| self.convert(e)).collect())
    }
}
