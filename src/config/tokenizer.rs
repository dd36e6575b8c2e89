use crate::error::{CorpusError, Result};
use serde::{Deserialize, Serialize};

/// Truncation length used when neither the config nor the tokenizer file sets one
pub const DEFAULT_MAX_LENGTH: usize = 512;

/// Tokenization settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Truncation length. `None` defers to the tokenizer file, then `DEFAULT_MAX_LENGTH`.
    pub max_length: Option<usize>,
    pub truncation: bool,
    pub add_special_tokens: bool,
    /// Number of texts handed to the tokenizer per call
    pub batch_size: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_length: None,
            truncation: true,
            add_special_tokens: true,
            batch_size: 1000,
        }
    }
}

impl TokenizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(CorpusError::Config("batch_size must be > 0".to_string()));
        }
        if self.max_length == Some(0) {
            return Err(CorpusError::Config("max_length must be > 0 when set".to_string()));
        }
        Ok(())
    }
}
