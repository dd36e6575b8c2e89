pub mod tokenizer;

pub use tokenizer::{BatchTokenizer, HfTokenizer, TokenEncoding};
