pub mod corpus;
pub mod label_encoder;
pub mod loader;
pub mod split;

pub use corpus::{Corpus, Row};
pub use label_encoder::{Label, LabelEncoder};
pub use loader::{load_corpus, load_csv, load_jsonl};
pub use split::{DroppedRows, Partition};
