use corpus_tokenize::config::TokenizerConfig;
use corpus_tokenize::data::load_corpus;
use corpus_tokenize::{corpus_to_dataset, BatchTokenizer, Config, HfTokenizer, Label};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BERT_LIKE: &str = r#"{
    "version": "1.0",
    "truncation": null,
    "padding": null,
    "added_tokens": [],
    "normalizer": null,
    "pre_tokenizer": {"type": "Whitespace"},
    "post_processor": {"type": "BertProcessing", "sep": ["[SEP]", 2], "cls": ["[CLS]", 1]},
    "decoder": null,
    "model": {
        "type": "WordLevel",
        "vocab": {
            "[UNK]": 0, "[CLS]": 1, "[SEP]": 2, "i": 3, "love": 4, "it": 5,
            "bad": 6, "film": 7, "ok": 8, "movie": 9
        },
        "unk_token": "[UNK]"
    }
}"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_special_tokens_and_type_ids() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "tokenizer.json", BERT_LIKE);
    let tokenizer = HfTokenizer::from_file(&path, &TokenizerConfig::default()).unwrap();

    let out = tokenizer.tokenize_batch(&["i love it"], true).unwrap();
    assert_eq!(out[0].input_ids, vec![1, 3, 4, 5, 2]);
    assert_eq!(out[0].attention_mask, vec![1; 5]);
    assert_eq!(out[0].token_type_ids, Some(vec![0; 5]));
}

#[test]
fn test_truncation_keeps_special_tokens() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "tokenizer.json", BERT_LIKE);
    let config = TokenizerConfig {
        max_length: Some(4),
        ..Default::default()
    };
    let tokenizer = HfTokenizer::from_file(&path, &config).unwrap();

    let out = tokenizer.tokenize_batch(&["i love it"], true).unwrap();
    assert_eq!(out[0].input_ids, vec![1, 3, 4, 2]);
}

#[test]
fn test_csv_corpus_end_to_end() {
    let dir = TempDir::new().unwrap();
    let tokenizer_path = write(dir.path(), "tokenizer.json", BERT_LIKE);
    let corpus_path = write(
        dir.path(),
        "corpus.csv",
        "Sentence,labels,split,source\n\
         i love it,pos,train,web\n\
         bad film,neg,test,web\n\
         ok movie,pos,dev,forum\n\
         film,neg,unused,forum\n",
    );

    let config = Config::default();
    let corpus = load_corpus(&corpus_path).unwrap();
    let tokenizer = HfTokenizer::from_file(&tokenizer_path, &config.tokenizer).unwrap();
    let dataset = corpus_to_dataset(&corpus, &tokenizer, &config).unwrap();

    assert_eq!(
        dataset.label_encoder.classes(),
        &[Label::from("neg"), Label::from("pos")]
    );
    assert_eq!(dataset.train[0].labels, 1);
    assert_eq!(dataset.train[0].input_ids, vec![1, 3, 4, 5, 2]);
    assert_eq!(dataset.validation[0].labels, 1);
    assert_eq!(dataset.validation[0].input_ids, vec![1, 8, 9, 2]);
    assert_eq!(dataset.test[0].labels, 0);
    assert_eq!(dataset.test[0].input_ids, vec![1, 6, 7, 2]);
    assert_eq!(dataset.dropped.count("unused"), 1);
}

#[test]
fn test_numeric_csv_labels_sort_numerically() {
    let dir = TempDir::new().unwrap();
    let tokenizer_path = write(dir.path(), "tokenizer.json", BERT_LIKE);
    let corpus_path = write(
        dir.path(),
        "corpus.csv",
        "Sentence,labels,split\nit,10,train\nit,2,train\nit,1,test\n",
    );

    let config = Config::default();
    let corpus = load_corpus(&corpus_path).unwrap();
    let tokenizer = HfTokenizer::from_file(&tokenizer_path, &config.tokenizer).unwrap();
    let dataset = corpus_to_dataset(&corpus, &tokenizer, &config).unwrap();

    assert_eq!(
        dataset.label_encoder.classes(),
        &[Label::Integer(1), Label::Integer(2), Label::Integer(10)]
    );
    assert_eq!(dataset.test[0].labels, 0);
}
