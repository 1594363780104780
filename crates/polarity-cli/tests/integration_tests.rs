//! Integration tests for polarity-cli
//!
//! These tests go from a corpus file on disk to a verdict, the same path the
//! `polarity` binary takes.

use polarity_cli::config::{Config, OutputFormat, TokenizerSetting};
use polarity_cli::corpus::{self, Corpus};
use polarity_cli::{CliError, Formatter};
use polarity_domain::{Sentiment, TokenizerKind};
use std::fs;

const REVIEWS: &str = "\
Great phone, works great.\t1
Waste of money, broke after a week.\t0
Excellent value and great sound.\t1
Terrible sound and poor quality.\t0
this line has no label
I love this headset.\t1
I want my money back.\t0
Good quality, highly recommend.\t1
Do not buy this, total waste.\t0
";

fn write_corpus(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("amazon_cells_labelled.txt");
    fs::write(&path, REVIEWS).unwrap();
    path
}

#[test]
fn test_corpus_round_trip_to_verdict() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(&dir);

    let config = Config::default();
    let classifier = corpus::train_from_file(&path, config.tokenizer()).unwrap();
    let policy = config.decision_policy();

    assert_eq!(classifier.sentence_count(Sentiment::Positive), 4);
    assert_eq!(classifier.sentence_count(Sentiment::Negative), 4);

    let scores = classifier.classify("great value, excellent quality").unwrap();
    assert_eq!(policy.decide(&scores), Sentiment::Positive);

    let scores = classifier.classify("waste of money").unwrap();
    assert_eq!(policy.decide(&scores), Sentiment::Negative);
}

#[test]
fn test_corpus_summary() {
    let corpus = Corpus::parse(REVIEWS);
    assert_eq!(corpus.len(), 8);
    assert_eq!(corpus.lines(), 9);
    assert_eq!(corpus.skipped(), 1);
    assert_eq!(corpus.label("I love this headset."), Some(Sentiment::Positive));
}

#[test]
fn test_config_file_drives_tokenizer_and_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let corpus_path = write_corpus(&dir);
    let config_path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.corpus.path = corpus_path;
    config.corpus.tokenizer = TokenizerSetting::Whitespace;
    config.decision.threshold = 0.0;
    config.save_to(&config_path).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert!(loaded.validate().is_ok());
    assert_eq!(loaded.tokenizer(), TokenizerKind::Whitespace);

    let classifier = corpus::train_from_file(&loaded.corpus.path, loaded.tokenizer()).unwrap();
    assert!(classifier.word("great.").is_some());
    assert!(classifier.word("Great").is_some());
    assert_eq!(loaded.decision_policy().threshold(), 0.0);
}

#[test]
fn test_malformed_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[decision]\nthreshold = \"high\"\n").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, CliError::Toml(_)));
}

#[test]
fn test_json_output_for_trained_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(&dir);
    let classifier = corpus::train_from_file(&path, TokenizerKind::Word).unwrap();

    let formatter = Formatter::new(OutputFormat::Json, false);
    let scores = classifier.classify("great").unwrap();
    let output = formatter.format_verdict(Sentiment::Positive, &scores).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["sentiment"], "positive");
    assert!(value["scores"]["positive"].as_f64().unwrap() < 0.0);
}
