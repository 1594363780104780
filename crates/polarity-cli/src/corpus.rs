//! Labeled corpus loading.
//!
//! A corpus is a text file with one review per line: the sentence, a tab,
//! then `1` for positive or `0` for negative. Lines that do not split into
//! exactly two fields, or carry any other label, are skipped.

use crate::error::{CliError, Result};
use polarity_domain::{Classifier, Sentiment, Tokenizer};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Labeled sentences read from a corpus file.
///
/// Sentences are unique; when one appears several times the last label wins.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    examples: HashMap<String, Sentiment>,
    lines: usize,
    skipped: usize,
}

impl Corpus {
    /// Read and parse a corpus file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let corpus = Self::parse(&contents);

        info!(
            path = %path.display(),
            sentences = corpus.len(),
            skipped = corpus.skipped,
            "Loaded corpus"
        );

        Ok(corpus)
    }

    /// Parse corpus text.
    pub fn parse(contents: &str) -> Self {
        let mut corpus = Self::default();

        for (idx, line) in contents.lines().enumerate() {
            corpus.lines += 1;
            let line = line.trim_end_matches('\r');

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 2 {
                debug!("Skipping line {}: expected 2 fields, found {}", idx + 1, fields.len());
                corpus.skipped += 1;
                continue;
            }

            match parse_label(fields[1]) {
                Some(class) => {
                    corpus.examples.insert(fields[0].to_string(), class);
                }
                None => {
                    debug!("Skipping line {}: unrecognized label '{}'", idx + 1, fields[1]);
                    corpus.skipped += 1;
                }
            }
        }

        corpus
    }

    /// Number of distinct labeled sentences.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether no labeled sentences were found.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Number of lines read, including skipped ones.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Number of malformed or unlabeled lines.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Label of a sentence, if present.
    pub fn label(&self, sentence: &str) -> Option<Sentiment> {
        self.examples.get(sentence).copied()
    }

    /// Iterate over labeled sentences, in no particular order.
    pub fn examples(&self) -> impl Iterator<Item = (&str, Sentiment)> {
        self.examples.iter().map(|(s, c)| (s.as_str(), *c))
    }

    /// Train a fresh classifier on every sentence of the corpus.
    pub fn train<T: Tokenizer>(&self, tokenizer: T) -> Classifier<T> {
        let mut classifier = Classifier::with_tokenizer(tokenizer);
        classifier.train(self.examples());
        classifier
    }
}

/// Load the corpus at `path` and train a classifier on it.
///
/// An empty corpus is an error, since priors are undefined without examples.
pub fn train_from_file<T: Tokenizer>(path: &Path, tokenizer: T) -> Result<Classifier<T>> {
    let corpus = Corpus::load(path).map_err(|e| match e {
        CliError::Io(io) => CliError::Io(std::io::Error::new(
            io.kind(),
            format!("{}: {}", path.display(), io),
        )),
        other => other,
    })?;

    if corpus.is_empty() {
        return Err(CliError::EmptyCorpus(PathBuf::from(path)));
    }

    let classifier = corpus.train(tokenizer);
    info!(
        positive = classifier.sentence_count(Sentiment::Positive),
        negative = classifier.sentence_count(Sentiment::Negative),
        vocabulary = classifier.vocabulary_size(),
        "Trained classifier"
    );

    Ok(classifier)
}

fn parse_label(field: &str) -> Option<Sentiment> {
    match field.trim() {
        "1" => Some(Sentiment::Positive),
        "0" => Some(Sentiment::Negative),
        _ => None,
    }
}
