//! Tokenizer module - turning sentences into bag-of-words tokens
//!
//! Two policies are provided. [`WordTokenizer`] case-folds and strips
//! surrounding punctuation so that `"Great!"` and `"great"` count as the same
//! word; it is the default. [`WhitespaceTokenizer`] splits on whitespace only
//! and keeps tokens verbatim. The choice changes the learned vocabulary, so a
//! trained classifier is only meaningful with the tokenizer it was trained with.

use crate::traits::Tokenizer;

/// Case-folding tokenizer that strips leading and trailing punctuation
///
/// Inner punctuation is kept, so `don't` and `well-made` survive as single
/// tokens. Pieces made only of punctuation are dropped.
///
/// # Examples
///
/// ```
/// use polarity_domain::{Tokenizer, WordTokenizer};
///
/// let tokens = WordTokenizer.tokenize("Good, GOOD product!");
/// assert_eq!(tokens, vec!["good", "good", "product"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_whitespace()
            .map(|piece| piece.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

/// Plain whitespace splitter, no normalization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_string).collect()
    }
}

/// Runtime-selectable tokenizer policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenizerKind {
    /// [`WordTokenizer`]
    #[default]
    Word,
    /// [`WhitespaceTokenizer`]
    Whitespace,
}

impl TokenizerKind {
    /// Get the policy name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerKind::Word => "word",
            TokenizerKind::Whitespace => "whitespace",
        }
    }

    /// Parse a policy name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "word" => Some(TokenizerKind::Word),
            "whitespace" => Some(TokenizerKind::Whitespace),
            _ => None,
        }
    }
}

impl Tokenizer for TokenizerKind {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        match self {
            TokenizerKind::Word => WordTokenizer.tokenize(sentence),
            TokenizerKind::Whitespace => WhitespaceTokenizer.tokenize(sentence),
        }
    }
}

impl std::str::FromStr for TokenizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tokenizer: {}", s))
    }
}
