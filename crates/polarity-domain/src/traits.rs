//! Trait definitions for pluggable pieces of the model
//!
//! The classifier only needs to turn raw text into tokens. Implementations
//! live in [`crate::tokenizer`].

/// Trait for splitting a sentence into word tokens
///
/// Implementations must preserve left-to-right order and multiplicity:
/// `"good good"` yields two `"good"` tokens. The same tokenizer has to be
/// used for training and for inference, otherwise lookups miss.
pub trait Tokenizer {
    /// Split a sentence into tokens. Never fails; empty input yields no tokens.
    fn tokenize(&self, sentence: &str) -> Vec<String>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        (**self).tokenize(sentence)
    }
}
