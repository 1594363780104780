//! Polarity Domain Layer
//!
//! This crate contains the sentiment model itself: a two-class Naive Bayes
//! classifier over a bag-of-words representation. It performs no I/O and
//! knows nothing about corpus files or terminals; those live in `polarity-cli`.
//!
//! ## Key Concepts
//!
//! - **Sentiment**: The closed set of class labels (positive, negative)
//! - **Tokenizer**: Splits sentences into word tokens, keeping repeats
//! - **WordFrequency**: Per-class occurrence counts of one vocabulary word
//! - **Classifier**: Accumulates counts during training, scores sentences
//!   with Laplace-smoothed log-likelihoods
//! - **DecisionPolicy**: Turns the two class scores into a verdict
//!
//! ## Concurrency
//!
//! Training takes `&mut self` and scoring takes `&self`, so a classifier can
//! be shared between any number of readers once it is no longer being trained.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classifier;
pub mod decision;
pub mod error;
pub mod frequency;
pub mod sentiment;
pub mod tokenizer;
pub mod traits;

// Re-exports for convenience
pub use classifier::{ClassSelector, Classifier, ALPHA};
pub use decision::{ClassScores, DecisionPolicy, DEFAULT_DECISION_THRESHOLD};
pub use error::{ClassifierError, Result};
pub use frequency::WordFrequency;
pub use sentiment::Sentiment;
pub use tokenizer::{TokenizerKind, WhitespaceTokenizer, WordTokenizer};
pub use traits::Tokenizer;
