//! Classifier error types

use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors that can occur while training or scoring
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// Class priors are undefined until at least one sentence has been trained
    #[error("Invalid state: classifier has no training examples")]
    InvalidState,

    /// Label outside the two recognized classes
    #[error("Unrecognized class label: '{0}' (expected 'positive' or 'negative')")]
    UnrecognizedClass(String),
}
