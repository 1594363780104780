//! Sentiment module - the two class labels the classifier knows about

use crate::error::ClassifierError;
use std::fmt;

/// Class label for a training sentence or a classification verdict
///
/// The model is fixed to exactly two classes; any other label is rejected
/// at the boundary with [`ClassifierError::UnrecognizedClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    /// Favourable review
    Positive,

    /// Unfavourable review
    Negative,
}

impl Sentiment {
    /// Both classes, positive first
    pub const ALL: [Sentiment; 2] = [Sentiment::Positive, Sentiment::Negative];

    /// Get the class name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
        }
    }

    /// Parse a class from its name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    /// Get the opposite class
    pub fn other(&self) -> Self {
        match self {
            Sentiment::Positive => Sentiment::Negative,
            Sentiment::Negative => Sentiment::Positive,
        }
    }

    /// Slot of this class in per-class counter arrays
    pub(crate) fn index(&self) -> usize {
        match self {
            Sentiment::Positive => 0,
            Sentiment::Negative => 1,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ClassifierError::UnrecognizedClass(s.to_string()))
    }
}
