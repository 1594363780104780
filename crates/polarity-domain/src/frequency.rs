//! Per-word occurrence counts

use crate::Sentiment;

/// Observed counts of one vocabulary word, split by class
///
/// Both class counters exist from the moment the word is first seen, even if
/// only one of them is ever incremented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    word: String,
    counter: [u64; 2],
}

impl WordFrequency {
    /// Create a word entry with zero counts for both classes
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            counter: [0; 2],
        }
    }

    /// The word itself
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Occurrences of this word in sentences of `class`
    pub fn count(&self, class: Sentiment) -> u64 {
        self.counter[class.index()]
    }

    /// Occurrences across both classes
    pub fn total(&self) -> u64 {
        self.counter.iter().sum()
    }

    pub(crate) fn increment(&mut self, class: Sentiment) {
        self.counter[class.index()] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_word_has_both_counters_at_zero() {
        let wf = WordFrequency::new("good");
        assert_eq!(wf.word(), "good");
        assert_eq!(wf.count(Sentiment::Positive), 0);
        assert_eq!(wf.count(Sentiment::Negative), 0);
        assert_eq!(wf.total(), 0);
    }

    #[test]
    fn test_increment() {
        let mut wf = WordFrequency::new("product");
        wf.increment(Sentiment::Positive);
        wf.increment(Sentiment::Positive);
        wf.increment(Sentiment::Negative);
        assert_eq!(wf.count(Sentiment::Positive), 2);
        assert_eq!(wf.count(Sentiment::Negative), 1);
        assert_eq!(wf.total(), 3);
    }
}
