//! Decision module - turning two class scores into a verdict
//!
//! Scores are unnormalized log-likelihoods. They only mean something relative
//! to each other and must not be shown as probabilities that sum to one.

use crate::Sentiment;

/// Default margin below which a verdict falls back to positive
pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.5;

/// Log-likelihood scores of one sentence under each class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    /// Score under the positive class
    pub positive: f64,
    /// Score under the negative class
    pub negative: f64,
}

impl ClassScores {
    /// Create a score pair
    pub fn new(positive: f64, negative: f64) -> Self {
        Self { positive, negative }
    }

    /// Get the score for one class
    pub fn get(&self, class: Sentiment) -> f64 {
        match class {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
        }
    }

    /// Absolute difference between the two scores
    pub fn margin(&self) -> f64 {
        (self.positive - self.negative).abs()
    }

    /// Class with the strictly higher score, ties go to positive
    pub fn argmax(&self) -> Sentiment {
        if self.positive >= self.negative {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

/// Thresholded decision rule
///
/// Reports positive when the positive score is at least the negative one, or
/// when the two are closer than `threshold`. Near-ties therefore lean
/// positive. A threshold of zero reduces this to [`ClassScores::argmax`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionPolicy {
    threshold: f64,
}

impl DecisionPolicy {
    /// Create a policy with the given margin threshold
    ///
    /// # Panics
    /// Panics if `threshold` is negative or not finite
    pub fn new(threshold: f64) -> Self {
        assert!(
            threshold.is_finite() && threshold >= 0.0,
            "Decision threshold must be a finite, non-negative number"
        );
        Self { threshold }
    }

    /// Symmetric policy: the higher score wins
    pub fn argmax() -> Self {
        Self { threshold: 0.0 }
    }

    /// The margin threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Decide a verdict for a pair of scores
    pub fn decide(&self, scores: &ClassScores) -> Sentiment {
        if scores.positive >= scores.negative || scores.margin() < self.threshold {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DECISION_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin() {
        let scores = ClassScores::new(-3.0, -4.5);
        assert_eq!(scores.margin(), 1.5);
        assert_eq!(scores.get(Sentiment::Negative), -4.5);
    }

    #[test]
    fn test_clear_negative() {
        let policy = DecisionPolicy::default();
        let scores = ClassScores::new(-10.0, -8.0);
        assert_eq!(policy.decide(&scores), Sentiment::Negative);
    }

    #[test]
    fn test_near_tie_leans_positive() {
        let policy = DecisionPolicy::default();
        let scores = ClassScores::new(-8.3, -8.0);
        assert_eq!(policy.decide(&scores), Sentiment::Positive);
        assert_eq!(DecisionPolicy::argmax().decide(&scores), Sentiment::Negative);
    }

    #[test]
    fn test_exact_tie_is_positive() {
        let scores = ClassScores::new(-2.0, -2.0);
        assert_eq!(DecisionPolicy::argmax().decide(&scores), Sentiment::Positive);
        assert_eq!(scores.argmax(), Sentiment::Positive);
    }

    #[test]
    fn test_margin_equal_to_threshold_is_not_a_near_tie() {
        let policy = DecisionPolicy::new(0.5);
        let scores = ClassScores::new(-2.5, -2.0);
        assert_eq!(policy.decide(&scores), Sentiment::Negative);
    }

    #[test]
    #[should_panic]
    fn test_negative_threshold() {
        DecisionPolicy::new(-0.1);
    }
}
