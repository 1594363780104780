//! Naive Bayes classifier over a bag-of-words model
//!
//! Training is pure accumulation: every sentence bumps its class sentence
//! count and, for every token, the token's per-class occurrence count.
//! Scoring combines the class prior with Laplace-smoothed word likelihoods in
//! log space:
//!
//! ```text
//! score(class) = ln P(class) + Σ ln((count(w, class) + α) / (total(class) + 2α))
//! ```
//!
//! The shared denominator P(words) is dropped, so scores are comparable
//! between the two classes but are not probabilities.

use crate::decision::ClassScores;
use crate::error::{ClassifierError, Result};
use crate::frequency::WordFrequency;
use crate::tokenizer::WordTokenizer;
use crate::traits::Tokenizer;
use crate::Sentiment;
use std::collections::HashMap;

/// Laplace smoothing constant
pub const ALPHA: u64 = 1;

/// Which classes a word-count query covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassSelector {
    /// A single class
    Class(Sentiment),
    /// Both classes together
    All,
}

impl From<Sentiment> for ClassSelector {
    fn from(class: Sentiment) -> Self {
        ClassSelector::Class(class)
    }
}

impl From<Option<Sentiment>> for ClassSelector {
    fn from(class: Option<Sentiment>) -> Self {
        class.map_or(ClassSelector::All, ClassSelector::Class)
    }
}

/// Two-class Naive Bayes sentiment classifier
///
/// `words` is the authoritative frequency table. Per-class sentence counts
/// are all that is kept of the training sentences themselves, since priors
/// only depend on how many there were. Per-class word totals are cached and
/// kept equal to a full scan of `words`.
///
/// # Examples
///
/// ```
/// use polarity_domain::{Classifier, Sentiment};
///
/// let mut classifier = Classifier::new();
/// classifier.train([
///     ("good good product", Sentiment::Positive),
///     ("bad awful product", Sentiment::Negative),
/// ]);
///
/// let scores = classifier.classify("good product").unwrap();
/// assert!(scores.positive > scores.negative);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier<T = WordTokenizer> {
    tokenizer: T,
    sentences: [u64; 2],
    words: HashMap<String, WordFrequency>,
    totals: [u64; 2],
}

impl Classifier<WordTokenizer> {
    /// Create an empty classifier using the default [`WordTokenizer`]
    pub fn new() -> Self {
        Self::with_tokenizer(WordTokenizer)
    }
}

impl Default for Classifier<WordTokenizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer> Classifier<T> {
    /// Create an empty classifier with a specific tokenizer
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self {
            tokenizer,
            sentences: [0; 2],
            words: HashMap::new(),
            totals: [0; 2],
        }
    }

    /// The tokenizer used for both training and scoring
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Accumulate statistics from labeled sentences
    ///
    /// Not idempotent: training the same examples twice doubles every count.
    pub fn train<I, S>(&mut self, examples: I)
    where
        I: IntoIterator<Item = (S, Sentiment)>,
        S: AsRef<str>,
    {
        for (sentence, class) in examples {
            self.train_one(sentence.as_ref(), class);
        }
    }

    /// Accumulate statistics from sentences with free-form label strings
    ///
    /// Every label is validated before anything is counted; if one is not a
    /// recognized class the classifier is left untouched.
    pub fn train_labeled<I, S, L>(&mut self, examples: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, L)>,
        S: AsRef<str>,
        L: AsRef<str>,
    {
        let validated = examples
            .into_iter()
            .map(|(sentence, label)| Ok((sentence, label.as_ref().parse::<Sentiment>()?)))
            .collect::<Result<Vec<_>>>()?;

        self.train(validated);
        Ok(())
    }

    fn train_one(&mut self, sentence: &str, class: Sentiment) {
        self.sentences[class.index()] += 1;

        for token in self.tokenizer.tokenize(sentence) {
            self.words
                .entry(token)
                .or_insert_with_key(|word| WordFrequency::new(word.clone()))
                .increment(class);
            self.totals[class.index()] += 1;
        }
    }

    /// Share of training sentences labeled `class`
    ///
    /// Fails with [`ClassifierError::InvalidState`] before any training.
    pub fn prior(&self, class: Sentiment) -> Result<f64> {
        let total = self.total_sentences();
        if total == 0 {
            return Err(ClassifierError::InvalidState);
        }
        Ok(self.sentence_count(class) as f64 / total as f64)
    }

    /// Number of word occurrences seen in `selector`'s sentences
    ///
    /// Repeated words count every time. [`ClassSelector::All`] (or `None`)
    /// gives the grand total across both classes.
    pub fn total_word_count(&self, selector: impl Into<ClassSelector>) -> u64 {
        match selector.into() {
            ClassSelector::Class(class) => self.totals[class.index()],
            ClassSelector::All => self.totals.iter().sum(),
        }
    }

    /// Same as [`Classifier::total_word_count`] but recomputed from the
    /// frequency table instead of the cached totals
    pub fn scan_word_count(&self, selector: impl Into<ClassSelector>) -> u64 {
        let (positive, negative) = self.words.values().fold((0, 0), |(p, n), wf| {
            (p + wf.count(Sentiment::Positive), n + wf.count(Sentiment::Negative))
        });

        match selector.into() {
            ClassSelector::Class(Sentiment::Positive) => positive,
            ClassSelector::Class(Sentiment::Negative) => negative,
            ClassSelector::All => positive + negative,
        }
    }

    /// Unnormalized log-probability of a token sequence under `class`
    ///
    /// Tokens are not deduplicated. Unknown tokens contribute the smoothed
    /// zero-count term. A class with no training sentences has a prior of
    /// zero and scores negative infinity.
    pub fn log_likelihood<S: AsRef<str>>(&self, tokens: &[S], class: Sentiment) -> Result<f64> {
        let mut score = self.prior(class)?.ln();

        let denominator = (self.total_word_count(class) + 2 * ALPHA) as f64;
        for token in tokens {
            let count = self
                .words
                .get(token.as_ref())
                .map_or(0, |wf| wf.count(class));
            score += ((count + ALPHA) as f64 / denominator).ln();
        }

        Ok(score)
    }

    /// Score a sentence under both classes
    pub fn classify(&self, sentence: &str) -> Result<ClassScores> {
        let tokens = self.tokenizer.tokenize(sentence);
        Ok(ClassScores::new(
            self.log_likelihood(tokens.as_slice(), Sentiment::Positive)?,
            self.log_likelihood(tokens.as_slice(), Sentiment::Negative)?,
        ))
    }

    /// Number of training sentences labeled `class`
    pub fn sentence_count(&self, class: Sentiment) -> u64 {
        self.sentences[class.index()]
    }

    /// Number of training sentences across both classes
    pub fn total_sentences(&self) -> u64 {
        self.sentences.iter().sum()
    }

    /// Number of distinct words seen during training
    pub fn vocabulary_size(&self) -> usize {
        self.words.len()
    }

    /// Whether nothing has been trained yet
    pub fn is_empty(&self) -> bool {
        self.total_sentences() == 0
    }

    /// Look up the counts of one word
    pub fn word(&self, word: &str) -> Option<&WordFrequency> {
        self.words.get(word)
    }

    /// Iterate over every known word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &WordFrequency> {
        self.words.values()
    }

    /// The `n` words occurring most often in `class`
    ///
    /// Words never seen in `class` are excluded; equal counts are ordered
    /// alphabetically.
    pub fn top_words(&self, class: Sentiment, n: usize) -> Vec<&WordFrequency> {
        let mut ranked: Vec<&WordFrequency> =
            self.words.values().filter(|wf| wf.count(class) > 0).collect();

        ranked.sort_by(|a, b| {
            b.count(class)
                .cmp(&a.count(class))
                .then_with(|| a.word().cmp(b.word()))
        });
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::WhitespaceTokenizer;

    const EPSILON: f64 = 1e-12;

    fn sample_classifier() -> Classifier {
        let mut classifier = Classifier::new();
        classifier.train([
            ("good good product", Sentiment::Positive),
            ("bad awful product", Sentiment::Negative),
        ]);
        classifier
    }

    #[test]
    fn test_new_classifier_is_empty() {
        let classifier = Classifier::new();
        assert!(classifier.is_empty());
        assert_eq!(classifier.vocabulary_size(), 0);
        assert_eq!(classifier.total_word_count(ClassSelector::All), 0);
    }

    #[test]
    fn test_training_counts() {
        let classifier = sample_classifier();

        assert_eq!(classifier.total_word_count(Sentiment::Positive), 3);
        assert_eq!(classifier.total_word_count(Sentiment::Negative), 3);
        assert_eq!(classifier.total_word_count(None), 6);

        let product = classifier.word("product").unwrap();
        assert_eq!(product.count(Sentiment::Positive), 1);
        assert_eq!(product.count(Sentiment::Negative), 1);

        let good = classifier.word("good").unwrap();
        assert_eq!(good.count(Sentiment::Positive), 2);
        assert_eq!(good.count(Sentiment::Negative), 0);

        assert_eq!(classifier.sentence_count(Sentiment::Positive), 1);
        assert_eq!(classifier.sentence_count(Sentiment::Negative), 1);
        assert_eq!(classifier.vocabulary_size(), 4);
    }

    #[test]
    fn test_prior_requires_training() {
        let classifier = Classifier::new();
        assert_eq!(classifier.prior(Sentiment::Positive), Err(ClassifierError::InvalidState));
        assert!(matches!(
            classifier.classify("anything"),
            Err(ClassifierError::InvalidState)
        ));
    }

    #[test]
    fn test_prior() {
        let mut classifier = sample_classifier();
        classifier.train([("great", Sentiment::Positive)]);

        let pos = classifier.prior(Sentiment::Positive).unwrap();
        let neg = classifier.prior(Sentiment::Negative).unwrap();
        assert!((pos - 2.0 / 3.0).abs() < EPSILON);
        assert!((neg - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_known_words_favour_their_class() {
        let classifier = sample_classifier();
        let scores = classifier.classify("good product").unwrap();
        assert!(scores.positive > scores.negative);

        // ln(1/2) + ln(3/5) + ln(2/5) vs ln(1/2) + ln(1/5) + ln(2/5)
        let expected_pos = 0.5f64.ln() + (3.0f64 / 5.0).ln() + (2.0f64 / 5.0).ln();
        let expected_neg = 0.5f64.ln() + (1.0f64 / 5.0).ln() + (2.0f64 / 5.0).ln();
        assert!((scores.positive - expected_pos).abs() < EPSILON);
        assert!((scores.negative - expected_neg).abs() < EPSILON);
    }

    #[test]
    fn test_unknown_words_follow_closed_form() {
        let mut classifier = sample_classifier();
        classifier.train([("great", Sentiment::Positive)]);

        let scores = classifier.classify("zzz qqq").unwrap();

        // positive: 2 sentences, 4 words; negative: 1 sentence, 3 words
        let expected_pos = (2.0f64 / 3.0).ln() + 2.0 * (1.0f64 / 6.0).ln();
        let expected_neg = (1.0f64 / 3.0).ln() + 2.0 * (1.0f64 / 5.0).ln();
        assert!((scores.positive - expected_pos).abs() < EPSILON);
        assert!((scores.negative - expected_neg).abs() < EPSILON);
    }

    #[test]
    fn test_empty_sentence_scores_log_prior() {
        let classifier = sample_classifier();
        let scores = classifier.classify("").unwrap();
        assert!((scores.positive - 0.5f64.ln()).abs() < EPSILON);
        assert!((scores.negative - 0.5f64.ln()).abs() < EPSILON);
    }

    #[test]
    fn test_repeated_tokens_are_counted_each_time() {
        let classifier = sample_classifier();
        let once = classifier.log_likelihood(&["good"], Sentiment::Positive).unwrap();
        let twice = classifier
            .log_likelihood(&["good", "good"], Sentiment::Positive)
            .unwrap();
        let term = (3.0f64 / 5.0).ln();
        assert!((twice - once - term).abs() < EPSILON);
    }

    #[test]
    fn test_class_without_sentences_scores_negative_infinity() {
        let mut classifier = Classifier::new();
        classifier.train([("lovely", Sentiment::Positive)]);

        let scores = classifier.classify("lovely").unwrap();
        assert!(scores.positive.is_finite());
        assert_eq!(scores.negative, f64::NEG_INFINITY);
    }

    #[test]
    fn test_train_labeled_rejects_unknown_label_atomically() {
        let mut classifier = sample_classifier();
        let before = classifier.clone();

        let result = classifier.train_labeled([
            ("really nice", "positive"),
            ("meh", "neutral"),
        ]);

        assert_eq!(result, Err(ClassifierError::UnrecognizedClass("neutral".to_string())));
        assert_eq!(classifier, before);
    }

    #[test]
    fn test_train_labeled_accepts_known_labels() {
        let mut classifier = Classifier::new();
        classifier
            .train_labeled([("nice", "Positive"), ("awful", "NEGATIVE")])
            .unwrap();
        assert_eq!(classifier.sentence_count(Sentiment::Positive), 1);
        assert_eq!(classifier.sentence_count(Sentiment::Negative), 1);
    }

    #[test]
    fn test_tokenizer_choice_changes_vocabulary() {
        let mut words = Classifier::new();
        let mut raw = Classifier::with_tokenizer(WhitespaceTokenizer);
        let examples = [("Great great!", Sentiment::Positive)];
        words.train(examples);
        raw.train(examples);

        assert_eq!(words.vocabulary_size(), 1);
        assert_eq!(raw.vocabulary_size(), 2);
    }

    #[test]
    fn test_top_words() {
        let mut classifier = sample_classifier();
        classifier.train([("awesome product", Sentiment::Positive)]);

        let top: Vec<&str> = classifier
            .top_words(Sentiment::Positive, 2)
            .into_iter()
            .map(WordFrequency::word)
            .collect();
        assert_eq!(top, vec!["good", "product"]);

        let neg: Vec<&str> = classifier
            .top_words(Sentiment::Negative, 10)
            .into_iter()
            .map(WordFrequency::word)
            .collect();
        assert_eq!(neg, vec!["awful", "bad", "product"]);
    }

    #[test]
    fn test_training_twice_doubles_counts() {
        let mut classifier = sample_classifier();
        let once = classifier.clone();
        classifier.train([
            ("good good product", Sentiment::Positive),
            ("bad awful product", Sentiment::Negative),
        ]);

        for wf in once.words() {
            let doubled = classifier.word(wf.word()).unwrap();
            for class in Sentiment::ALL {
                assert_eq!(doubled.count(class), 2 * wf.count(class));
            }
        }
        for class in Sentiment::ALL {
            assert_eq!(classifier.sentence_count(class), 2 * once.sentence_count(class));
            assert_eq!(classifier.prior(class), once.prior(class));
        }
    }
}
