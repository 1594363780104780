//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use polarity_domain::{ClassScores, Classifier, Sentiment, Tokenizer};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a classification verdict with both class scores.
    pub fn format_verdict(&self, verdict: Sentiment, scores: &ClassScores) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_verdict_json(verdict, scores),
            OutputFormat::Table => Ok(self.format_verdict_table(verdict, scores)),
            OutputFormat::Quiet => Ok(verdict.as_str().to_string()),
        }
    }

    fn format_verdict_json(&self, verdict: Sentiment, scores: &ClassScores) -> Result<String> {
        let value = serde_json::json!({
            "sentiment": verdict.as_str(),
            "scores": {
                "positive": score_value(scores.positive),
                "negative": score_value(scores.negative),
            },
            "margin": score_value(scores.margin()),
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_verdict_table(&self, verdict: Sentiment, scores: &ClassScores) -> String {
        let headline = format!("> Your review is {}", self.sentiment(verdict));

        let mut builder = Builder::default();
        builder.push_record(["Class", "Log score"]);
        for class in Sentiment::ALL {
            builder.push_record([class.as_str().to_string(), format!("{:.6}", scores.get(class))]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", headline, table)
    }

    /// Format model statistics and the most frequent words per class.
    pub fn format_stats<T: Tokenizer>(
        &self,
        classifier: &Classifier<T>,
        top: usize,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_stats_json(classifier, top),
            OutputFormat::Table => Ok(self.format_stats_table(classifier, top)),
            OutputFormat::Quiet => Ok(classifier.vocabulary_size().to_string()),
        }
    }

    fn format_stats_json<T: Tokenizer>(
        &self,
        classifier: &Classifier<T>,
        top: usize,
    ) -> Result<String> {
        let classes: serde_json::Map<String, serde_json::Value> = Sentiment::ALL
            .iter()
            .map(|&class| {
                let top_words: Vec<serde_json::Value> = classifier
                    .top_words(class, top)
                    .into_iter()
                    .map(|wf| serde_json::json!({ "word": wf.word(), "count": wf.count(class) }))
                    .collect();

                (
                    class.as_str().to_string(),
                    serde_json::json!({
                        "sentences": classifier.sentence_count(class),
                        "words": classifier.total_word_count(class),
                        "prior": classifier.prior(class).ok(),
                        "top_words": top_words,
                    }),
                )
            })
            .collect();

        let value = serde_json::json!({
            "sentences": classifier.total_sentences(),
            "vocabulary": classifier.vocabulary_size(),
            "classes": classes,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_stats_table<T: Tokenizer>(&self, classifier: &Classifier<T>, top: usize) -> String {
        let mut summary = Builder::default();
        summary.push_record(["Class", "Sentences", "Words", "Prior"]);
        for class in Sentiment::ALL {
            let prior = classifier
                .prior(class)
                .map(|p| format!("{:.3}", p))
                .unwrap_or_else(|_| "-".to_string());
            summary.push_record([
                class.as_str().to_string(),
                classifier.sentence_count(class).to_string(),
                classifier.total_word_count(class).to_string(),
                prior,
            ]);
        }

        let mut summary = summary.build();
        summary
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let vocabulary = format!("Vocabulary: {} distinct words", classifier.vocabulary_size());
        let mut out = format!("{}\n{}", self.colorize(&vocabulary, "cyan"), summary);

        if top > 0 {
            let mut words = Builder::default();
            words.push_record(["Rank", "Positive", "Negative"]);
            let positive = classifier.top_words(Sentiment::Positive, top);
            let negative = classifier.top_words(Sentiment::Negative, top);

            for rank in 0..positive.len().max(negative.len()) {
                let cell = |class: Sentiment, list: &[&polarity_domain::WordFrequency]| {
                    list.get(rank)
                        .map(|wf| format!("{} ({})", wf.word(), wf.count(class)))
                        .unwrap_or_default()
                };
                words.push_record([
                    (rank + 1).to_string(),
                    cell(Sentiment::Positive, &positive),
                    cell(Sentiment::Negative, &negative),
                ]);
            }

            let mut words = words.build();
            words
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            out.push('\n');
            out.push_str(&words.to_string());
        }

        out
    }

    /// Format a sentiment label, green for positive and red for negative.
    pub fn sentiment(&self, class: Sentiment) -> String {
        match class {
            Sentiment::Positive => self.colorize(class.as_str(), "green"),
            Sentiment::Negative => self.colorize(class.as_str(), "red"),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON has no infinity, so a class that never appeared in training (score
/// `-inf`) is written as the string `"-inf"` rather than collapsing to `null`.
fn score_value(score: f64) -> serde_json::Value {
    if score.is_finite() {
        serde_json::json!(score)
    } else if score.is_nan() {
        serde_json::json!("nan")
    } else if score.is_sign_negative() {
        serde_json::json!("-inf")
    } else {
        serde_json::json!("inf")
    }
}
