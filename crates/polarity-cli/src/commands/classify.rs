//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::Result;
use crate::output::Formatter;
use polarity_domain::{Classifier, DecisionPolicy, Sentiment, Tokenizer};

/// Execute the classify command.
pub fn execute_classify<T: Tokenizer>(
    args: ClassifyArgs,
    classifier: &Classifier<T>,
    policy: &DecisionPolicy,
    formatter: &Formatter,
) -> Result<Sentiment> {
    let scores = classifier.classify(&args.text())?;
    let verdict = policy.decide(&scores);

    println!("{}", formatter.format_verdict(verdict, &scores)?);

    Ok(verdict)
}
