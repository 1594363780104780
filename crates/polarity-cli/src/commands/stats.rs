//! Stats command implementation.

use crate::cli::StatsArgs;
use crate::error::Result;
use crate::output::Formatter;
use polarity_domain::{Classifier, Tokenizer};

/// Execute the stats command.
pub fn execute_stats<T: Tokenizer>(
    args: StatsArgs,
    classifier: &Classifier<T>,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", formatter.format_stats(classifier, args.top)?);
    Ok(())
}
