//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Polarity - Naive Bayes sentiment classifier for short reviews.
#[derive(Debug, Parser)]
#[command(name = "polarity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Labeled corpus to train on (sentence<TAB>0|1 per line)
    #[arg(long, global = true, env = "POLARITY_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Score margin below which a verdict defaults to positive
    #[arg(short, long, global = true)]
    pub threshold: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (label only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a single sentence
    Classify(ClassifyArgs),

    /// Show corpus and vocabulary statistics
    Stats(StatsArgs),

    /// Inspect or initialize the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Sentence to classify (multiple words are joined with spaces)
    #[arg(required = true)]
    pub sentence: Vec<String>,
}

impl ClassifyArgs {
    /// The sentence as a single string.
    pub fn text(&self) -> String {
        self.sentence.join(" ")
    }
}

/// Arguments for the stats command.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Number of top words to list per class
    #[arg(short = 'n', long, default_value = "10")]
    pub top: usize,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
