//! Polarity CLI library.
//!
//! This library provides the pieces around the classifier that the
//! `polarity` binary wires together: configuration, corpus loading,
//! command execution, the interactive REPL and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use corpus::Corpus;
pub use error::{CliError, Result};
pub use output::Formatter;
