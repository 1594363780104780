//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Every line that is not a built-in command is treated as a review and
//! classified against the trained model.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use polarity_domain::{Classifier, DecisionPolicy, Tokenizer};
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::PathBuf;
use tracing::debug;

const PROMPT: &str = "Enter your review: ";

/// Run the interactive REPL.
pub fn run_repl<T: Tokenizer>(
    classifier: &Classifier<T>,
    policy: &DecisionPolicy,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info(
            "Polarity REPL - Type a review to classify it, 'help' for commands, 'exit' to quit"
        )
    );
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    ReplCommand::Exit => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    ReplCommand::Help => {
                        print_help(formatter);
                    }
                    ReplCommand::Stats => match formatter.format_stats(classifier, 10) {
                        Ok(out) => println!("{}", out),
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    ReplCommand::Classify(review) => {
                        if let Err(e) = classify_line(review, classifier, policy, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand<'a> {
    Exit,
    Help,
    Stats,
    Classify(&'a str),
}

/// Parse a REPL line. Anything that is not a built-in is a review.
fn parse_repl_command(line: &str) -> ReplCommand<'_> {
    match line {
        "exit" | "quit" | "q" | ":q" => ReplCommand::Exit,
        "help" | "?" | ":help" => ReplCommand::Help,
        ":stats" => ReplCommand::Stats,
        review => ReplCommand::Classify(review),
    }
}

fn classify_line<T: Tokenizer>(
    review: &str,
    classifier: &Classifier<T>,
    policy: &DecisionPolicy,
    formatter: &Formatter,
) -> Result<()> {
    let scores = classifier.classify(review)?;
    let verdict = policy.decide(&scores);
    debug!(
        positive = scores.positive,
        negative = scores.negative,
        verdict = verdict.as_str(),
        "Classified review"
    );

    println!("{}", formatter.format_verdict(verdict, &scores)?);
    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir).map_err(CliError::Io)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <any text>        - Classify the text as a review");
    println!("  :stats            - Show corpus and vocabulary statistics");
    println!("  help, ?           - Show this help");
    println!("  exit, quit, q     - Exit REPL");
    println!();
    println!("  Scores are log-likelihoods, not probabilities; only their difference matters.");
    println!();
}
