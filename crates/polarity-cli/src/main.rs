//! Polarity CLI - Train a Naive Bayes sentiment model and classify reviews.

use clap::Parser;
use polarity_cli::commands;
use polarity_cli::corpus;
use polarity_cli::repl;
use polarity_cli::{Cli, Command, Config, Formatter};
use polarity_domain::Sentiment;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, quiet unless RUST_LOG says otherwise)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> polarity_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, falling back to defaults if the file is unreadable
    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path).unwrap_or_else(|e| {
        warn!("Ignoring config file {}: {}", config_path.display(), e);
        Config::default()
    });

    // Command-line overrides
    if let Some(path) = cli.corpus {
        config.corpus.path = path;
    }
    if let Some(threshold) = cli.threshold {
        config.decision.threshold = threshold;
    }
    config.validate()?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Config management does not need a trained model
    if let Some(Command::Config(args)) = cli.command {
        return commands::execute_config(args, &config, &config_path, &formatter);
    }

    let classifier = corpus::train_from_file(&config.corpus.path, config.tokenizer())?;
    let policy = config.decision_policy();

    for class in Sentiment::ALL {
        if classifier.sentence_count(class) == 0 {
            let message = format!("Corpus has no {} reviews; {} scores will be -inf", class, class);
            eprintln!("{}", formatter.warning(&message));
        }
    }

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&classifier, &policy, &config, &formatter)?;
        }
        Some(Command::Classify(args)) => {
            commands::execute_classify(args, &classifier, &policy, &formatter)?;
        }
        Some(Command::Stats(args)) => {
            commands::execute_stats(args, &classifier, &formatter)?;
        }
        Some(Command::Config(_)) => unreachable!(),
    }

    Ok(())
}
