//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use polarity_domain::{DecisionPolicy, TokenizerKind, DEFAULT_DECISION_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Corpus file the original reviews dataset ships as.
pub const DEFAULT_CORPUS_PATH: &str = "sentiment labelled sentences/amazon_cells_labelled.txt";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Training corpus settings
    #[serde(default)]
    pub corpus: CorpusSettings,

    /// Verdict settings
    #[serde(default)]
    pub decision: DecisionSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Where training data comes from and how it is tokenized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusSettings {
    /// Path to a tab-delimited labeled corpus
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,

    /// Tokenizer policy used for training and classification
    #[serde(default)]
    pub tokenizer: TokenizerSetting,
}

/// Decision rule settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionSettings {
    /// Score margin below which a verdict defaults to positive
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Tokenizer policy as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerSetting {
    /// Case-fold and strip surrounding punctuation
    #[default]
    Word,
    /// Split on whitespace only
    Whitespace,
}

impl From<TokenizerSetting> for TokenizerKind {
    fn from(setting: TokenizerSetting) -> Self {
        match setting {
            TokenizerSetting::Word => TokenizerKind::Word,
            TokenizerSetting::Whitespace => TokenizerKind::Whitespace,
        }
    }
}

impl Config {
    /// Directory holding the config file and REPL history.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".polarity"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from a specific file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.decision.threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CliError::Config(format!(
                "decision threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        if self.corpus.path.as_os_str().is_empty() {
            return Err(CliError::Config("corpus path must not be empty".to_string()));
        }
        Ok(())
    }

    /// Decision policy described by this configuration.
    ///
    /// Call [`Config::validate`] first; an invalid threshold panics here.
    pub fn decision_policy(&self) -> DecisionPolicy {
        DecisionPolicy::new(self.decision.threshold)
    }

    /// Tokenizer described by this configuration.
    pub fn tokenizer(&self) -> TokenizerKind {
        self.corpus.tokenizer.into()
    }
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
            tokenizer: TokenizerSetting::default(),
        }
    }
}

impl Default for DecisionSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from(DEFAULT_CORPUS_PATH)
}

fn default_threshold() -> f64 {
    DEFAULT_DECISION_THRESHOLD
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}
