//! Session configuration module.
//!
//! Settings for the interactive autocomplete loop and the one-shot commands
//! that share its output format.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default prompt shown before each prefix is read.
pub const DEFAULT_PROMPT: &str = "Enter a prefix to auto complete (ctrl-c to quit): ";

/// How autocomplete results are rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable sentence
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Interactive session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Prompt printed before reading each prefix
    pub prompt: String,

    /// Refuse to start the interactive loop when stdin is not a terminal
    pub require_terminal: bool,

    /// Maximum number of completions printed per prefix (0 = unlimited)
    pub max_results: usize,

    /// Output format for results
    pub format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            require_terminal: true,
            max_results: 0,
            format: OutputFormat::default(),
        }
    }
}

impl SessionConfig {
    /// The result limit as an `Option`, `None` meaning unlimited.
    pub fn result_limit(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prompt.is_empty() {
            return Err(ConfigError::ValidationError(
                "session.prompt cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
