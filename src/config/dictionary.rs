//! Dictionary configuration module.
//!
//! Where the word list comes from and how its lines are turned into words.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path to a word list with one word per line. When unset, or when the
    /// file cannot be read, the built-in default vocabulary is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Skip empty lines instead of inserting the empty word
    pub skip_blank_lines: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            skip_blank_lines: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary.path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
