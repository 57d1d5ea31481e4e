//! Dictionary error module.
//!
//! Errors raised while reading a word list from disk. The loader turns these
//! into a fallback to the default vocabulary, so they rarely reach the user.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a word list.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word list does not exist.
    #[error("Word list not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The word list exists but could not be read.
    #[error("Failed to read word list {}: {}", .path.display(), .source)]
    Read {
        /// Path of the word list
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}
