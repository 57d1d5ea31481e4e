//! Word list loading.
//!
//! Reads a vocabulary from a plain text file with one word per line and
//! builds a [`NiihauTrie`] from it. When no file is configured, or the file
//! cannot be read, a small built-in vocabulary is used instead.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::DictionaryConfig;
use crate::data_structures::NiihauTrie;
use crate::error::dictionary::DictionaryError;

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Vocabulary used when no word list is available.
pub const DEFAULT_WORDS: [&str; 6] = ["Dopamine", "Adrenalin", "Endorphine", "Advil", "End", "Dope"];

/// Where a loaded vocabulary came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Read from a word list on disk
    File(PathBuf),
    /// Built-in [`DEFAULT_WORDS`], with the reason the fallback was taken
    Default(String),
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Default(_) => write!(f, "default vocabulary"),
        }
    }
}

/// A list of words together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Words in file order, duplicates included
    pub words: Vec<String>,
    /// Where the words came from
    pub source: WordSource,
}

impl Vocabulary {
    /// The built-in vocabulary.
    pub fn default_words(reason: impl Into<String>) -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            source: WordSource::Default(reason.into()),
        }
    }
}

/// Reads words from any buffered reader, one per line.
///
/// Line terminators (`\n` or `\r\n`) are stripped. When `skip_blank_lines`
/// is false an empty line yields the empty word.
pub fn read_words<R: BufRead>(reader: R, skip_blank_lines: bool) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if skip_blank_lines && line.is_empty() {
            continue;
        }
        words.push(line);
    }
    Ok(words)
}

/// Reads a word list file, one word per line.
///
/// # Returns
///
/// * `Ok(words)` - the words in file order
/// * `Err(DictionaryError)` - if the file is missing or unreadable
pub fn read_word_list(path: &Path, skip_blank_lines: bool) -> DictionaryResult<Vec<String>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DictionaryError::NotFound(path.to_path_buf()),
        _ => DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    read_words(BufReader::new(file), skip_blank_lines).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the configured vocabulary, falling back to [`DEFAULT_WORDS`].
///
/// This never fails: a missing or unreadable word list is logged and
/// replaced by the default vocabulary.
pub fn load_vocabulary(config: &DictionaryConfig) -> Vocabulary {
    let Some(path) = &config.path else {
        warn!(words = ?DEFAULT_WORDS, "No path given, using default set of words");
        return Vocabulary::default_words("no word list configured");
    };

    match read_word_list(path, config.skip_blank_lines) {
        Ok(words) => {
            debug!(path = %path.display(), count = words.len(), "Read word list");
            Vocabulary {
                words,
                source: WordSource::File(path.clone()),
            }
        }
        Err(e) => {
            warn!(error = %e, words = ?DEFAULT_WORDS, "Could not read word list, using default set of words");
            Vocabulary::default_words(e.to_string())
        }
    }
}

/// Builds a trie holding every word of `vocabulary`.
pub fn build_trie(vocabulary: &Vocabulary) -> NiihauTrie {
    let trie: NiihauTrie = vocabulary.words.iter().collect();

    let duplicates = vocabulary.words.len() - trie.len();
    info!(
        source = %vocabulary.source,
        words = trie.len(),
        duplicates,
        "Inserted words into trie"
    );

    trie
}
