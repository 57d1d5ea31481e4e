//! Niihau Library
//!
//! A prefix tree (trie) over a growing vocabulary of words, offering
//! exact-word lookup, prefix tests and autocomplete, together with the pieces
//! the `niihau` binary builds on: configuration, word list loading and an
//! interactive autocomplete session.
//!
//! # Architecture
//!
//! - [`data_structures::NiihauTrie`] is the core and performs no I/O
//! - [`dictionary`] turns word lists into tries
//! - [`session`] answers prefixes read from any `BufRead`
//! - [`config`] and [`error`] carry the ambient settings and failures
//!
//! ```
//! use niihau_lib::NiihauTrie;
//!
//! let trie: NiihauTrie = ["End", "Endorphine", "Dope"].into_iter().collect();
//! assert_eq!(trie.lookup("End"), Some("End"));
//! assert!(trie.is_prefix("Endo"));
//! assert_eq!(trie.auto_complete("Zz"), None);
//! ```

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::NiihauTrie;

/// Version information for Niihau.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
