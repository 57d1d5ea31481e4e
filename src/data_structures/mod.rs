//! Data structures for Niihau.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Total operations: absence is reported through `Option`, not errors
//! - Deterministic iteration order

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::{NiihauTrie, TrieNode, Words};
