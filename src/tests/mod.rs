//! Test modules for Niihau.
//!
//! Crate-wide suites that exercise several modules together:
//! - Property-based tests of the trie using proptest
//! - Configuration loading and validation
//! - Error types and reporting
//! - Word list loading and the interactive session
