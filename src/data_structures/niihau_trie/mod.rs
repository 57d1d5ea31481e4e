//! Niihau Trie Implementation
//!
//! This module provides a prefix tree over a growing vocabulary of words with
//! exact-word lookup, prefix tests and autocomplete. Every operation descends
//! from a single root node that represents the empty prefix.
//!
//! Queries that find nothing return `None` or `false`; inserting never fails.

mod node;

pub use node::{TrieNode, Words};

/// Niihau Trie is a prefix tree for word lookup and autocomplete.
///
/// Key features:
/// * Exact-word lookup and prefix existence tests in time proportional to the query
/// * Autocomplete, eager ([`NiihauTrie::auto_complete`]) or lazy ([`NiihauTrie::completions`])
/// * Deterministic output: words are returned in ascending character order
///
/// The trie only grows. Mutation requires `&mut self`; callers that need to
/// share a trie across threads while inserting must synchronize externally.
#[derive(Debug, Default, Clone)]
pub struct NiihauTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct words stored
    len: usize,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word into the trie.
    ///
    /// Any string is accepted, including the empty string, which marks the
    /// root itself as a word.
    ///
    /// # Returns
    ///
    /// `true` if the word was newly inserted, `false` if it was already stored.
    pub fn insert<K>(&mut self, word: K) -> bool
    where
        K: AsRef<str>,
    {
        let is_new = self.root.insert(word.as_ref());
        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Checks whether `prefix` exists in the trie, either as a word or as the
    /// beginning of one. The empty prefix always exists.
    pub fn is_prefix<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        self.root.lookup(prefix.as_ref(), true)
    }

    /// Looks up a word in the trie.
    ///
    /// # Returns
    ///
    /// * `Some(word)` - the caller's word handed back, if it is stored.
    /// * `None` - if it is not stored (including when it is only a prefix).
    pub fn lookup<K>(&self, word: K) -> Option<K>
    where
        K: AsRef<str>,
    {
        self.root.lookup(word.as_ref(), false).then_some(word)
    }

    /// Checks if a word is stored in the trie.
    pub fn contains<K>(&self, word: K) -> bool
    where
        K: AsRef<str>,
    {
        self.lookup(word).is_some()
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// # Returns
    ///
    /// * `Some(words)` - matching words in ascending character order.
    /// * `None` - if no stored word starts with `prefix`.
    pub fn auto_complete<P>(&self, prefix: P) -> Option<Vec<String>>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        self.root
            .prefix_end_node(prefix)
            .map(|end| end.collect_words(prefix))
    }

    /// Lazy variant of [`NiihauTrie::auto_complete`] with the same `None`
    /// contract and the same order.
    pub fn completions<P>(&self, prefix: P) -> Option<Words<'_>>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        self.root
            .prefix_end_node(prefix)
            .map(|end| end.words(prefix))
    }

    /// Returns every stored word in ascending character order.
    pub fn all_words(&self) -> Vec<String> {
        self.root.collect_words("")
    }

    /// Lazily iterates over every stored word in ascending character order.
    pub fn words(&self) -> Words<'_> {
        self.root.words("")
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the root node, for read-only traversal.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}

impl<S> Extend<S> for NiihauTrie
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S> FromIterator<S> for NiihauTrie
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const DEFAULT_WORDS: [&str; 6] = ["Dopamine", "Adrenalin", "Endorphine", "Advil", "End", "Dope"];

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = NiihauTrie::new();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);

        // Test insertion
        assert!(trie.insert("hello"));
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());

        // Test retrieval
        assert_eq!(trie.lookup("hello"), Some("hello"));
        assert!(trie.contains("hello"));
        assert_eq!(trie.lookup("nonexistent"), None);
        assert!(!trie.contains("nonexistent"));

        // No case folding
        assert_eq!(trie.lookup("HELLO"), None);

        // Re-insert
        assert!(!trie.insert("hello"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_default_vocabulary_scenario() {
        let trie: NiihauTrie = DEFAULT_WORDS.iter().collect();

        assert_eq!(trie.all_words().len(), 6);
        assert_eq!(trie.lookup("End"), Some("End"));
        assert_eq!(trie.lookup("Endo"), None);
        assert!(trie.is_prefix("Endo"));
        assert_eq!(
            trie.auto_complete("End"),
            Some(vec!["End".to_string(), "Endorphine".to_string()])
        );
        assert_eq!(trie.auto_complete("Zz"), None);
        assert!(trie.is_prefix("Dop"));

        let dop: BTreeSet<String> = trie.auto_complete("Dop").unwrap().into_iter().collect();
        let expected: BTreeSet<String> = ["Dopamine", "Dope"].iter().map(|s| s.to_string()).collect();
        assert_eq!(dop, expected);
    }

    #[test]
    fn test_empty_trie() {
        let trie = NiihauTrie::new();
        assert!(trie.is_prefix(""));
        assert_eq!(trie.lookup(""), None);
        assert!(trie.all_words().is_empty());
        assert_eq!(trie.auto_complete(""), Some(Vec::new()));
        assert_eq!(trie.words().count(), 0);
    }

    #[test]
    fn test_empty_word_is_distinct_from_not_found() {
        let mut trie = NiihauTrie::new();
        assert_eq!(trie.lookup(""), None);
        assert!(trie.insert(""));
        assert_eq!(trie.lookup(""), Some(""));
        assert_eq!(trie.all_words(), vec![String::new()]);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_lookup_hands_back_owned_word() {
        let trie: NiihauTrie = ["Advil"].into_iter().collect();
        let word = String::from("Advil");
        assert_eq!(trie.lookup(word), Some(String::from("Advil")));
    }

    #[test]
    fn test_trie_prefix_search() {
        let mut trie = NiihauTrie::new();
        trie.extend(["apple", "application", "apply", "banana"]);

        let results = trie.auto_complete("app").unwrap();
        assert_eq!(results, vec!["apple", "application", "apply"]);

        // Prefix equal to a whole word still completes to its extensions
        let results = trie.auto_complete("apple").unwrap();
        assert_eq!(results, vec!["apple"]);

        assert_eq!(trie.auto_complete("orange"), None);
    }

    #[test]
    fn test_completions_matches_auto_complete() {
        let trie: NiihauTrie = DEFAULT_WORDS.iter().collect();
        for prefix in ["", "A", "Ad", "End", "Dop", "Zz"] {
            let lazy = trie.completions(prefix).map(|words| words.collect::<Vec<_>>());
            assert_eq!(lazy, trie.auto_complete(prefix), "prefix {prefix:?}");
        }
    }

    #[test]
    fn test_completions_can_stop_early() {
        let trie: NiihauTrie = DEFAULT_WORDS.iter().collect();
        let first_two: Vec<String> = trie.completions("").unwrap().take(2).collect();
        assert_eq!(first_two, vec!["Adrenalin", "Advil"]);
    }

    #[test]
    fn test_len_tracks_distinct_words() {
        let mut trie = NiihauTrie::new();
        trie.extend(["a", "ab", "a", "abc", "ab"]);
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.len(), trie.root().count_words());
    }
}
