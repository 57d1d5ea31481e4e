//! Node implementation for the Niihau Trie.
//!
//! This module provides the `TrieNode` structure used by [`super::NiihauTrie`].
//! Nodes are the fundamental building blocks of the trie: each one owns its
//! children, keyed by a single character, and records whether the path from
//! the root down to it spells a complete word.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// A node in the Niihau Trie.
///
/// Children are kept in a `BTreeMap` so that every enumeration walks them in
/// ascending character order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Map of characters to child nodes
    children: BTreeMap<char, TrieNode>,

    /// Whether this node represents the end of a word
    is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminal trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the path ending at this node is a stored word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Inserts `word` into the subtree rooted at this node.
    ///
    /// Missing nodes along the path are created. An empty `word` marks this
    /// node itself as terminal. Existing terminal flags are never cleared.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` if it already was.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = self;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        is_new
    }

    /// Returns the node reached by following `prefix` character by character
    /// from this node.
    ///
    /// An empty `prefix` resolves to this node. `None` is returned as soon as
    /// a character along the path has no matching child.
    pub fn prefix_end_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(self, |node, c| node.children.get(&c))
    }

    /// General membership test built on [`TrieNode::prefix_end_node`].
    ///
    /// With `match_prefix` set, any existing path matches. Otherwise the path
    /// must also end on a terminal node.
    pub fn lookup(&self, word: &str, match_prefix: bool) -> bool {
        match self.prefix_end_node(word) {
            Some(node) => match_prefix || node.is_terminal,
            None => false,
        }
    }

    /// Exact word match, equivalent to `lookup(word, false)`.
    pub fn contains_word(&self, word: &str) -> bool {
        self.lookup(word, false)
    }

    /// Collects every word stored in this subtree.
    ///
    /// Each result is `prefix` followed by the characters on the path from
    /// this node to a terminal node. Words come out in preorder with
    /// children visited in ascending character order, so a word always
    /// precedes its extensions.
    pub fn collect_words(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut buffer = String::from(prefix);
        self.collect_into(&mut buffer, &mut words);
        words
    }

    fn collect_into(&self, buffer: &mut String, words: &mut Vec<String>) {
        if self.is_terminal {
            words.push(buffer.clone());
        }

        for (&c, child) in &self.children {
            buffer.push(c);
            child.collect_into(buffer, words);
            buffer.pop();
        }
    }

    /// Lazy counterpart of [`TrieNode::collect_words`].
    ///
    /// Yields the same words in the same order without building the whole
    /// list up front.
    pub fn words(&self, prefix: &str) -> Words<'_> {
        Words::new(self, prefix)
    }

    /// Counts the terminal nodes in this subtree.
    pub fn count_words(&self) -> usize {
        let own = usize::from(self.is_terminal);
        own + self
            .children
            .values()
            .map(TrieNode::count_words)
            .sum::<usize>()
    }
}

/// One level of the explicit traversal stack used by [`Words`].
#[derive(Debug)]
struct Frame<'a> {
    children: btree_map::Iter<'a, char, TrieNode>,
    /// Length of the word buffer at this node's depth
    depth_len: usize,
}

/// Iterator over the words of a subtree, produced by [`TrieNode::words`].
///
/// Walks the subtree depth-first with an explicit stack and a single shared
/// buffer, cloning the buffer only when it reaches a terminal node.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<Frame<'a>>,
    buffer: String,
    pending_root: bool,
}

impl<'a> Words<'a> {
    fn new(start: &'a TrieNode, prefix: &str) -> Self {
        let buffer = String::from(prefix);
        let stack = vec![Frame {
            children: start.children.iter(),
            depth_len: buffer.len(),
        }];

        Self {
            stack,
            buffer,
            pending_root: start.is_terminal,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.pending_root {
            self.pending_root = false;
            return Some(self.buffer.clone());
        }

        loop {
            let frame = self.stack.last_mut()?;
            let depth_len = frame.depth_len;

            match frame.children.next() {
                Some((&c, child)) => {
                    self.buffer.truncate(depth_len);
                    self.buffer.push(c);
                    self.stack.push(Frame {
                        children: child.children.iter(),
                        depth_len: self.buffer.len(),
                    });
                    if child.is_terminal {
                        return Some(self.buffer.clone());
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Words<'_> {}
