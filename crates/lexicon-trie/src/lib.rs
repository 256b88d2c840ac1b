//! Prefix tree (trie) engine for word lookup and autocomplete.
//!
//! This crate provides the core data structure behind the lexicon tools:
//! a character-indexed prefix tree supporting insertion, exact-match
//! search, and bounded prefix completion.
//!
//! # Architecture
//!
//! - [`node`] -- node representation (per-character child map + terminal flag)
//! - [`trie`] -- the tree itself: insert, exact search, completion entry points
//! - [`walk`] -- explicit-stack depth-first completion iterator

pub mod node;
pub mod trie;
pub mod walk;

pub use trie::Trie;

/// Interface the word-list loader and the query front ends program against.
///
/// Keeps the I/O layers decoupled from the concrete tree: anything that can
/// take words and answer membership/completion queries can stand in for the
/// trie (in tests, a sorted vector would do).
///
/// None of the methods fail. An unknown word or prefix is an ordinary
/// `false` / empty result, and empty input degrades the same way.
pub trait PrefixIndex {
    /// Insert one word. Empty input is a no-op. Inserting a word that is
    /// already present changes nothing.
    fn insert(&mut self, word: &str);

    /// Exact membership test. Empty input returns `false`, as does a word
    /// that is only a prefix of longer inserted words.
    fn contains(&self, word: &str) -> bool;

    /// Up to `limit` inserted words starting with `prefix`, in lexicographic
    /// order, including `prefix` itself when it is a complete word. An empty
    /// prefix, an unknown prefix, or a zero limit yields an empty vec.
    fn complete(&self, prefix: &str, limit: usize) -> Vec<String>;
}

impl PrefixIndex for Trie {
    fn insert(&mut self, word: &str) {
        Trie::insert(self, word);
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }

    fn complete(&self, prefix: &str, limit: usize) -> Vec<String> {
        Trie::complete(self, prefix, limit)
    }
}
