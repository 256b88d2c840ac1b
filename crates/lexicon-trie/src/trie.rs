// Trie: insert, exact search, bounded prefix completion.

use crate::node::TrieNode;
use crate::walk::Completions;

/// A character-indexed prefix tree over inserted words.
///
/// Built by repeated [`insert`](Trie::insert) calls and queried with
/// [`contains`](Trie::contains) and [`complete`](Trie::complete); the two
/// phases may be interleaved freely. Queries never fail: an unknown word or
/// prefix is an ordinary `false` / empty result.
///
/// The structure holds no interior mutability, so once building stops a
/// `Trie` can be shared across threads for unsynchronized concurrent reads.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    /// Number of distinct words inserted so far.
    word_count: usize,
}

impl Trie {
    /// Create an empty trie. The root represents the empty prefix and is
    /// never terminal, since the empty string is never inserted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one word, creating missing nodes along its path.
    ///
    /// Empty input is a no-op. Re-inserting an existing word leaves the
    /// tree observably unchanged. The word is stored verbatim: no case
    /// folding, no trimming.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }
        if node.set_terminal() {
            self.word_count += 1;
        }
    }

    /// Exact membership test.
    ///
    /// Empty input returns `false`. A word that is only a prefix of longer
    /// inserted words (no terminal node on its own path end) is absent.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        match self.node_for(word) {
            Some(node) => node.is_terminal(),
            None => false,
        }
    }

    /// Lazy iterator over all inserted words starting with `prefix`, in
    /// lexicographic order, including `prefix` itself when it is a complete
    /// word. An empty or unknown prefix yields nothing.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        Completions::new(self.node_for(prefix), prefix)
    }

    /// Up to `limit` completions of `prefix`, in lexicographic order.
    ///
    /// The walk stops as soon as `limit` words have been produced, so the
    /// bound is exact across the whole subtree, not per branch.
    pub fn complete(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.completions(prefix).take(limit).collect()
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether no words have been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Walk from the root along `s`; `None` as soon as a child is missing.
    fn node_for(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in s.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }
}

// The default drop glue recurses once per tree level, and one very long
// inserted word makes the tree arbitrarily deep. Dismantle iteratively
// instead, matching the explicit-stack discipline of the completion walk.
impl Drop for Trie {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.root.take_children().into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children().into_values());
        }
    }
}
