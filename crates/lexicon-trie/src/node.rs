// Trie node: per-character child map and terminal flag.

use hashbrown::HashMap;

/// A single node in the prefix tree.
///
/// Every node is exclusively owned by its parent (the root by the [`Trie`]),
/// so dropping a node drops its whole subtree. There are no back references
/// and no sharing between branches.
///
/// [`Trie`]: crate::Trie
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child nodes keyed by the next character on the path.
    children: HashMap<char, TrieNode>,
    /// True iff the path from the root to this node spells an inserted word.
    terminal: bool,
}

impl TrieNode {
    /// The child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// The child reached by `c`, created empty if missing.
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Whether the path from the root to this node spells a complete word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Mark this node terminal. Returns `true` if the flag was newly set,
    /// `false` if the word had already been inserted.
    pub(crate) fn set_terminal(&mut self) -> bool {
        let newly = !self.terminal;
        self.terminal = true;
        newly
    }

    /// Detach and return the child map, leaving this node childless.
    pub(crate) fn take_children(&mut self) -> HashMap<char, TrieNode> {
        std::mem::take(&mut self.children)
    }

    /// Children in ascending character order.
    ///
    /// The map itself iterates in an arbitrary per-process order; sorting
    /// here is what makes completion output lexicographic and reproducible.
    pub(crate) fn sorted_children(&self) -> Vec<(char, &TrieNode)> {
        let mut entries: Vec<(char, &TrieNode)> =
            self.children.iter().map(|(&c, node)| (c, node)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }
}
