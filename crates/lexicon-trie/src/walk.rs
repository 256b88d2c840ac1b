// Bounded depth-first completion walk.
//
// The walk keeps an explicit frame stack instead of recursing, so a caller
// taking only the first few completions pays only for the nodes actually
// visited, and stack depth stays bounded on pathologically long words.

use crate::node::TrieNode;

/// Lazy iterator over the inserted words below one prefix, produced in
/// lexicographic order.
///
/// Created by [`Trie::completions`](crate::Trie::completions). Each `next()`
/// call resumes the depth-first walk where the previous one stopped and
/// yields one complete word (the prefix concatenated with the path walked
/// below it). The prefix itself is yielded first when it is a word.
pub struct Completions<'a> {
    /// Pending frames; the lexicographically smallest unvisited child of the
    /// most recently visited node is on top.
    stack: Vec<Frame<'a>>,
    /// Path from the trie root to the most recently visited node.
    path: String,
}

struct Frame<'a> {
    node: &'a TrieNode,
    /// Byte length of `path` at the node this frame descends from.
    depth: usize,
    /// Edge label into `node`; `None` only for the prefix node itself.
    label: Option<char>,
}

impl<'a> Completions<'a> {
    /// Start a walk at `start` (the node the prefix maps to, if any).
    ///
    /// `None` or an empty prefix produces an iterator that yields nothing.
    pub(crate) fn new(start: Option<&'a TrieNode>, prefix: &str) -> Self {
        let mut stack = Vec::new();
        if let Some(node) = start {
            if !prefix.is_empty() {
                stack.push(Frame {
                    node,
                    depth: prefix.len(),
                    label: None,
                });
            }
        }
        Completions {
            stack,
            path: prefix.to_string(),
        }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(frame) = self.stack.pop() {
            // Rewind the path to where this frame branched off, then extend
            // it with the edge that leads here.
            self.path.truncate(frame.depth);
            if let Some(c) = frame.label {
                self.path.push(c);
            }
            let depth = self.path.len();
            // Push children in reverse order so the smallest pops first.
            let mut children = frame.node.sorted_children();
            while let Some((c, child)) = children.pop() {
                self.stack.push(Frame {
                    node: child,
                    depth,
                    label: Some(c),
                });
            }
            if frame.node.is_terminal() {
                return Some(self.path.clone());
            }
        }
        None
    }
}
