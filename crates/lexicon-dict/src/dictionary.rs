// Dictionary handle: owns the word index and its query options.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lexicon_trie::Trie;

use crate::DictError;
use crate::loader::{LoadStats, load_words};

/// Default bound on the number of completions returned per query.
pub const DEFAULT_MAX_COMPLETIONS: usize = 10;

/// Top-level handle owning the word index together with its query options.
///
/// Built once at startup by loading a word list, then queried read-only.
/// Interleaving inserts and queries is allowed; there is no closed state.
#[derive(Debug)]
pub struct Dictionary {
    trie: Trie,
    /// Bound applied by [`complete`](Dictionary::complete).
    max_completions: usize,
}

impl Dictionary {
    /// Create an empty dictionary with the default completion bound.
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            max_completions: DEFAULT_MAX_COMPLETIONS,
        }
    }

    /// Insert one word. Empty input is a no-op; duplicates change nothing.
    pub fn insert(&mut self, word: &str) {
        self.trie.insert(word);
    }

    /// Exact membership test. Empty input returns `false`.
    pub fn lookup(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Completions of `prefix`, lexicographic, bounded by the configured
    /// maximum (default [`DEFAULT_MAX_COMPLETIONS`]).
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.trie.complete(prefix, self.max_completions)
    }

    /// Completions of `prefix` with an explicit bound.
    pub fn complete_with_limit(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.trie.complete(prefix, limit)
    }

    /// Change the bound applied by [`complete`](Dictionary::complete).
    pub fn set_max_completions(&mut self, n: usize) {
        self.max_completions = n;
    }

    /// The bound applied by [`complete`](Dictionary::complete).
    pub fn max_completions(&self) -> usize {
        self.max_completions
    }

    /// Number of distinct words loaded.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether no words have been loaded.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Load newline-delimited words from `reader`. See [`load_words`].
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<LoadStats, DictError> {
        load_words(&mut self.trie, reader)
    }

    /// Load newline-delimited words from the file at `path`.
    ///
    /// An open failure is [`DictError::WordListUnavailable`]; the dictionary
    /// is left unchanged in that case.
    pub fn load_path(&mut self, path: &Path) -> Result<LoadStats, DictError> {
        let file = File::open(path).map_err(|source| DictError::WordListUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        self.load(BufReader::new(file))
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn loaded(words: &str) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.load(Cursor::new(words)).unwrap();
        dict
    }

    #[test]
    fn lookup_after_load() {
        let dict = loaded("cat\ncar\ncart\ndog\n");
        assert!(dict.lookup("car"));
        assert!(!dict.lookup("ca"));
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn complete_uses_the_default_bound() {
        let mut dict = Dictionary::new();
        for i in 0..15 {
            dict.insert(&format!("alpha{i:02}"));
        }
        assert_eq!(dict.max_completions(), DEFAULT_MAX_COMPLETIONS);
        assert_eq!(dict.complete("a").len(), 10);
    }

    #[test]
    fn completion_bound_is_configurable() {
        let mut dict = loaded("cat\ncar\ncart\n");
        dict.set_max_completions(2);
        assert_eq!(dict.complete("ca"), vec!["car", "cart"]);
        assert_eq!(dict.complete_with_limit("ca", 10), vec!["car", "cart", "cat"]);
    }

    #[test]
    fn empty_queries_degrade_quietly() {
        let dict = loaded("cat\n");
        assert!(!dict.lookup(""));
        assert!(dict.complete("").is_empty());
        assert!(dict.complete("z").is_empty());
    }

    #[test]
    fn load_path_failure_leaves_dictionary_unchanged() {
        let mut dict = loaded("cat\n");
        let err = dict
            .load_path(Path::new("/nonexistent/word/list.txt"))
            .unwrap_err();
        assert!(matches!(err, DictError::WordListUnavailable { .. }));
        assert_eq!(dict.len(), 1);
        assert!(dict.lookup("cat"));
    }

    #[test]
    fn inserts_and_queries_interleave() {
        let mut dict = Dictionary::new();
        dict.insert("car");
        assert!(dict.lookup("car"));
        dict.insert("cart");
        assert_eq!(dict.complete("car"), vec!["car", "cart"]);
    }
}
