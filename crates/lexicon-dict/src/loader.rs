// Word-list loader: newline-delimited words into a prefix index.

use std::io::BufRead;

use lexicon_trie::PrefixIndex;

use crate::DictError;

/// Counters from one load pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines consumed from the reader.
    pub lines: usize,
    /// Non-blank lines inserted into the index.
    pub words: usize,
}

/// Read `reader` line by line and insert every non-blank line into `index`.
///
/// Only trailing line terminators are stripped: `lines()` removes the `\n`,
/// and any `\r` left behind by CRLF input is dropped here. The remaining
/// text is inserted verbatim (no case folding, no whitespace trimming).
/// Lines that are empty after stripping are skipped.
///
/// A read error aborts the pass with [`DictError::WordListRead`]. Words
/// inserted before the failure stay in the index, so the caller can keep
/// serving a partially loaded dictionary.
pub fn load_words<I, R>(index: &mut I, reader: R) -> Result<LoadStats, DictError>
where
    I: PrefixIndex + ?Sized,
    R: BufRead,
{
    let mut stats = LoadStats { lines: 0, words: 0 };
    for line in reader.lines() {
        let line = line.map_err(|source| DictError::WordListRead {
            line: stats.lines + 1,
            source,
        })?;
        stats.lines += 1;
        let word = line.trim_end_matches('\r');
        if word.is_empty() {
            continue;
        }
        index.insert(word);
        stats.words += 1;
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufRead, Cursor};

    use lexicon_trie::{PrefixIndex, Trie};

    use super::*;
    use crate::DictError;

    #[test]
    fn loads_one_word_per_line() {
        let mut trie = Trie::new();
        let stats = load_words(&mut trie, Cursor::new("cat\ncar\ndog\n")).unwrap();
        assert_eq!(stats, LoadStats { lines: 3, words: 3 });
        assert!(trie.contains("cat"));
        assert!(trie.contains("car"));
        assert!(trie.contains("dog"));
    }

    #[test]
    fn skips_blank_lines() {
        let mut trie = Trie::new();
        let stats = load_words(&mut trie, Cursor::new("cat\n\n\ndog\n")).unwrap();
        assert_eq!(stats, LoadStats { lines: 4, words: 2 });
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn strips_carriage_returns_from_crlf_input() {
        let mut trie = Trie::new();
        load_words(&mut trie, Cursor::new("cat\r\ncar\r\n")).unwrap();
        assert!(trie.contains("cat"));
        assert!(!trie.contains("cat\r"));
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        let mut trie = Trie::new();
        load_words(&mut trie, Cursor::new("ice cream\n")).unwrap();
        assert!(trie.contains("ice cream"));
    }

    #[test]
    fn missing_final_newline_still_loads_last_word() {
        let mut trie = Trie::new();
        let stats = load_words(&mut trie, Cursor::new("cat\ndog")).unwrap();
        assert_eq!(stats.words, 2);
        assert!(trie.contains("dog"));
    }

    /// Reader that produces one good line and then an I/O error.
    struct FailAfterFirstLine {
        served: bool,
    }

    impl io::Read for FailAfterFirstLine {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            unreachable!("BufRead methods are used directly")
        }
    }

    impl BufRead for FailAfterFirstLine {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if self.served {
                Err(io::Error::other("disk gone"))
            } else {
                Ok(b"cat\n")
            }
        }

        fn consume(&mut self, amt: usize) {
            if amt > 0 {
                self.served = true;
            }
        }
    }

    #[test]
    fn read_error_keeps_words_loaded_so_far() {
        let mut trie = Trie::new();
        let err = load_words(&mut trie, FailAfterFirstLine { served: false }).unwrap_err();
        match err {
            DictError::WordListRead { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
        assert!(trie.contains("cat"));
    }

    /// Minimal stand-in index proving the loader only needs the trait.
    #[derive(Default)]
    struct VecIndex(Vec<String>);

    impl PrefixIndex for VecIndex {
        fn insert(&mut self, word: &str) {
            if !word.is_empty() && !self.0.contains(&word.to_string()) {
                self.0.push(word.to_string());
            }
        }

        fn contains(&self, word: &str) -> bool {
            self.0.iter().any(|w| w == word)
        }

        fn complete(&self, prefix: &str, limit: usize) -> Vec<String> {
            if prefix.is_empty() {
                return Vec::new();
            }
            let mut out: Vec<String> = self
                .0
                .iter()
                .filter(|w| w.starts_with(prefix))
                .cloned()
                .collect();
            out.sort();
            out.truncate(limit);
            out
        }
    }

    #[test]
    fn loader_works_against_any_prefix_index() {
        let mut index = VecIndex::default();
        load_words(&mut index, Cursor::new("cart\ncar\n")).unwrap();
        assert_eq!(index.complete("car", 10), vec!["car", "cart"]);
    }
}
