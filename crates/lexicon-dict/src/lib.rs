//! Dictionary layer for the lexicon tools.
//!
//! Wraps the [`lexicon_trie`] engine with a word-list loader and a
//! [`Dictionary`] handle that owns the index together with its query
//! options.
//!
//! # Architecture
//!
//! - [`loader`] -- newline-delimited word-list ingestion and load statistics
//! - [`dictionary`] -- the `Dictionary` handle (lookup + bounded completion)

pub mod dictionary;
pub mod loader;

pub use dictionary::{DEFAULT_MAX_COMPLETIONS, Dictionary};
pub use loader::LoadStats;

/// Error type for word-list loading.
///
/// These are the only failures in the system: queries against the
/// dictionary never error, they return `false` or an empty vec.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// The word-list file could not be opened.
    #[error("cannot open word list {}: {source}", path.display())]
    WordListUnavailable {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    /// Reading the word list failed partway through. Words inserted before
    /// the failure remain in the dictionary.
    #[error("read error on word list line {line}: {source}")]
    WordListRead { line: usize, source: std::io::Error },
}
