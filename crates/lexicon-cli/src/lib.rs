// lexicon-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

use lexicon_dict::Dictionary;

/// Word-list file name looked for in the standard locations.
const WORDLIST_FILE: &str = "words.txt";

/// Find a word list and load it into a [`Dictionary`].
///
/// Search order:
/// 1. `wordlist_path` argument (if provided)
/// 2. `LEXICON_WORDLIST` environment variable (a file, or a directory
///    containing `words.txt`)
/// 3. `~/.lexicon/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. `words.txt` in the current working directory
///
/// A missing or unreadable word list is reported on stderr and the
/// dictionary is returned anyway, empty or partially loaded; queries still
/// work, they just find less.
pub fn load_dictionary(wordlist_path: Option<&str>) -> Dictionary {
    let mut dict = Dictionary::new();
    let search_paths = build_search_paths(wordlist_path);

    let Some(path) = search_paths.iter().find(|p| p.is_file()) else {
        eprintln!("warning: no word list found in any of the search paths:");
        for p in &search_paths {
            eprintln!("  - {}", p.display());
        }
        eprintln!("continuing with an empty dictionary");
        return dict;
    };

    if let Err(e) = dict.load_path(path) {
        eprintln!("warning: {e}");
        eprintln!("continuing with what was loaded ({} words)", dict.len());
    }
    dict
}

/// Build the list of paths to search for a word list.
fn build_search_paths(wordlist_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = wordlist_path {
        paths.push(PathBuf::from(p));
    }

    // 2. LEXICON_WORDLIST environment variable
    if let Ok(env_path) = std::env::var("LEXICON_WORDLIST") {
        paths.push(PathBuf::from(&env_path));
        // Also check for words.txt inside, in case the var names a directory
        paths.push(PathBuf::from(&env_path).join(WORDLIST_FILE));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".lexicon").join(WORDLIST_FILE));
    }

    // 4. System word list
    paths.push(PathBuf::from("/usr/share/dict/words"));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDLIST_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--wordlist=PATH`, `--wordlist PATH` or `-w PATH` argument from
/// command line args.
///
/// Returns `(wordlist_path, remaining_args)`.
pub fn parse_wordlist_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut wordlist_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--wordlist=") {
            wordlist_path = Some(val.to_string());
        } else if arg == "--wordlist" || arg == "-w" {
            if i + 1 < args.len() {
                wordlist_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (wordlist_path, remaining)
}

/// Whether the user asked for help.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
