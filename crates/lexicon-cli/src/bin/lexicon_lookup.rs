// lexicon-lookup: interactive word lookup with autocomplete suggestions.
//
// Prompts for a word, reports whether it is in the dictionary, and offers
// up to 10 completions of it when it is not. An empty line exits.
//
// Usage:
//   lexicon-lookup [-w WORDLIST]
//
// Options:
//   -w, --wordlist PATH   Word list file (one word per line)
//   -h, --help            Print help

use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = lexicon_cli::parse_wordlist_path(&args);

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-lookup: Interactive word lookup.");
        println!();
        println!("Usage: lexicon-lookup [-w WORDLIST]");
        println!();
        println!("Prompts for words; an empty line exits. A word that is not");
        println!("in the dictionary is answered with up to 10 completions.");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH   Word list file (one word per line)");
        println!("  -h, --help            Print this help");
        return;
    }

    let dict = lexicon_cli::load_dictionary(wordlist_path.as_deref());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter a word to search (or press Enter to exit): ");
        let _ = io::stdout().flush();

        // EOF or a read failure before the empty-line exit means the input
        // stream closed under us; report it and leave.
        let line = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(e)) => {
                eprintln!("error: input stream closed: {e}");
                process::exit(1);
            }
            None => {
                eprintln!("error: input stream closed");
                process::exit(1);
            }
        };

        let word = line.trim_end_matches('\r');
        if word.is_empty() {
            break;
        }

        let completions = dict.complete(word);
        if completions.iter().any(|c| c == word) {
            println!("Word found: {word}");
        } else {
            println!("Word not found! Did you mean: {completions:?}");
        }
    }
}
