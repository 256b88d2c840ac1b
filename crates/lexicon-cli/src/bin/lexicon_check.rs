// lexicon-check: check words from stdin against the dictionary.
//
// Reads words from stdin (one per line) and reports whether each word is
// in the dictionary. Output format:
//   C: word    (in the dictionary)
//   W: word    (not in the dictionary)
//
// Usage:
//   lexicon-check [-w WORDLIST] [OPTIONS]
//
// Options:
//   -w, --wordlist PATH   Word list file (one word per line)
//   -c, --complete        Also print completions for missing words
//   -h, --help            Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = lexicon_cli::parse_wordlist_path(&args);

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-check: Check words from stdin against the dictionary.");
        println!();
        println!("Usage: lexicon-check [-w WORDLIST] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (in the dictionary)");
        println!("  W: word    (not in the dictionary)");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH   Word list file (one word per line)");
        println!("  -c, --complete        Also print completions for missing words");
        println!("  -h, --help            Print this help");
        return;
    }

    let show_completions = args.iter().any(|a| a == "-c" || a == "--complete");

    let dict = lexicon_cli::load_dictionary(wordlist_path.as_deref());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim_end_matches('\r');
        if word.is_empty() {
            continue;
        }

        if dict.lookup(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_completions {
                for completion in dict.complete(word) {
                    let _ = writeln!(out, "S: {completion}");
                }
            }
        }
    }
}
