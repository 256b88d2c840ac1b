// lexicon-complete: print completions for prefixes.
//
// Prints the dictionary words starting with each given prefix, in
// lexicographic order.
//
// Usage:
//   lexicon-complete [-w WORDLIST] [OPTIONS] [PREFIX...]
//
// Options:
//   -w, --wordlist PATH       Word list file (one word per line)
//   -n, --max-completions N   Maximum completions per prefix (default: 10)
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = lexicon_cli::parse_wordlist_path(&args);

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-complete: Print completions for prefixes.");
        println!();
        println!("Usage: lexicon-complete [-w WORDLIST] [OPTIONS] [PREFIX...]");
        println!();
        println!("If PREFIX arguments are given, completes each of them.");
        println!("Otherwise reads prefixes from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH       Word list file (one word per line)");
        println!("  -n, --max-completions N   Maximum completions per prefix (default: 10)");
        println!("  -h, --help                Print this help");
        return;
    }

    let mut max_completions: usize = 10;
    let mut prefixes: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-completions" {
            if i + 1 < args.len() {
                max_completions = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| lexicon_cli::fatal("invalid number for --max-completions"));
                skip_next = true;
            } else {
                lexicon_cli::fatal("--max-completions requires a value");
            }
        } else if !arg.starts_with('-') {
            prefixes.push(arg.clone());
        }
    }

    let mut dict = lexicon_cli::load_dictionary(wordlist_path.as_deref());
    dict.set_max_completions(max_completions);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let complete_one = |prefix: &str,
                        dict: &lexicon_dict::Dictionary,
                        out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let completions = dict.complete(prefix);
        if completions.is_empty() {
            let _ = writeln!(out, "{prefix}: (no completions)");
        } else {
            let _ = writeln!(out, "{prefix}:");
            for c in &completions {
                let _ = writeln!(out, "  {c}");
            }
        }
    };

    if !prefixes.is_empty() {
        for prefix in &prefixes {
            complete_one(prefix, &dict, &mut out);
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let prefix = line.trim_end_matches('\r');
        if prefix.is_empty() {
            continue;
        }
        complete_one(prefix, &dict, &mut out);
    }
}
