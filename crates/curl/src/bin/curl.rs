//! curl: straighten your apostrophes no more.
//!
//! Reads prose from stdin, writes its curled form to stdout, and writes
//! diagnostics to stderr. This binary is an external collaborator over the
//! `curl` library's one entrypoint (spec §6) — it owns stdio, flag parsing,
//! and the contractions-override plumbing, and nothing else.

use curl::{ambiguous_tokens, curl, lex_notices, Contractions, ContractionsBuilder, FilterMode, OutputMode};
use std::env;
use std::io::{self, Read, Write};
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut output_mode = OutputMode::Glyphs;
    let mut filter_mode = FilterMode::Plain;
    let mut list_contractions = false;
    let mut enable_logging = false;
    let mut began_unambiguous: Vec<String> = Vec::new();
    let mut began_ambiguous: Vec<String> = Vec::new();
    let mut ended_unambiguous: Vec<String> = Vec::new();
    let mut ended_ambiguous: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-e" => output_mode = OutputMode::Entities,
            "-x" => filter_mode = FilterMode::Xml,
            "-l" => list_contractions = true,
            "--log" => enable_logging = true,
            "-ub" => i = take_value(&args, i, "-ub", &mut began_unambiguous),
            "-ue" => i = take_value(&args, i, "-ue", &mut ended_unambiguous),
            "-ab" => i = take_value(&args, i, "-ab", &mut began_ambiguous),
            "-ae" => i = take_value(&args, i, "-ae", &mut ended_ambiguous),
            "-h" => {
                print_usage();
                process::exit(0);
            }
            "-V" => {
                println!("curl {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            other => {
                eprintln!("curl: unrecognized option '{other}'");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if enable_logging {
        tracing_subscriber::fmt().with_writer(io::stderr).init();
    }

    let contractions = build_contractions(began_unambiguous, began_ambiguous, ended_unambiguous, ended_ambiguous);

    if list_contractions {
        print_contraction_lists();
        process::exit(0);
    }

    let mut text = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut text) {
        eprintln!("curl: failed to read stdin: {err}");
        process::exit(1);
    }

    for notice in lex_notices(&text, filter_mode) {
        eprintln!("curl: {notice}");
    }

    let residual = ambiguous_tokens(&text, &contractions, filter_mode);
    if !residual.is_empty() {
        tracing::debug!(count = residual.len(), "curl: residual ambiguity left as straight quotes");
    }

    let out = curl(&text, &contractions, output_mode, filter_mode);
    if let Err(err) = io::stdout().write_all(out.as_bytes()) {
        eprintln!("curl: failed to write stdout: {err}");
        process::exit(1);
    }
}

/// Consumes the flag's single following argument (repeatable flags append
/// across multiple occurrences), returning the new argument index.
fn take_value(args: &[String], i: usize, flag: &str, target: &mut Vec<String>) -> usize {
    match args.get(i + 1) {
        Some(word) => {
            target.push(word.clone());
            i + 1
        }
        None => {
            eprintln!("curl: {flag} requires a word argument");
            process::exit(1);
        }
    }
}

/// Builds the effective oracle for this run. The CLI's append flags extend
/// a category's default list rather than discarding it outright (unlike
/// the library's own replace-only `ContractionsBuilder::with_*` semantics),
/// so each non-empty override here starts from `curl_contractions::
/// default_words` before handing the combined list to the builder.
fn build_contractions(
    began_unambiguous: Vec<String>,
    began_ambiguous: Vec<String>,
    ended_unambiguous: Vec<String>,
    ended_ambiguous: Vec<String>,
) -> Contractions {
    use curl_contractions::{default_words, Category};

    let mut builder = ContractionsBuilder::new();

    if !began_unambiguous.is_empty() {
        let mut words = default_words(Category::BeganUnambiguous);
        words.extend(began_unambiguous);
        builder = builder.with_began_unambiguous(words);
    }
    if !began_ambiguous.is_empty() {
        let mut words = default_words(Category::BeganAmbiguous);
        words.extend(began_ambiguous);
        builder = builder.with_began_ambiguous(words);
    }
    if !ended_unambiguous.is_empty() {
        let mut words = default_words(Category::EndedUnambiguous);
        words.extend(ended_unambiguous);
        builder = builder.with_ended_unambiguous(words);
    }
    if !ended_ambiguous.is_empty() {
        let mut words = default_words(Category::EndedAmbiguous);
        words.extend(ended_ambiguous);
        builder = builder.with_ended_ambiguous(words);
    }

    builder.build()
}

fn print_contraction_lists() {
    for category in [
        curl_contractions::Category::BeganUnambiguous,
        curl_contractions::Category::BeganAmbiguous,
        curl_contractions::Category::EndedUnambiguous,
        curl_contractions::Category::EndedAmbiguous,
    ] {
        println!("# {category:?}");
        let mut words = curl_contractions::default_words(category);
        words.sort();
        for word in words {
            println!("{word}");
        }
    }
}

fn print_usage() {
    eprintln!("curl - convert straight quotes to typographic quotes");
    eprintln!();
    eprintln!("Usage: curl [options] < input > output");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e            Emit HTML entities instead of Unicode glyphs");
    eprintln!("  -x            Treat input as XML: skip tags and untouchable element bodies");
    eprintln!("  -l            List the default contraction word lists and exit");
    eprintln!("  -ub <word>    Append <word> to the began-unambiguous list (repeatable)");
    eprintln!("  -ue <word>    Append <word> to the ended-unambiguous list (repeatable)");
    eprintln!("  -ab <word>    Append <word> to the began-ambiguous list (repeatable)");
    eprintln!("  -ae <word>    Append <word> to the ended-ambiguous list (repeatable)");
    eprintln!("  --log         Enable diagnostic logging to stderr");
    eprintln!("  -h            Show this usage message");
    eprintln!("  -V            Show version information");
}
