//! Command-line interface for hedsearch.
//! Compile a query pattern, run it against an annotation string, and report
//! the verdict plus the groups that satisfied structural clauses.
//!
//! Usage:
//!   hedsearch match `<pattern>` `<annotation>` [--format `<format>`]  - Run a pattern against an annotation
//!   hedsearch tokens `<pattern>`                                  - Dump the token stream for a pattern

use clap::{Arg, Command};

use hedsearch::model::parse_document;
use hedsearch::query::{compile, tokenize};

fn main() {
    let matches = Command::new("hedsearch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for searching HED annotation strings with structural query patterns")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("match")
                .about("Match a pattern against an annotation string")
                .arg(
                    Arg::new("pattern")
                        .help("The query pattern, e.g. '(item or agent) and action'")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("annotation")
                        .help("The annotation string to search, e.g. 'A, (B, C)'")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the token stream for a pattern")
                .arg(
                    Arg::new("pattern")
                        .help("The query pattern to tokenize")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("match", match_matches)) => {
            let pattern = match_matches.get_one::<String>("pattern").unwrap();
            let annotation = match_matches.get_one::<String>("annotation").unwrap();
            let format = match_matches.get_one::<String>("format").unwrap();
            handle_match_command(pattern, annotation, format);
        }
        Some(("tokens", tokens_matches)) => {
            let pattern = tokens_matches.get_one::<String>("pattern").unwrap();
            handle_tokens_command(pattern);
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn handle_match_command(pattern_text: &str, annotation: &str, format: &str) {
    let pattern = match compile(pattern_text) {
        Ok(pattern) => pattern,
        Err(err) => {
            eprintln!("Error: invalid pattern: {}", err);
            std::process::exit(1);
        }
    };

    let document = match parse_document(annotation) {
        Ok(document) => document,
        Err(err) => {
            eprintln!("Error: invalid annotation: {}", err);
            std::process::exit(1);
        }
    };

    let result = pattern.search(&document);
    let groups: Vec<String> = result
        .matched_groups
        .iter()
        .map(|group| group.to_string())
        .collect();

    match format {
        "json" => {
            let output = serde_json::json!({
                "pattern": pattern_text,
                "matched": result.matched,
                "matched_groups": groups,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        "text" => {
            if result.matched {
                println!("Match");
            } else {
                println!("No match");
            }
            if !groups.is_empty() {
                println!("Found as group(s): {}", groups.join(" "));
            }
            if !result.matched {
                std::process::exit(2);
            }
        }
        other => {
            eprintln!("Error: unknown format '{}'", other);
            std::process::exit(1);
        }
    }
}

fn handle_tokens_command(pattern_text: &str) {
    match tokenize(pattern_text) {
        Ok(tokens) => {
            for token in tokens {
                println!("{:?}", token);
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
