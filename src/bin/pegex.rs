//! Command-line interface for pegex
//! This binary compiles parsed pegex grammars (the JSON AST the pegex parser emits) into regular expressions.
//!
//! Usage:
//!   pegex compile `<path>` [--plain-groups]  - Compile the grammar's start rule into regex source
//!   pegex ast `<path>`                       - Validate a grammar AST file and pretty-print it

use clap::{Arg, ArgAction, Command};
use pegex::{compile, CompileError, ConversionOptions, Grammar};
use std::io::Read;

fn main() {
    let matches = Command::new("pegex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for compiling PEG grammars into regular expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compile")
                .about("Compile the grammar's start rule into regex source")
                .arg(
                    Arg::new("path")
                        .help("Path to the grammar AST as JSON, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("plain-groups")
                        .long("plain-groups")
                        .help("Emit capturing groups instead of non-capturing groups")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("ast")
                .about("Validate a grammar AST file and pretty-print it")
                .arg(
                    Arg::new("path")
                        .help("Path to the grammar AST as JSON, or - for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("compile", compile_matches)) => {
            let path = compile_matches.get_one::<String>("path").unwrap();
            let plain_groups = compile_matches.get_flag("plain-groups");
            handle_compile_command(path, plain_groups);
        }
        Some(("ast", ast_matches)) => {
            let path = ast_matches.get_one::<String>("path").unwrap();
            handle_ast_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the compile command
fn handle_compile_command(path: &str, plain_groups: bool) {
    let grammar = load_grammar(path);
    let options = ConversionOptions {
        no_non_capture_groups: plain_groups,
    };
    match compile(&grammar, &options) {
        Ok(source) => println!("{}", source),
        Err(error) => report_compile_error(&error),
    }
}

/// Handle the ast command
fn handle_ast_command(path: &str) {
    let grammar = load_grammar(path);
    let rendered = serde_json::to_string_pretty(&grammar).unwrap_or_else(|e| {
        eprintln!("Error rendering grammar: {}", e);
        std::process::exit(1);
    });
    println!("{}", rendered);
}

/// Read and deserialize a grammar AST from a file, or stdin for `-`
fn load_grammar(path: &str) -> Grammar {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error: not a valid grammar AST: {}", e);
        std::process::exit(1);
    })
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}

fn report_compile_error(error: &CompileError) {
    match error.location() {
        Some(span) => eprintln!("Error at {}: {}", span.start, error),
        None => eprintln!("Error: {}", error),
    }
    std::process::exit(1);
}
