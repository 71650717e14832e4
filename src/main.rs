//! Monkey front-end CLI
//!
//! Scans or parses a source file (or stdin) and prints the result.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use monkey_lang::{
    parse_with, Diagnostic, FrontendError, FrontendResult, Lexer, Node, ParserConfig, VERSION,
};

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut show_tokens = false;
    let mut show_help = false;
    let mut config = ParserConfig::default();
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--tokens" | "-t" => show_tokens = true,
            "--skip-values" | "-s" => config = ParserConfig::skipping_values(),
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    let result = read_source(filename.map(String::as_str)).and_then(|source| {
        if show_tokens {
            print_tokens(&source);
            Ok(())
        } else {
            print_program(&source, config)
        }
    });

    match result {
        Ok(()) => {}
        Err(FrontendError::Parse(errors)) => {
            eprint!("{}", Diagnostic::report(&errors));
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Log to stderr only when RUST_LOG is set
fn init_tracing() {
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

fn print_usage() {
    eprintln!("Usage: monkey [OPTIONS] [file]");
    eprintln!("       monkey --help");
}

fn print_help() {
    println!("Monkey v{} - scanner and parser front end", VERSION);
    println!();
    println!("USAGE:");
    println!("    monkey [OPTIONS] [file]");
    println!();
    println!("Reads standard input when no file is given.");
    println!();
    println!("OPTIONS:");
    println!("    -t, --tokens        Show tokenization output (lexer only)");
    println!("    -s, --skip-values   Skip let/return values up to ';'");
    println!("    -h, --help          Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG            Enable logging to stderr (e.g. RUST_LOG=debug)");
}

fn read_source(filename: Option<&str>) -> FrontendResult<String> {
    match filename {
        Some(path) => fs::read_to_string(path).map_err(|e| FrontendError::io(Some(path), e)),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| FrontendError::io(None, e))?;
            Ok(source)
        }
    }
}

fn print_tokens(source: &str) {
    let tokens = Lexer::new(source).tokenize();

    println!("{}", "=".repeat(60));
    for (i, token) in tokens.iter().enumerate() {
        println!("{:4}: {:10} | {:?}", i, token.token_type.to_string(), token.lexeme);
    }
    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());
}

/// Print each parsed statement's canonical form on its own line
fn print_program(source: &str, config: ParserConfig) -> FrontendResult<()> {
    let (program, errors) = parse_with(source, config);

    for statement in &program.statements {
        println!("{}", statement.render());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FrontendError::Parse(errors))
    }
}
