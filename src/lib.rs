//! # Monkey front end
//!
//! Scanner and parser for a small C-like expression language. Source text is
//! scanned into tokens on demand and parsed into an AST with operator
//! precedence (Pratt) parsing. Nothing here evaluates the tree.
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source text
//! - `parser`: Parsing tokens into an Abstract Syntax Tree (AST)
//! - `config`: Parser options
//! - `error`: Parse errors and diagnostic formatting

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use config::{ParserConfig, StatementValues};
pub use error::{Diagnostic, FrontendError, FrontendResult, ParseError};
pub use lexer::{Keyword, Lexer, Token, TokenType};
pub use parser::{Expression, Identifier, Node, Parser, Program, Statement, MAX_DEPTH};

/// Version of the front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a whole program with the default configuration
///
/// The program is returned even when errors were recorded; it then holds
/// only the statements that parsed.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    parse_with(source, ParserConfig::default())
}

/// Parse a whole program with an explicit configuration
pub fn parse_with(source: &str, config: ParserConfig) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::with_config(Lexer::new(source), config);
    let program = parser.parse_program();
    (program, parser.into_errors())
}
