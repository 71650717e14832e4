//! Lexical analysis module
//!
//! This module handles tokenization of source text.

pub mod token;
pub mod scanner;

pub use token::{lookup_identifier, Keyword, Token, TokenType};
pub use scanner::Lexer;
