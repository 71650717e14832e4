//! Error handling and diagnostics
//!
//! Parse errors are never fatal: the parser records them and keeps going,
//! so this module only describes them and formats them for display.

use std::fmt;

use crate::lexer::TokenType;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for front-end operations that can fail outright
pub type FrontendResult<T> = Result<T, FrontendError>;

/// A recoverable error recorded while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token after the current one was not the required kind
    UnexpectedToken {
        expected: TokenType,
        found: TokenType,
    },
    /// A token that cannot start an expression appeared where one was required
    NoPrefixRule(TokenType),
    /// An integer literal could not be converted to a 64-bit signed value
    InvalidInteger(String),
    /// An expression nested past the given number of levels
    TooDeep(usize),
}

impl ParseError {
    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::UnexpectedToken { .. } => "Unexpected Token",
            Self::NoPrefixRule(_) => "Missing Expression",
            Self::InvalidInteger(_) => "Invalid Integer",
            Self::TooDeep(_) => "Nesting Limit",
        }
    }

    /// Get the diagnostic message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => write!(
                f,
                "expected next token to be {}, got {} instead",
                expected, found
            ),
            Self::NoPrefixRule(token_type) => {
                write!(f, "no prefix parse function for {} found", token_type)
            }
            Self::InvalidInteger(literal) => {
                write!(f, "could not parse {:?} as integer", literal)
            }
            Self::TooDeep(limit) => {
                write!(f, "expression nested more than {} levels deep", limit)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Failures outside the parser itself, surfaced by the command-line driver
#[derive(Debug)]
pub enum FrontendError {
    /// Reading the source text failed
    Io {
        path: Option<String>,
        source: std::io::Error,
    },
    /// Parsing finished but recorded diagnostics
    Parse(Vec<ParseError>),
}

impl FrontendError {
    pub fn io(path: Option<&str>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.map(|p| p.to_string()),
            source,
        }
    }
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path: Some(path), source } => {
                write!(f, "Failed to read file '{}': {}", path, source)
            }
            Self::Io { path: None, source } => write!(f, "Failed to read stdin: {}", source),
            Self::Parse(errors) => write!(f, "{} parse error(s)", errors.len()),
        }
    }
}

impl std::error::Error for FrontendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(_) => None,
        }
    }
}
