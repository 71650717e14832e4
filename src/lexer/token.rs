//! Token definitions
//!
//! This module defines every token kind the scanner can produce, plus the
//! fixed keyword table used to classify identifiers.

use std::fmt;

/// A token: its kind and the literal source text that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
}

impl Token {
    /// Create a new token
    pub fn new(token_type: TokenType, lexeme: impl Into<String>) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
        }
    }

    /// The end-of-input token, which always has an empty literal
    pub fn eof() -> Self {
        Self::new(TokenType::Eof, "")
    }

    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Special
    Eof,
    Illegal,

    // Identifiers and literals
    Identifier,
    Integer,

    // Keywords
    Keyword(Keyword),

    // Operators
    Assign,     // =
    Plus,       // +
    Minus,      // -
    Bang,       // !
    Star,       // *
    Slash,      // /
    Less,       // <
    Greater,    // >
    Equal,      // ==
    NotEqual,   // !=

    // Delimiters
    Comma,      // ,
    Semicolon,  // ;
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
}

/// Reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Let,
    Return,
    Fn,
    If,
    Else,
    True,
    False,
}

impl Keyword {
    /// Look up a keyword by its exact spelling
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "let" => Some(Self::Let),
            "return" => Some(Self::Return),
            "fn" => Some(Self::Fn),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            _ => None,
        }
    }

    /// Get the source spelling of the keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Return => "return",
            Self::Fn => "fn",
            Self::If => "if",
            Self::Else => "else",
            Self::True => "true",
            Self::False => "false",
        }
    }

    /// Get the kind name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::Let => "LET",
            Self::Return => "RETURN",
            Self::Fn => "FUNCTION",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::True => "TRUE",
            Self::False => "FALSE",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify an identifier-shaped lexeme as a keyword or a plain identifier
pub fn lookup_identifier(lexeme: &str) -> TokenType {
    match Keyword::from_str(lexeme) {
        Some(keyword) => TokenType::Keyword(keyword),
        None => TokenType::Identifier,
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => write!(f, "EOF"),
            Self::Illegal => write!(f, "ILLEGAL"),
            Self::Identifier => write!(f, "IDENT"),
            Self::Integer => write!(f, "INT"),
            Self::Keyword(kw) => write!(f, "{}", kw.name()),
            Self::Assign => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Bang => write!(f, "!"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("let"), Some(Keyword::Let));
        assert_eq!(Keyword::from_str("fn"), Some(Keyword::Fn));
        assert_eq!(Keyword::from_str("return"), Some(Keyword::Return));
        assert_eq!(Keyword::from_str("Let"), None);
        assert_eq!(Keyword::from_str("lets"), None);
    }

    #[test]
    fn test_lookup_identifier() {
        assert_eq!(lookup_identifier("true"), TokenType::Keyword(Keyword::True));
        assert_eq!(lookup_identifier("foobar"), TokenType::Identifier);
    }

    #[test]
    fn test_token_type_display() {
        assert_eq!(TokenType::Identifier.to_string(), "IDENT");
        assert_eq!(TokenType::Keyword(Keyword::Fn).to_string(), "FUNCTION");
        assert_eq!(TokenType::NotEqual.to_string(), "!=");
        assert_eq!(TokenType::LeftBrace.to_string(), "{");
    }
}
