//! Operator precedence ladder

use crate::lexer::TokenType;

/// Binding strength, lowest first; higher binds tighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// == !=
    Equals,
    /// < >
    LessGreater,
    /// + -
    Sum,
    /// * /
    Product,
    /// -x !x
    Prefix,
    /// Reserved for call syntax
    Call,
}

impl Precedence {
    /// Precedence of `token_type` when it appears as an infix operator
    pub fn of(token_type: TokenType) -> Self {
        match token_type {
            TokenType::Equal | TokenType::NotEqual => Self::Equals,
            TokenType::Less | TokenType::Greater => Self::LessGreater,
            TokenType::Plus | TokenType::Minus => Self::Sum,
            TokenType::Star | TokenType::Slash => Self::Product,
            _ => Self::Lowest,
        }
    }
}
