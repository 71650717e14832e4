//! Abstract Syntax Tree definitions
//!
//! Every node keeps the token that introduced it, so operator spellings and
//! literal text survive into the tree. Nodes render to a canonical, fully
//! parenthesized form through `Display`.

use std::fmt;

use crate::lexer::Token;

/// Capabilities shared by every node
pub trait Node: fmt::Display {
    /// Literal text of the node's defining token
    fn token_literal(&self) -> &str;

    /// Canonical textual form
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Root AST node representing a complete program
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// Statement node
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Binding: let x = 5;
    Let {
        token: Token,
        name: Identifier,
        value: Option<Expression>,
    },

    /// Return statement
    Return {
        token: Token,
        value: Option<Expression>,
    },

    /// Expression used as a statement; `token` is its first token
    Expression {
        token: Token,
        expression: Expression,
    },
}

/// A name, either bound by `let` or referenced in an expression
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.lexeme.clone();
        Self { token, value }
    }
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),

    IntegerLiteral {
        token: Token,
        value: i64,
    },

    /// Unary operation: -x, !x
    Prefix {
        token: Token,
        operator: String,
        right: Box<Expression>,
    },

    /// Binary operation; `token` is the operator token
    Infix {
        token: Token,
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|s| s.token_literal())
            .unwrap_or("")
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. } => &token.lexeme,
        }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.lexeme
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::IntegerLiteral { token, .. }
            | Expression::Prefix { token, .. }
            | Expression::Infix { token, .. } => &token.lexeme,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { token, name, value } => {
                write!(f, "{} {} = ", token.lexeme, name)?;
                if let Some(value) = value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Statement::Return { token, value } => {
                write!(f, "{} ", token.lexeme)?;
                if let Some(value) = value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Statement::Expression { expression, .. } => write!(f, "{}", expression),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral { token, .. } => write!(f, "{}", token.lexeme),
            Expression::Prefix { operator, right, .. } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}
