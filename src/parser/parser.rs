//! Parser implementation
//!
//! Statements are parsed by recursive descent; expressions by precedence
//! climbing (Pratt parsing). Each token kind that can start an expression has
//! a prefix rule, each binary operator has an infix rule, and both tables are
//! exhaustive matches over `TokenType`.
//!
//! Errors are recorded and parsing continues at the next token, so a
//! `Program` is always produced, possibly with statements missing.

use tracing::{debug, trace};

use super::ast::*;
use super::precedence::Precedence;
use crate::config::{ParserConfig, StatementValues};
use crate::error::ParseError;
use crate::lexer::{Keyword, Lexer, Token, TokenType};

/// Builds an expression starting at the current token
type PrefixRule = fn(&mut Parser) -> Option<Expression>;

/// Extends an already-parsed left operand; the current token is the operator
type InfixRule = fn(&mut Parser, Expression) -> Option<Expression>;

/// Bound on both expression recursion and the height of a built expression,
/// keeping parsing, rendering and dropping within the stack
pub const MAX_DEPTH: usize = 256;

/// Parser pulling tokens from a `Lexer` with one token of lookahead
pub struct Parser {
    lexer: Lexer,
    config: ParserConfig,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
    /// Active `parse_expression` calls
    depth: usize,
    /// Height of the expression most recently built
    height: usize,
}

impl Parser {
    /// Create a parser with the default configuration
    pub fn new(lexer: Lexer) -> Self {
        Self::with_config(lexer, ParserConfig::default())
    }

    /// Create a parser with an explicit configuration
    pub fn with_config(lexer: Lexer, config: ParserConfig) -> Self {
        let mut parser = Self {
            lexer,
            config,
            current: Token::eof(),
            peek: Token::eof(),
            errors: Vec::new(),
            depth: 0,
            height: 0,
        };

        // Fill both `current` and `peek`
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parse statements until EOF
    pub fn parse_program(&mut self) -> Program {
        debug!(config = ?self.config, "parsing program");
        let mut program = Program::default();

        while !self.current.is(TokenType::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "finished parsing program"
        );
        program
    }

    /// Errors recorded so far, in encounter order
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Errors recorded so far, rendered as messages
    pub fn diagnostics(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Consume the parser, keeping only its errors
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    // ===== Statements =====

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.token_type {
            TokenType::Keyword(Keyword::Let) => self.parse_let_statement(),
            TokenType::Keyword(Keyword::Return) => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenType::Identifier) {
            return None;
        }
        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenType::Assign) {
            return None;
        }

        let value = match self.config.statement_values {
            StatementValues::Parse => {
                self.next_token();
                self.parse_terminated_expression()
            }
            StatementValues::Skip => {
                self.skip_to_semicolon();
                None
            }
        };

        Some(Statement::Let { token, name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        let value = match self.config.statement_values {
            StatementValues::Parse if self.peek.is(TokenType::Semicolon) => {
                self.next_token();
                None
            }
            StatementValues::Parse => {
                self.next_token();
                self.parse_terminated_expression()
            }
            StatementValues::Skip => {
                self.next_token();
                self.skip_to_semicolon();
                None
            }
        };

        Some(Statement::Return { token, value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_terminated_expression()?;
        Some(Statement::Expression { token, expression })
    }

    /// Parse an expression followed by an optional `;`
    fn parse_terminated_expression(&mut self) -> Option<Expression> {
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek.is(TokenType::Semicolon) {
            self.next_token();
        }

        expression
    }

    /// Advance until the current token is `;`; EOF ends the scan early
    fn skip_to_semicolon(&mut self) {
        while !self.current.is(TokenType::Semicolon) {
            if self.current.is(TokenType::Eof) {
                self.record(ParseError::UnexpectedToken {
                    expected: TokenType::Semicolon,
                    found: TokenType::Eof,
                });
                return;
            }
            self.next_token();
        }
    }

    // ===== Expressions =====

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if self.depth >= MAX_DEPTH {
            self.record(ParseError::TooDeep(MAX_DEPTH));
            return None;
        }

        self.depth += 1;
        let expression = self.parse_expression_at(precedence);
        self.depth -= 1;
        expression
    }

    fn parse_expression_at(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = prefix_rule(self.current.token_type) else {
            self.record(ParseError::NoPrefixRule(self.current.token_type));
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek.is(TokenType::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = infix_rule(self.peek.token_type) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        self.height = 1;
        Some(Expression::Identifier(Identifier::new(self.current.clone())))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        match parse_integer(&token.lexeme) {
            Some(value) => {
                self.height = 1;
                Some(Expression::IntegerLiteral { token, value })
            }
            None => {
                self.record(ParseError::InvalidInteger(token.lexeme));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.lexeme.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        self.grow(self.height)?;

        Some(Expression::Prefix {
            token,
            operator,
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RightParen) {
            return None;
        }
        Some(expression)
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.lexeme.clone();
        let precedence = self.current_precedence();
        let left_height = self.height;

        self.next_token();
        let right = self.parse_expression(precedence)?;
        self.grow(left_height.max(self.height))?;

        Some(Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    // ===== Helper Methods =====

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advance onto `peek` only if it has the expected kind
    fn expect_peek(&mut self, token_type: TokenType) -> bool {
        if self.peek.is(token_type) {
            self.next_token();
            true
        } else {
            self.record(ParseError::UnexpectedToken {
                expected: token_type,
                found: self.peek.token_type,
            });
            false
        }
    }

    /// Record the height of a node built over children of `child_height`,
    /// failing once it passes `MAX_DEPTH`
    fn grow(&mut self, child_height: usize) -> Option<()> {
        if child_height >= MAX_DEPTH {
            self.record(ParseError::TooDeep(MAX_DEPTH));
            return None;
        }
        self.height = child_height + 1;
        Some(())
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.token_type)
    }

    fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.token_type)
    }

    fn record(&mut self, error: ParseError) {
        trace!(%error, "parse error");
        self.errors.push(error);
    }
}

fn prefix_rule(token_type: TokenType) -> Option<PrefixRule> {
    match token_type {
        TokenType::Identifier => Some(Parser::parse_identifier as PrefixRule),
        TokenType::Integer => Some(Parser::parse_integer_literal as PrefixRule),
        TokenType::Bang | TokenType::Minus => Some(Parser::parse_prefix_expression as PrefixRule),
        TokenType::LeftParen => Some(Parser::parse_grouped_expression as PrefixRule),
        TokenType::Eof
        | TokenType::Illegal
        | TokenType::Keyword(_)
        | TokenType::Assign
        | TokenType::Plus
        | TokenType::Star
        | TokenType::Slash
        | TokenType::Less
        | TokenType::Greater
        | TokenType::Equal
        | TokenType::NotEqual
        | TokenType::Comma
        | TokenType::Semicolon
        | TokenType::RightParen
        | TokenType::LeftBrace
        | TokenType::RightBrace => None,
    }
}

fn infix_rule(token_type: TokenType) -> Option<InfixRule> {
    match token_type {
        TokenType::Plus
        | TokenType::Minus
        | TokenType::Star
        | TokenType::Slash
        | TokenType::Equal
        | TokenType::NotEqual
        | TokenType::Less
        | TokenType::Greater => Some(Parser::parse_infix_expression as InfixRule),
        TokenType::Eof
        | TokenType::Illegal
        | TokenType::Identifier
        | TokenType::Integer
        | TokenType::Keyword(_)
        | TokenType::Assign
        | TokenType::Bang
        | TokenType::Comma
        | TokenType::Semicolon
        | TokenType::LeftParen
        | TokenType::RightParen
        | TokenType::LeftBrace
        | TokenType::RightBrace => None,
    }
}

/// Convert integer literal text, honoring `0x`, `0o`, `0b` and leading-zero
/// octal prefixes
fn parse_integer(literal: &str) -> Option<i64> {
    let (digits, radix) = match literal.as_bytes() {
        [b'0', b'x' | b'X', ..] => (&literal[2..], 16),
        [b'0', b'o' | b'O', ..] => (&literal[2..], 8),
        [b'0', b'b' | b'B', ..] => (&literal[2..], 2),
        [b'0', _, ..] => (&literal[1..], 8),
        _ => (literal, 10),
    };

    // from_str_radix would accept a sign
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}
