//! Lexer/Scanner implementation
//!
//! This module implements lexical analysis, converting source text into a
//! pull-based stream of tokens. The scanner never fails: anything it does not
//! recognize becomes an `Illegal` token for the parser to deal with.

use super::token::{lookup_identifier, Token, TokenType};

/// Lexer over a fixed source buffer
pub struct Lexer {
    source: Vec<char>,
    /// Index of `ch`
    position: usize,
    /// Index of the character after `ch`
    read_position: usize,
    ch: char,
}

impl Lexer {
    /// Create a new lexer positioned on the first character
    pub fn new(source: &str) -> Self {
        let mut lexer = Self {
            source: source.chars().collect(),
            position: 0,
            read_position: 0,
            ch: '\0',
        };
        lexer.read_char();
        lexer
    }

    /// Produce the next token, advancing past it
    ///
    /// Once the end of input is reached every further call returns EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.is_at_end() {
            return Token::eof();
        }

        let token = match self.ch {
            // Two-character tokens
            '=' => self.either('=', TokenType::Equal, TokenType::Assign),
            '!' => self.either('=', TokenType::NotEqual, TokenType::Bang),

            // Single-character tokens
            '+' => self.single(TokenType::Plus),
            '-' => self.single(TokenType::Minus),
            '*' => self.single(TokenType::Star),
            '/' => self.single(TokenType::Slash),
            '<' => self.single(TokenType::Less),
            '>' => self.single(TokenType::Greater),
            ',' => self.single(TokenType::Comma),
            ';' => self.single(TokenType::Semicolon),
            '(' => self.single(TokenType::LeftParen),
            ')' => self.single(TokenType::RightParen),
            '{' => self.single(TokenType::LeftBrace),
            '}' => self.single(TokenType::RightBrace),

            // Identifiers, keywords and numbers leave the cursor on the
            // character after the run, so they return without advancing
            c if is_letter(c) => {
                let lexeme = self.read_identifier();
                return Token::new(lookup_identifier(&lexeme), lexeme);
            }
            c if c.is_ascii_digit() => {
                let lexeme = self.read_number();
                return Token::new(TokenType::Integer, lexeme);
            }

            _ => self.single(TokenType::Illegal),
        };

        self.read_char();
        token
    }

    /// Drain the token stream up to and including the first EOF
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is(TokenType::Eof);
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn single(&self, token_type: TokenType) -> Token {
        Token::new(token_type, self.ch.to_string())
    }

    /// Build `double` when the next character is `next`, consuming it,
    /// otherwise build `single` from the current character alone
    fn either(&mut self, next: char, double: TokenType, single: TokenType) -> Token {
        if self.peek_char() == next {
            let first = self.ch;
            self.read_char();
            Token::new(double, format!("{}{}", first, self.ch))
        } else {
            self.single(single)
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while !self.is_at_end() && is_letter(self.ch) {
            self.read_char();
        }
        self.source[start..self.position].iter().collect()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while !self.is_at_end() && self.ch.is_ascii_digit() {
            self.read_char();
        }
        self.source[start..self.position].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }

    /// Advance to the next character
    fn read_char(&mut self) {
        self.ch = self.source.get(self.read_position).copied().unwrap_or('\0');
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Peek at the next character without consuming it
    fn peek_char(&self) -> char {
        self.source.get(self.read_position).copied().unwrap_or('\0')
    }

    /// End of input is positional, so a NUL inside the source is still
    /// scanned as an ordinary (illegal) character
    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
