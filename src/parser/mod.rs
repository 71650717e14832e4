//! Parser module
//!
//! This module handles parsing tokens into an Abstract Syntax Tree (AST).

pub mod ast;
pub mod parser;
pub mod precedence;

pub use ast::{Expression, Identifier, Node, Program, Statement};
pub use parser::{Parser, MAX_DEPTH};
pub use precedence::Precedence;
