use crate::lexer::{Token, TokenKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Expected {expected:?}, got {found:?} at line {line}")]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        line: usize,
    },
    #[error("Expected 'rizz' after variable name, got '{text}' at line {line}")]
    ExpectedRizz { text: String, line: usize },
    #[error("Unexpected token '{text}' at line {line}")]
    Unexpected { text: String, line: usize },
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

mod core;
mod expr;
mod stmt;
