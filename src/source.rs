use crate::ast::{Expr, Program};
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Lex and parse a complete program.
pub fn parse_source(source: &str) -> Result<Program, String> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize().map_err(|e| e.to_string())?;
    let mut parser = Parser::new(tokens);
    parser.parse().map_err(|e| e.to_string())
}

/// Lex and parse a single leading expression, ignoring trailing tokens.
/// The REPL's expression-first dispatch depends on both properties.
pub fn parse_expression(source: &str) -> Result<Expr, String> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize().map_err(|e| e.to_string())?;
    let mut parser = Parser::new(tokens);
    parser.parse_expression().map_err(|e| e.to_string())
}
