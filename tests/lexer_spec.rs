/// Spec tests for the Skibidi lexer.
///
/// Each test verifies that specific source text tokenises to the expected
/// sequence of token kinds. The trailing Eof is filtered out unless the test
/// is specifically about end-of-stream behavior.
use skibidi::lexer::{Lexer, Token, TokenKind};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn lex_all(src: &str) -> Vec<Token> {
    Lexer::new(src).tokenize().unwrap()
}

/// Token kinds without the trailing Eof.
fn lex(src: &str) -> Vec<TokenKind> {
    let mut kinds: Vec<TokenKind> = lex_all(src).into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds.pop(), Some(TokenKind::Eof));
    kinds
}

// ---------------------------------------------------------------------------
// Literals
// ---------------------------------------------------------------------------

#[test]
fn number_int() {
    let tokens = lex_all("42");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "42");
}

#[test]
fn number_float() {
    let tokens = lex_all("3.14");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "3.14");
}

#[test]
fn number_stops_at_second_dot() {
    let tokens = lex_all("1.2.3");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "1.2");
}

#[test]
fn string_basic() {
    let tokens = lex_all("\"hello\"");
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, "hello");
}

#[test]
fn string_empty() {
    let tokens = lex_all("\"\"");
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, "");
}

#[test]
fn string_escapes() {
    let tokens = lex_all(r#""a\nb\tc\\d\"e""#);
    assert_eq!(tokens[0].text, "a\nb\tc\\d\"e");
}

#[test]
fn string_unknown_escape_passes_through() {
    let tokens = lex_all(r#""a\qb""#);
    assert_eq!(tokens[0].text, "aqb");
}

#[test]
fn string_unterminated_ends_silently() {
    let tokens = lex_all("\"abc");
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

// ---------------------------------------------------------------------------
// Keywords and identifiers
// ---------------------------------------------------------------------------

#[test]
fn all_keywords() {
    assert_eq!(
        lex("skibidi rizz cap nocap bussin gyatt ohio sigma alpha beta gyatfor input true false"),
        vec![
            TokenKind::Skibidi,
            TokenKind::Rizz,
            TokenKind::Cap,
            TokenKind::Nocap,
            TokenKind::Bussin,
            TokenKind::Gyatt,
            TokenKind::Ohio,
            TokenKind::Sigma,
            TokenKind::Alpha,
            TokenKind::Beta,
            TokenKind::Gyatfor,
            TokenKind::Input,
            TokenKind::True,
            TokenKind::False,
        ]
    );
}

#[test]
fn keyword_prefix_is_identifier() {
    // `capital` starts with `cap` but is one identifier.
    assert_eq!(lex("capital"), vec![TokenKind::Ident]);
}

#[test]
fn builtin_names_stay_identifiers() {
    assert_eq!(
        lex("len abs str"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Ident]
    );
}

#[test]
fn ident_with_digits_and_underscore() {
    let tokens = lex_all("my_var2");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].text, "my_var2");
}

// ---------------------------------------------------------------------------
// Operators and punctuation
// ---------------------------------------------------------------------------

#[test]
fn bare_equals_is_rizz() {
    assert_eq!(
        lex("x = 5"),
        vec![TokenKind::Ident, TokenKind::Rizz, TokenKind::Number]
    );
}

#[test]
fn double_equals_is_eq() {
    assert_eq!(
        lex("1 == 2"),
        vec![TokenKind::Number, TokenKind::Eq, TokenKind::Number]
    );
}

#[test]
fn comparison_operators() {
    assert_eq!(
        lex("< > <= >="),
        vec![TokenKind::Lt, TokenKind::Gt, TokenKind::Lte, TokenKind::Gte]
    );
}

#[test]
fn arithmetic_and_punctuation() {
    assert_eq!(
        lex("+ - * / % ( ) { } ; ,"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Semicolon,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn logical_operators() {
    assert_eq!(lex("&& ||"), vec![TokenKind::And, TokenKind::Or]);
}

#[test]
fn lone_ampersand_becomes_eof() {
    let tokens = lex_all("a & b");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    assert_eq!(tokens[1].text, "&");
    // The lexer keeps scanning; the parser is what stops at the Eof tag.
    assert_eq!(tokens[2].kind, TokenKind::Ident);
}

#[test]
fn lone_pipe_becomes_eof() {
    let tokens = lex_all("|");
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].text, "|");
}

#[test]
fn unknown_byte_becomes_eof() {
    let tokens = lex_all("@");
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].text, "@");
}

// ---------------------------------------------------------------------------
// Comments, whitespace, lines
// ---------------------------------------------------------------------------

#[test]
fn comment_runs_to_end_of_line() {
    assert_eq!(
        lex("gyatt 1 bruh the rest is ignored\ngyatt 2"),
        vec![
            TokenKind::Gyatt,
            TokenKind::Number,
            TokenKind::Gyatt,
            TokenKind::Number,
        ]
    );
}

#[test]
fn comment_check_beats_identifier_scan() {
    // Even `bruhhh` opens a comment: the check is on the four bytes.
    assert_eq!(lex("bruhhh whatever"), vec![]);
}

#[test]
fn token_lines_are_one_based() {
    let tokens = lex_all("gyatt 1 ohio\ngyatt 2 ohio");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[3].line, 2);
}

#[test]
fn whitespace_is_discarded() {
    assert_eq!(lex(" \t\r\n  5 "), vec![TokenKind::Number]);
}

// ---------------------------------------------------------------------------
// Error and determinism
// ---------------------------------------------------------------------------

#[test]
fn empty_input_is_a_lex_error() {
    assert!(Lexer::new("").tokenize().is_err());
}

#[test]
fn lexing_is_deterministic() {
    let src = "skibidi x rizz 5 ohio bruh note\ngyatt x + 1 ohio";
    assert_eq!(lex_all(src), lex_all(src));
}
