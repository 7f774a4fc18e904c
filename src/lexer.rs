use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Skibidi, // variable declaration
    Rizz,    // assignment (also the bare `=` symbol)
    Cap,     // if
    Nocap,   // else
    Bussin,  // while
    Gyatt,   // print
    Ohio,    // statement terminator
    Sigma,   // function declaration
    Alpha,   // return
    Beta,    // call statement prefix
    Gyatfor, // C-style for
    Input,   // read a line from stdin
    True,
    False,
    // Literals
    Number,
    Str,
    Ident,
    // Operators
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Eq,      // ==
    Lt,      // <
    Gt,      // >
    Lte,     // <=
    Gte,     // >=
    And,     // &&
    Or,      // ||
    // Punctuation
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;
    Comma,     // ,
    Eof,
}

/// One lexed token: categorical tag, literal spelling (decoded contents for
/// strings), and the 1-based source line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
        }
    }
}

#[derive(Debug, Error)]
pub enum LexError {
    #[error("No source to lex")]
    EmptyInput,
}

fn keyword(s: &str) -> Option<TokenKind> {
    match s {
        "skibidi" => Some(TokenKind::Skibidi),
        "rizz" => Some(TokenKind::Rizz),
        "cap" => Some(TokenKind::Cap),
        "nocap" => Some(TokenKind::Nocap),
        "bussin" => Some(TokenKind::Bussin),
        "gyatt" => Some(TokenKind::Gyatt),
        "ohio" => Some(TokenKind::Ohio),
        "sigma" => Some(TokenKind::Sigma),
        "alpha" => Some(TokenKind::Alpha),
        "beta" => Some(TokenKind::Beta),
        "gyatfor" => Some(TokenKind::Gyatfor),
        "input" => Some(TokenKind::Input),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        _ => None,
    }
}

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Lex the whole source. Stray bytes do not abort the scan: they become
    /// `Eof` tokens carrying the offending spelling, and the parser stops at
    /// the first `Eof` tag it sees.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        if self.chars.is_empty() {
            return Err(LexError::EmptyInput);
        }

        let mut tokens = Vec::new();
        while self.pos < self.chars.len() {
            if let Some(tok) = self.scan_token() {
                tokens.push(tok);
            }
        }
        tokens.push(Token::new(TokenKind::Eof, "", self.line));
        Ok(tokens)
    }

    fn scan_token(&mut self) -> Option<Token> {
        let ch = self.current()?;

        if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
            self.advance();
            return None;
        }

        // Comment check runs before identifier scanning: any four bytes
        // spelling `bruh` start a comment, even mid-word spellings like
        // `bruhh`.
        if self.at_comment() {
            while let Some(c) = self.current() {
                if c == '\n' {
                    break;
                }
                self.advance();
            }
            return None;
        }

        if ch.is_ascii_alphabetic() {
            return Some(self.scan_identifier());
        }

        if ch.is_ascii_digit() {
            return Some(self.scan_number());
        }

        if ch == '"' {
            return Some(self.scan_string());
        }

        Some(self.scan_operator())
    }

    fn at_comment(&self) -> bool {
        self.chars
            .get(self.pos..self.pos + 4)
            .map_or(false, |w| w == ['b', 'r', 'u', 'h'])
    }

    fn scan_identifier(&mut self) -> Token {
        let line = self.line;
        let mut ident = String::new();

        while let Some(c) = self.current() {
            if c.is_ascii_alphanumeric() || c == '_' {
                ident.push(c);
                self.advance();
            } else {
                break;
            }
        }

        // `len`, `abs` and `str` stay plain identifiers; the evaluator
        // intercepts them by name at call sites.
        let kind = keyword(&ident).unwrap_or(TokenKind::Ident);
        Token::new(kind, ident, line)
    }

    fn scan_number(&mut self) -> Token {
        let line = self.line;
        let mut num = String::new();
        let mut saw_dot = false;

        while let Some(c) = self.current() {
            if c.is_ascii_digit() {
                num.push(c);
                self.advance();
            } else if c == '.' && !saw_dot {
                saw_dot = true;
                num.push(c);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Number, num, line)
    }

    fn scan_string(&mut self) -> Token {
        let line = self.line;
        self.advance(); // consume opening "

        let mut text = String::new();
        loop {
            match self.current() {
                // Unterminated string: end silently at EOF.
                None => break,
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.advance() {
                        Some('n') => text.push('\n'),
                        Some('t') => text.push('\t'),
                        Some('r') => text.push('\r'),
                        Some('"') => text.push('"'),
                        Some('\\') => text.push('\\'),
                        Some(c) => text.push(c),
                        None => break,
                    }
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }

        Token::new(TokenKind::Str, text, line)
    }

    fn scan_operator(&mut self) -> Token {
        let line = self.line;
        let ch = match self.advance() {
            Some(c) => c,
            None => return Token::new(TokenKind::Eof, "", line),
        };

        match ch {
            '+' => Token::new(TokenKind::Plus, "+", line),
            '-' => Token::new(TokenKind::Minus, "-", line),
            '*' => Token::new(TokenKind::Star, "*", line),
            '/' => Token::new(TokenKind::Slash, "/", line),
            '%' => Token::new(TokenKind::Percent, "%", line),
            '(' => Token::new(TokenKind::LParen, "(", line),
            ')' => Token::new(TokenKind::RParen, ")", line),
            '{' => Token::new(TokenKind::LBrace, "{", line),
            '}' => Token::new(TokenKind::RBrace, "}", line),
            ';' => Token::new(TokenKind::Semicolon, ";", line),
            ',' => Token::new(TokenKind::Comma, ",", line),
            '=' => {
                if self.current() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Eq, "==", line)
                } else {
                    // Bare `=` is the symbolic spelling of `rizz`.
                    Token::new(TokenKind::Rizz, "=", line)
                }
            }
            '<' => {
                if self.current() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Lte, "<=", line)
                } else {
                    Token::new(TokenKind::Lt, "<", line)
                }
            }
            '>' => {
                if self.current() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Gte, ">=", line)
                } else {
                    Token::new(TokenKind::Gt, ">", line)
                }
            }
            '&' => {
                if self.current() == Some('&') {
                    self.advance();
                    Token::new(TokenKind::And, "&&", line)
                } else {
                    // Unmatched `&` ends the stream; the parser reports it.
                    Token::new(TokenKind::Eof, "&", line)
                }
            }
            '|' => {
                if self.current() == Some('|') {
                    self.advance();
                    Token::new(TokenKind::Or, "||", line)
                } else {
                    Token::new(TokenKind::Eof, "|", line)
                }
            }
            other => Token::new(TokenKind::Eof, other.to_string(), line),
        }
    }
}
