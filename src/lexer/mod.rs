//! # Lexer Module
//!
//! Tokenization stage of the BSL front-end. The lexer walks the raw source
//! bytes and produces [`Token`]s on demand with a single token of lookahead,
//! tracking 1-based line and column positions for error reporting.
//!
//! Character classification is ASCII only. Whitespace is skipped silently;
//! `#` starts a comment running through the end of the line. Identifiers are
//! matched against the keyword table and reclassified on a hit.

mod token;

pub use token::*;

use self::token::KEYWORDS;

use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LexError {
    pub message: String,
    pub position: Position,
}

pub type LexResult<T> = Result<T, LexError>;

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl Error for LexError {}

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    src: &'a [u8],
    cursor: usize,
    line: usize,
    col: usize,
    peeked: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            src: input.as_bytes(),
            cursor: 0,
            line: 1,
            col: 1,
            peeked: None,
        }
    }

    /// Consume and return the next token. Once the end of input is reached,
    /// every subsequent call returns [`Token::Eof`].
    pub fn next(&mut self) -> LexResult<Token> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }

        self.next_token()
    }

    /// Return the next token without consuming it. Idempotent.
    pub fn peek(&mut self) -> LexResult<Token> {
        if let Some(token) = &self.peeked {
            return Ok(token.clone());
        }

        let token = self.next_token()?;
        self.peeked = Some(token.clone());
        Ok(token)
    }

    /// Discard the next token (usually one just inspected via [`Lexer::peek`]).
    pub fn skip(&mut self) -> LexResult<()> {
        self.next().map(|_| ())
    }

    fn peek_byte(&self) -> Option<u8> {
        self.src.get(self.cursor).copied()
    }

    fn advance(&mut self) -> u8 {
        let c = self.src[self.cursor];
        self.cursor += 1;

        if c == b'\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }

        c
    }

    fn eat_whitespace(&mut self) {
        while let Some(c) = self.peek_byte() {
            if !c.is_ascii_whitespace() {
                return;
            }
            self.advance();
        }
    }

    fn next_token(&mut self) -> LexResult<Token> {
        self.eat_whitespace();

        while self.peek_byte() == Some(b'#') {
            while let Some(c) = self.peek_byte() {
                self.advance();
                if c == b'\n' {
                    break;
                }
            }
            self.eat_whitespace();
        }

        let position = (self.line, self.col);

        let Some(c) = self.peek_byte() else {
            return Ok(Token::Eof { position });
        };

        if c.is_ascii_alphabetic() || c == b'_' {
            return Ok(self.lex_symbol(position));
        }

        if c.is_ascii_digit() {
            return self.lex_numeric(position);
        }

        self.advance();

        let terminal = match c {
            b':' => Terminal::Colon,
            b'.' => Terminal::Period,
            b',' => Terminal::Comma,
            b'=' => Terminal::Assign,
            b'+' => Terminal::Plus,
            b'-' => Terminal::Minus,
            b'*' => Terminal::Times,
            b'/' => Terminal::Slash,
            b'<' => Terminal::LessThan,
            b'>' => Terminal::GreaterThan,
            b'{' => Terminal::LBrace,
            b'}' => Terminal::RBrace,
            b'[' => Terminal::LBracket,
            b']' => Terminal::RBracket,
            b'(' => Terminal::LParen,
            b')' => Terminal::RParen,
            _ => {
                return Err(LexError {
                    message: format!("unknown char '{}'", c as char),
                    position,
                })
            }
        };

        Ok(terminal.to_token(position))
    }

    fn lex_symbol(&mut self, position: Position) -> Token {
        let start = self.cursor;

        while let Some(c) = self.peek_byte() {
            if !(c.is_ascii_alphanumeric() || c == b'_') {
                break;
            }
            self.advance();
        }

        // the scanned bytes are ASCII alphanumerics and underscores
        let value = String::from_utf8_lossy(&self.src[start..self.cursor]).into_owned();

        match KEYWORDS.get(value.as_str()) {
            Some(terminal) => terminal.to_token(position),
            None => Token::Id { value, position },
        }
    }

    fn lex_numeric(&mut self, position: Position) -> LexResult<Token> {
        let start = self.cursor;

        while matches!(self.peek_byte(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        let is_float = self.peek_byte() == Some(b'.');
        if is_float {
            self.advance();
            while matches!(self.peek_byte(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = String::from_utf8_lossy(&self.src[start..self.cursor]).into_owned();

        let value = if is_float {
            Number::FloatingPoint(lexeme.parse().map_err(|_| LexError {
                message: format!("invalid numeric literal '{lexeme}'"),
                position,
            })?)
        } else {
            Number::Integer(lexeme.parse().map_err(|_| LexError {
                message: "integer literal out of range".into(),
                position,
            })?)
        };

        Ok(Token::Num { value, position })
    }
}
