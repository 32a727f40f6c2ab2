//! # Parser Module
//!
//! Recursive descent parser for BSL. The parser pulls tokens from the
//! [`Lexer`] with a single token of lookahead and produces a list of
//! [`TopLevelStatement`] nodes in source order.
//!
//! Arithmetic uses a two level precedence chain (`add` over `mul`), with
//! member access binding tighter than both and parentheses overriding.
//! There is no error recovery: the first syntactic error aborts the parse.

pub mod ast;

use std::{error::Error, fmt::Display};

use crate::lexer::{LexError, Lexer, Position, Terminal, Token};

use self::ast::{EntryPoint, TopLevelStatement};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseError {
    pub message: String,
    pub position: Position,
}

impl ParseError {
    pub fn eof(position: Position) -> ParseError {
        ParseError {
            message: "unexpected end of file".into(),
            position,
        }
    }

    pub fn expected(item: &str, position: Position) -> ParseError {
        ParseError {
            message: format!("expected {item}"),
            position,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(value: LexError) -> Self {
        ParseError {
            message: value.message,
            position: value.position,
        }
    }
}

/// Trait for AST nodes which can be parsed from the token stream.
pub trait FromTokens: Sized {
    fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError>;
}

pub struct Parser<'a> {
    pub(crate) lexer: Lexer<'a>,
    next_entry_point: EntryPoint,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            next_entry_point: EntryPoint::default(),
        }
    }

    /// Consume the entire token stream and return the toplevel declarations
    /// in source order.
    pub fn parse_ast(mut self) -> Result<Vec<TopLevelStatement<()>>, ParseError> {
        let mut toplevels = vec![];

        while !matches!(self.lexer.peek()?, Token::Eof { .. }) {
            toplevels.push(TopLevelStatement::parse(&mut self)?);
        }

        Ok(toplevels)
    }

    /// Consume the next token, requiring it to match the given terminal.
    /// `item` is the human readable name used in the error message.
    pub(crate) fn expect(&mut self, terminal: Terminal, item: &str) -> Result<Token, ParseError> {
        let token = self.lexer.next()?;

        if terminal == token {
            return Ok(token);
        }

        Err(Self::unexpected(&token, item))
    }

    /// Consume the next token, requiring an identifier, and return its
    /// lexeme together with its position.
    pub(crate) fn expect_id(&mut self, item: &str) -> Result<(String, Position), ParseError> {
        let token = self.lexer.next()?;

        match token {
            Token::Id { value, position } => Ok((value, position)),
            _ => Err(Self::unexpected(&token, item)),
        }
    }

    pub(crate) fn unexpected(token: &Token, item: &str) -> ParseError {
        match token {
            Token::Eof { position } => ParseError::eof(*position),
            _ => ParseError::expected(item, token.position()),
        }
    }

    /// Parse a single toplevel attribute after its opening bracket has been
    /// consumed. Entry point attributes accumulate into a bitmask which is
    /// attached to the next parsed procedure.
    pub(crate) fn parse_toplevel_attribute(&mut self) -> Result<(), ParseError> {
        let (name, position) = self.expect_id("attribute name")?;

        if name != "entry_point" {
            return Err(ParseError {
                message: format!("unknown attribute '{name}'"),
                position,
            });
        }

        self.expect(Terminal::LParen, "entry point name")?;
        let (entry, entry_position) = self.expect_id("entry point name")?;

        match entry.as_str() {
            "vertex" => self.next_entry_point |= EntryPoint::VERTEX,
            "fragment" => self.next_entry_point |= EntryPoint::FRAGMENT,
            _ => {
                return Err(ParseError {
                    message: format!("unknown entry point '{entry}'"),
                    position: entry_position,
                })
            }
        }

        self.expect(Terminal::RParen, "right parenthesis")?;
        self.expect(Terminal::RBracket, "right bracket")?;

        Ok(())
    }

    pub(crate) fn pending_entry_point(&self) -> EntryPoint {
        self.next_entry_point
    }

    pub(crate) fn take_entry_point(&mut self) -> EntryPoint {
        std::mem::take(&mut self.next_entry_point)
    }
}
