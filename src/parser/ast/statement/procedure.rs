use std::ops::{BitOr, BitOrAssign};

use crate::lexer::{Position, Terminal, Token};
use crate::parser::{
    ast::{Id, Statement, TypeName},
    FromTokens, ParseError, Parser,
};

/// Bitmask of GPU pipeline stages a procedure is exposed under, accumulated
/// from `[entry_point(...)]` attributes. Empty for helper procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct EntryPoint(u8);

impl EntryPoint {
    pub const VERTEX: EntryPoint = EntryPoint(1 << 0);
    pub const FRAGMENT: EntryPoint = EntryPoint(1 << 1);

    pub fn contains(self, other: EntryPoint) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for EntryPoint {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        EntryPoint(self.0 | rhs.0)
    }
}

impl BitOrAssign for EntryPoint {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parameter<T> {
    pub id: Id<T>,
    pub type_name: TypeName,
    pub position: Position,
}

impl FromTokens for Parameter<()> {
    fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let (name, position) = parser.expect_id("parameter name")?;
        parser.expect(Terminal::Colon, "':'")?;
        let type_name = TypeName::parse(parser)?;

        Ok(Parameter {
            id: Id {
                name,
                info: (),
                position,
            },
            type_name,
            position,
        })
    }
}

/// A toplevel `proc Name(params) Type ... end` declaration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Procedure<T> {
    pub id: Id<T>,
    pub parameters: Vec<Parameter<T>>,
    pub return_type: TypeName,
    pub statements: Vec<Statement<T>>,
    pub entry_point: EntryPoint,
    pub info: T,
    pub position: Position,
}

impl Procedure<()> {
    /// Parse the remainder of a procedure; the `proc` keyword has already
    /// been consumed and its position is passed in. The parser's pending
    /// entry point mask is claimed by this procedure.
    pub(crate) fn parse_body(
        parser: &mut Parser<'_>,
        position: Position,
    ) -> Result<Self, ParseError> {
        let (name, name_position) = parser.expect_id("procedure name")?;
        parser.expect(Terminal::LParen, "function arguments")?;

        let mut parameters = vec![];
        if matches!(parser.lexer.peek()?, Token::RParen { .. }) {
            parser.lexer.skip()?;
        } else {
            parameters.push(Parameter::parse(parser)?);

            loop {
                let token = parser.lexer.next()?;
                match token {
                    Token::Comma { .. } => parameters.push(Parameter::parse(parser)?),
                    Token::RParen { .. } => break,
                    _ => return Err(Parser::unexpected(&token, "function parameter")),
                }
            }
        }

        let return_type = TypeName::parse(parser)?;

        let mut statements = vec![];
        loop {
            let token = parser.lexer.peek()?;
            match token {
                Token::EndKeyword { .. } => {
                    parser.lexer.skip()?;
                    break;
                }
                Token::Eof { position } => return Err(ParseError::eof(position)),
                _ => statements.push(Statement::parse(parser)?),
            }
        }

        let entry_point = parser.take_entry_point();

        Ok(Procedure {
            id: Id {
                name,
                info: (),
                position: name_position,
            },
            parameters,
            return_type,
            statements,
            entry_point,
            info: (),
            position,
        })
    }
}
