mod initialisation;
mod procedure;
mod record_declaration;
mod ret;

pub use self::initialisation::*;
pub use self::procedure::*;
pub use self::record_declaration::*;
pub use self::ret::*;

use crate::lexer::{Position, Token};
use crate::parser::{FromTokens, ParseError, Parser};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Statement<T> {
    Initialisation(Initialisation<T>),
    Return(ReturnStatement<T>),
}

impl<T> Statement<T> {
    pub fn position(&self) -> Position {
        match self {
            Statement::Initialisation(Initialisation { position, .. })
            | Statement::Return(ReturnStatement { position, .. }) => *position,
        }
    }
}

impl FromTokens for Statement<()> {
    fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let token = parser.lexer.peek()?;

        match token {
            Token::VarKeyword { position } => {
                parser.lexer.skip()?;
                Ok(Statement::Initialisation(Initialisation::parse_body(
                    parser, position,
                )?))
            }
            Token::ReturnKeyword { position } => {
                parser.lexer.skip()?;
                Ok(Statement::Return(ReturnStatement::parse_body(
                    parser, position,
                )?))
            }
            _ => Err(Parser::unexpected(&token, "statement")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TopLevelStatement<T> {
    RecordDeclaration(RecordDeclaration<T>),
    Procedure(Procedure<T>),
}

impl<T> TopLevelStatement<T> {
    pub fn position(&self) -> Position {
        match self {
            TopLevelStatement::RecordDeclaration(RecordDeclaration { position, .. })
            | TopLevelStatement::Procedure(Procedure { position, .. }) => *position,
        }
    }
}

impl FromTokens for TopLevelStatement<()> {
    fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        loop {
            let token = parser.lexer.peek()?;

            match token {
                Token::LBracket { .. } => {
                    parser.lexer.skip()?;
                    parser.parse_toplevel_attribute()?;
                }
                Token::RecordKeyword { position } => {
                    parser.lexer.skip()?;

                    if !parser.pending_entry_point().is_empty() {
                        return Err(ParseError {
                            message: "entry_point attribute cannot be applied to a record".into(),
                            position,
                        });
                    }

                    return Ok(TopLevelStatement::RecordDeclaration(
                        RecordDeclaration::parse_body(parser, position)?,
                    ));
                }
                Token::ProcKeyword { position } => {
                    parser.lexer.skip()?;
                    return Ok(TopLevelStatement::Procedure(Procedure::parse_body(
                        parser, position,
                    )?));
                }
                _ => return Err(Parser::unexpected(&token, "toplevel")),
            }
        }
    }
}
