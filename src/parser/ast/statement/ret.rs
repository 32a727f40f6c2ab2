use crate::lexer::Position;
use crate::parser::{ast::Expression, FromTokens, ParseError, Parser};

/// A `return expr` statement.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReturnStatement<T> {
    pub value: Expression<T>,
    pub info: T,
    pub position: Position,
}

impl ReturnStatement<()> {
    pub(crate) fn parse_body(
        parser: &mut Parser<'_>,
        position: Position,
    ) -> Result<Self, ParseError> {
        let value = Expression::parse(parser)?;

        Ok(ReturnStatement {
            value,
            info: (),
            position,
        })
    }
}
