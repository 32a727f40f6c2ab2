use crate::lexer::{Position, Terminal, Token};
use crate::parser::{FromTokens, ParseError, Parser};

use super::Expression;

/// A record construction expression:
/// `record Name .field = expr, .field = expr, end`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordLiteral<T> {
    pub name: String,
    pub members: Vec<RecordLiteralMember<T>>,
    pub info: T,
    pub position: Position,
}

/// A single `.field = expr,` initializer. `entry` is the index of the
/// initialized field in the record's entry list, filled in by the type
/// checker.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordLiteralMember<T> {
    pub name: String,
    pub value: Expression<T>,
    pub entry: Option<usize>,
    pub position: Position,
}

impl RecordLiteral<()> {
    /// Parse the remainder of a record literal; the `record` keyword has
    /// already been consumed and its position is passed in.
    pub(crate) fn parse_body(
        parser: &mut Parser<'_>,
        position: Position,
    ) -> Result<Self, ParseError> {
        let (name, _) = parser.expect_id("record name")?;
        let mut members = vec![];

        loop {
            let token = parser.lexer.next()?;
            match token {
                Token::Period { .. } => {
                    let (member_name, member_position) = parser.expect_id("member name")?;
                    parser.expect(Terminal::Assign, "'='")?;
                    let value = Expression::parse(parser)?;
                    parser.expect(Terminal::Comma, "','")?;

                    members.push(RecordLiteralMember {
                        name: member_name,
                        value,
                        entry: None,
                        position: member_position,
                    });
                }
                Token::EndKeyword { .. } => {
                    return Ok(RecordLiteral {
                        name,
                        members,
                        info: (),
                        position,
                    })
                }
                _ => return Err(Parser::unexpected(&token, "record member")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::parser::{FromTokens, ParseError, Parser};

    use super::super::Expression;

    fn parse(input: &str) -> Result<Expression<()>, ParseError> {
        let mut parser = Parser::new(Lexer::new(input));
        Expression::parse(&mut parser)
    }

    #[test]
    fn test_parse_record_literal() {
        let Ok(Expression::RecordLiteral(record)) = parse("record P .x = 1.0, .y = 2.0, end")
        else {
            panic!("expected a record literal");
        };

        assert_eq!(record.name, "P");
        assert_eq!(record.members.len(), 2);
        assert_eq!(record.members[0].name, "x");
        assert_eq!(record.members[1].name, "y");
        assert!(record.members.iter().all(|member| member.entry.is_none()));
    }

    #[test]
    fn test_parse_empty_record_literal() {
        let Ok(Expression::RecordLiteral(record)) = parse("record P end") else {
            panic!("expected a record literal");
        };

        assert!(record.members.is_empty());
    }

    #[test]
    fn test_trailing_comma_is_required() {
        assert_eq!(
            Err(ParseError {
                message: "expected ','".into(),
                position: (1, 19),
            }),
            parse("record P .x = 1.0 end")
        );
    }
}
