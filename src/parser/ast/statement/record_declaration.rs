use crate::lexer::{Number, Position, Terminal, Token};
use crate::parser::{
    ast::{Id, TypeName},
    FromTokens, ParseError, Parser,
};

/// Builtin semantics a record field can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Builtin {
    ClipPosition,
}

/// Shader interface kind of a record field. `Input` and `Output` carry the
/// attribute/varying slot their binding index names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RecordMemberKind {
    Normal,
    Input(u32),
    Output(u32),
    Builtin(Builtin),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordMemberDeclaration {
    pub kind: RecordMemberKind,
    pub name: String,
    pub type_name: TypeName,
    pub position: Position,
}

/// A toplevel `record Name ... end` declaration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordDeclaration<T> {
    pub id: Id<T>,
    pub members: Vec<RecordMemberDeclaration>,
    pub info: T,
    pub position: Position,
}

impl RecordDeclaration<()> {
    /// Parse the remainder of a record declaration; the `record` keyword
    /// has already been consumed and its position is passed in.
    pub(crate) fn parse_body(
        parser: &mut Parser<'_>,
        position: Position,
    ) -> Result<Self, ParseError> {
        let (name, name_position) = parser.expect_id("record name")?;
        let mut members = vec![];

        loop {
            let token = parser.lexer.next()?;

            let (kind, member_name, member_position) = match token {
                Token::Id { value, position } => (RecordMemberKind::Normal, value, position),
                Token::LBracket { .. } => {
                    let kind = Self::parse_member_attribute(parser)?;
                    let (value, position) = parser.expect_id("member name")?;
                    (kind, value, position)
                }
                Token::EndKeyword { .. } => {
                    return Ok(RecordDeclaration {
                        id: Id {
                            name,
                            info: (),
                            position: name_position,
                        },
                        members,
                        info: (),
                        position,
                    })
                }
                _ => return Err(Parser::unexpected(&token, "record member")),
            };

            parser.expect(Terminal::Colon, "':'")?;
            let type_name = TypeName::parse(parser)?;

            members.push(RecordMemberDeclaration {
                kind,
                name: member_name,
                type_name,
                position: member_position,
            });
        }
    }

    fn parse_member_attribute(parser: &mut Parser<'_>) -> Result<RecordMemberKind, ParseError> {
        let (name, position) = parser.expect_id("attribute name")?;

        let kind = match name.as_str() {
            "builtin" => {
                parser.expect(Terminal::LParen, "left parenthesis")?;
                let (builtin, builtin_position) = parser.expect_id("name of builtin")?;

                if builtin != "position" {
                    return Err(ParseError {
                        message: format!("unknown builtin name: '{builtin}'"),
                        position: builtin_position,
                    });
                }

                parser.expect(Terminal::RParen, "right parenthesis")?;
                RecordMemberKind::Builtin(Builtin::ClipPosition)
            }
            "input" => RecordMemberKind::Input(Self::parse_binding(parser, "input binding")?),
            "output" => RecordMemberKind::Output(Self::parse_binding(parser, "output binding")?),
            _ => {
                return Err(ParseError {
                    message: format!("unknown attribute name: '{name}'"),
                    position,
                })
            }
        };

        parser.expect(Terminal::RBracket, "right bracket")?;

        Ok(kind)
    }

    fn parse_binding(parser: &mut Parser<'_>, item: &str) -> Result<u32, ParseError> {
        parser.expect(Terminal::LParen, "left parenthesis")?;

        let token = parser.lexer.next()?;
        let Token::Num { value, position } = token else {
            return Err(Parser::unexpected(&token, item));
        };

        let Number::Integer(value) = value else {
            return Err(ParseError {
                message: "binding must be an integer".into(),
                position,
            });
        };

        let binding = u32::try_from(value).map_err(|_| ParseError {
            message: "binding index out of range".into(),
            position,
        })?;

        parser.expect(Terminal::RParen, "right parenthesis")?;

        Ok(binding)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::parser::ast::TopLevelStatement;
    use crate::parser::{FromTokens, ParseError, Parser};

    use super::*;

    fn parse_record(input: &str) -> Result<RecordDeclaration<()>, ParseError> {
        let mut parser = Parser::new(Lexer::new(input));
        match TopLevelStatement::parse(&mut parser)? {
            TopLevelStatement::RecordDeclaration(record) => Ok(record),
            other => panic!("expected a record declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_plain_record() {
        let record = parse_record("record P x: f32 y: f32 end").unwrap();

        assert_eq!(record.id.name, "P");
        assert_eq!(record.members.len(), 2);
        assert_eq!(record.members[0].name, "x");
        assert_eq!(record.members[0].kind, RecordMemberKind::Normal);
        assert_eq!(record.members[1].name, "y");
    }

    #[test]
    fn test_parse_empty_record() {
        let record = parse_record("record Empty end").unwrap();
        assert!(record.members.is_empty());
    }

    #[test]
    fn test_members_are_kept_in_source_order() {
        let record = parse_record("record V a: f32 b: f64 c: vec2<f32> end").unwrap();

        let names = record
            .members
            .iter()
            .map(|member| member.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(vec!["a", "b", "c"], names);
    }

    #[test]
    fn test_parse_annotated_members() {
        let record = parse_record(
            "record Vertex [input(0)] pos: vec3<f32> [output(1)] colour: vec4<f32> [builtin(position)] clip: vec4<f32> end",
        )
        .unwrap();

        assert_eq!(record.members[0].kind, RecordMemberKind::Input(0));
        assert_eq!(record.members[1].kind, RecordMemberKind::Output(1));
        assert_eq!(
            record.members[2].kind,
            RecordMemberKind::Builtin(Builtin::ClipPosition)
        );
    }

    #[test]
    fn test_unknown_builtin_name() {
        let result = parse_record("record R [builtin(color)] c: vec4<f32> end");

        assert_eq!(
            Err(ParseError {
                message: "unknown builtin name: 'color'".into(),
                position: (1, 19),
            }),
            result
        );
    }

    #[test]
    fn test_unknown_member_attribute() {
        let result = parse_record("record R [location(0)] c: vec4<f32> end");

        assert_eq!(
            Err(ParseError {
                message: "unknown attribute name: 'location'".into(),
                position: (1, 11),
            }),
            result
        );
    }

    #[test]
    fn test_binding_must_be_an_integer() {
        let result = parse_record("record R [input(1.5)] c: f32 end");

        assert_eq!(
            Err(ParseError {
                message: "binding must be an integer".into(),
                position: (1, 17),
            }),
            result
        );
    }

    #[test]
    fn test_member_requires_colon() {
        let result = parse_record("record R x f32 end");

        assert_eq!(
            Err(ParseError {
                message: "expected ':'".into(),
                position: (1, 12),
            }),
            result
        );
    }
}
