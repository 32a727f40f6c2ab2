use std::fmt::Display;

use crate::lexer::{Position, Terminal, Token};
use crate::parser::{FromTokens, ParseError, Parser};

/// A type written in the source, before resolution. Named references are
/// kept verbatim; only the `vec2`/`vec3`/`vec4` constructors are recognized
/// structurally at parse time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TypeName {
    Literal(String, Position),
    Vector {
        size: u8,
        elem: Box<TypeName>,
        position: Position,
    },
}

impl TypeName {
    pub fn position(&self) -> Position {
        match self {
            TypeName::Literal(_, position) => *position,
            TypeName::Vector { position, .. } => *position,
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeName::Literal(name, _) => f.write_str(name.as_str()),
            TypeName::Vector { size, elem, .. } => {
                f.write_fmt(format_args!("vec{size}<{elem}>"))
            }
        }
    }
}

impl FromTokens for TypeName {
    fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let token = parser.lexer.next()?;

        match token {
            Token::Id { value, position } => match value.as_str() {
                "vec2" => Self::parse_vector(parser, 2, position),
                "vec3" => Self::parse_vector(parser, 3, position),
                "vec4" => Self::parse_vector(parser, 4, position),
                _ => Ok(TypeName::Literal(value, position)),
            },
            Token::Eof { position } => Err(ParseError::eof(position)),
            _ => Err(Parser::unexpected(&token, "type")),
        }
    }
}

impl TypeName {
    fn parse_vector(
        parser: &mut Parser<'_>,
        size: u8,
        position: Position,
    ) -> Result<Self, ParseError> {
        parser.expect(Terminal::LessThan, "vector parameter")?;
        let elem = TypeName::parse(parser)?;
        parser.expect(Terminal::GreaterThan, "closing angled bracket")?;

        Ok(TypeName::Vector {
            size,
            elem: Box::new(elem),
            position,
        })
    }
}
