use crate::lexer::{Position, Terminal, Token};
use crate::parser::{
    ast::{Expression, Id, TypeName},
    FromTokens, ParseError, Parser,
};

/// A variable introduction `var name [: Type] = expr`. The initializer is
/// mandatory; a declared type is optional and checked against the
/// initializer during resolution.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Initialisation<T> {
    pub id: Id<T>,
    pub type_name: Option<TypeName>,
    pub value: Expression<T>,
    pub info: T,
    pub position: Position,
}

impl Initialisation<()> {
    /// Parse the remainder of a `var` statement; the keyword has already
    /// been consumed and its position is passed in.
    pub(crate) fn parse_body(
        parser: &mut Parser<'_>,
        position: Position,
    ) -> Result<Self, ParseError> {
        let (name, name_position) = parser.expect_id("variable name")?;

        let type_name = if matches!(parser.lexer.peek()?, Token::Colon { .. }) {
            parser.lexer.skip()?;
            Some(TypeName::parse(parser)?)
        } else {
            None
        };

        parser.expect(Terminal::Assign, "'='")?;
        let value = Expression::parse(parser)?;

        Ok(Initialisation {
            id: Id {
                name,
                info: (),
                position: name_position,
            },
            type_name,
            value,
            info: (),
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::parser::ast::{Expression, Num, Statement, TypeName};
    use crate::parser::{FromTokens, ParseError, Parser};

    fn parse_initialisation(input: &str) -> Result<super::Initialisation<()>, ParseError> {
        let mut parser = Parser::new(Lexer::new(input));
        match Statement::parse(&mut parser)? {
            Statement::Initialisation(init) => Ok(init),
            other => panic!("expected an initialisation, got {other:?}"),
        }
    }

    #[test]
    fn test_simple_initialisation() {
        let result = parse_initialisation("var foo = 42").unwrap();

        assert_eq!(result.id.name, "foo");
        assert_eq!(result.type_name, None);
        assert!(matches!(result.value, Expression::Num(Num::Integer(42, (), _))));
    }

    #[test]
    fn test_initialisation_with_type_annotation() {
        let result = parse_initialisation("var foo: f32 = 4.2").unwrap();

        assert_eq!(result.id.name, "foo");
        assert!(matches!(result.type_name, Some(TypeName::Literal(ref name, _)) if name == "f32"));
        assert!(matches!(
            result.value,
            Expression::Num(Num::FloatingPoint(_, (), _))
        ));
    }

    #[test]
    fn test_initialisation_with_vector_annotation() {
        let result = parse_initialisation("var v: vec3<f32> = {1.0, 2.0, 3.0}").unwrap();

        assert!(matches!(result.type_name, Some(TypeName::Vector { size: 3, .. })));
        assert!(matches!(result.value, Expression::VectorLiteral(_)));
    }

    #[test]
    fn test_initializer_is_mandatory() {
        assert_eq!(
            Err(ParseError {
                message: "expected '='".into(),
                position: (1, 12),
            }),
            parse_initialisation("var x: f32 return")
        );
    }
}
