use crate::lexer::{Position, Token};
use crate::parser::{FromTokens, ParseError, Parser};

use super::Expression;

/// A vector construction expression `{ e1, e2, ... }`. Operands may be
/// scalars or smaller vectors; the type checker flattens them and checks
/// the total size.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VectorLiteral<T> {
    pub elements: Vec<Expression<T>>,
    pub info: T,
    pub position: Position,
}

impl VectorLiteral<()> {
    /// Parse the remainder of a vector literal; the opening brace has
    /// already been consumed and its position is passed in.
    pub(crate) fn parse_body(
        parser: &mut Parser<'_>,
        position: Position,
    ) -> Result<Self, ParseError> {
        let mut elements = vec![Expression::parse(parser)?];

        loop {
            let token = parser.lexer.next()?;
            match token {
                Token::Comma { .. } => elements.push(Expression::parse(parser)?),
                Token::RBrace { .. } => {
                    return Ok(VectorLiteral {
                        elements,
                        info: (),
                        position,
                    })
                }
                _ => return Err(Parser::unexpected(&token, "comma")),
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
    fn test_parse_vector_literal() {
        let Ok(Expression::VectorLiteral(vector)) = parse("{1.0, 2.0, 3.0}") else {
            panic!("expected a vector literal");
        };

        assert_eq!(vector.elements.len(), 3);
        assert_eq!(vector.position, (1, 1));
    }

    #[test]
    fn test_vector_literal_with_nested_expressions() {
        let Ok(Expression::VectorLiteral(vector)) = parse("{a.x, 1.0 + 2.0}") else {
            panic!("expected a vector literal");
        };

        assert!(matches!(vector.elements[0], Expression::Member(_)));
        assert!(matches!(vector.elements[1], Expression::Binary(_)));
    }

    #[test]
    fn test_vector_literal_requires_an_element() {
        assert_eq!(
            Err(ParseError {
                message: "expected expression".into(),
                position: (1, 2),
            }),
            parse("{}")
        );
    }

    #[test]
    fn test_unterminated_vector_literal() {
        assert_eq!(
            Err(ParseError {
                message: "expected comma".into(),
                position: (1, 6),
            }),
            parse("{1.0 2.0}")
        );
    }
}
