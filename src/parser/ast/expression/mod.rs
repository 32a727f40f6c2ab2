mod binary;
mod id;
mod member;
mod num;
mod record_literal;
mod vector_literal;

pub use self::binary::*;
pub use self::id::*;
pub use self::member::*;
pub use self::num::*;
pub use self::record_literal::*;
pub use self::vector_literal::*;

use crate::lexer::{Position, Terminal, Token};
use crate::parser::{FromTokens, ParseError, Parser};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Expression<T> {
    Id(Id<T>),
    Num(Num<T>),
    Binary(BinaryExpression<T>),
    Member(MemberAccess<T>),
    RecordLiteral(RecordLiteral<T>),
    VectorLiteral(VectorLiteral<T>),
}

impl<T> Expression<T>
where
    T: Clone,
{
    pub fn get_info(&self) -> T {
        match self {
            Expression::Id(Id { info, .. })
            | Expression::Binary(BinaryExpression { info, .. })
            | Expression::Member(MemberAccess { info, .. })
            | Expression::RecordLiteral(RecordLiteral { info, .. })
            | Expression::VectorLiteral(VectorLiteral { info, .. }) => info.clone(),
            Expression::Num(num) => num.get_info(),
        }
    }
}

impl<T> Expression<T> {
    pub fn position(&self) -> Position {
        match self {
            Expression::Id(Id { position, .. })
            | Expression::Binary(BinaryExpression { position, .. })
            | Expression::Member(MemberAccess { position, .. })
            | Expression::RecordLiteral(RecordLiteral { position, .. })
            | Expression::VectorLiteral(VectorLiteral { position, .. }) => *position,
            Expression::Num(num) => num.position(),
        }
    }
}

impl FromTokens for Expression<()> {
    fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Self::parse_add(parser)
    }
}

impl Expression<()> {
    fn parse_add(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let mut lhs = Self::parse_mul(parser)?;

        loop {
            let operator = match parser.lexer.peek()? {
                Token::Plus { .. } => BinaryOperator::Add,
                Token::Minus { .. } => BinaryOperator::Subtract,
                _ => return Ok(lhs),
            };
            parser.lexer.skip()?;

            let rhs = Self::parse_mul(parser)?;
            lhs = Self::binary(operator, lhs, rhs);
        }
    }

    fn parse_mul(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let mut lhs = Self::parse_member(parser)?;

        loop {
            let operator = match parser.lexer.peek()? {
                Token::Times { .. } => BinaryOperator::Multiply,
                Token::Slash { .. } => BinaryOperator::Divide,
                _ => return Ok(lhs),
            };
            parser.lexer.skip()?;

            let rhs = Self::parse_member(parser)?;
            lhs = Self::binary(operator, lhs, rhs);
        }
    }

    fn parse_member(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let mut lhs = Self::parse_atom(parser)?;

        while matches!(parser.lexer.peek()?, Token::Period { .. }) {
            parser.lexer.skip()?;
            let (member, _) = parser.expect_id("member name")?;

            let position = lhs.position();
            lhs = Expression::Member(MemberAccess {
                lhs: Box::new(lhs),
                member,
                entry: None,
                info: (),
                position,
            });
        }

        Ok(lhs)
    }

    fn parse_atom(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let token = parser.lexer.peek()?;

        match token {
            Token::RecordKeyword { position } => {
                parser.lexer.skip()?;
                Ok(Expression::RecordLiteral(RecordLiteral::parse_body(
                    parser, position,
                )?))
            }
            Token::LBrace { position } => {
                parser.lexer.skip()?;
                Ok(Expression::VectorLiteral(VectorLiteral::parse_body(
                    parser, position,
                )?))
            }
            Token::LParen { .. } => {
                parser.lexer.skip()?;
                let inner = Expression::parse(parser)?;
                parser.expect(Terminal::RParen, "right parenthesis")?;
                Ok(inner)
            }
            Token::Num { value, position } => {
                parser.lexer.skip()?;
                Ok(Expression::Num(Num::from_number(value, position)))
            }
            Token::Id { value, position } => {
                parser.lexer.skip()?;
                Ok(Expression::Id(Id {
                    name: value,
                    info: (),
                    position,
                }))
            }
            _ => Err(Parser::unexpected(&token, "expression")),
        }
    }

    fn binary(operator: BinaryOperator, lhs: Self, rhs: Self) -> Self {
        let position = lhs.position();

        Expression::Binary(BinaryExpression {
            left: Box::new(lhs),
            right: Box::new(rhs),
            operator,
            info: (),
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::parser::{FromTokens, ParseError, Parser};

    use super::*;

    fn parse(input: &str) -> Result<Expression<()>, ParseError> {
        let mut parser = Parser::new(Lexer::new(input));
        Expression::parse(&mut parser)
    }

    #[test]
    fn test_mul_binds_tighter_than_add() {
        let Ok(Expression::Binary(add)) = parse("1.0 + 2.0 * 3.0") else {
            panic!("expected a binary expression");
        };

        assert_eq!(add.operator, BinaryOperator::Add);
        assert!(matches!(*add.left, Expression::Num(_)));
        assert!(matches!(
            &*add.right,
            Expression::Binary(mul) if mul.operator == BinaryOperator::Multiply
        ));
    }

    #[test]
    fn test_addition_is_left_associative() {
        let Ok(Expression::Binary(outer)) = parse("1.0 - 2.0 - 3.0") else {
            panic!("expected a binary expression");
        };

        assert_eq!(outer.operator, BinaryOperator::Subtract);
        assert!(matches!(
            &*outer.left,
            Expression::Binary(inner) if inner.operator == BinaryOperator::Subtract
        ));
        assert!(matches!(*outer.right, Expression::Num(_)));
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let Ok(Expression::Binary(mul)) = parse("(1.0 + 2.0) * 3.0") else {
            panic!("expected a binary expression");
        };

        assert_eq!(mul.operator, BinaryOperator::Multiply);
        assert!(matches!(
            &*mul.left,
            Expression::Binary(add) if add.operator == BinaryOperator::Add
        ));
    }

    #[test]
    fn test_member_access_binds_tighter_than_mul() {
        let Ok(Expression::Binary(mul)) = parse("a.x * b") else {
            panic!("expected a binary expression");
        };

        assert_eq!(mul.operator, BinaryOperator::Multiply);
        assert!(matches!(&*mul.left, Expression::Member(member) if member.member == "x"));
    }

    #[test]
    fn test_chained_member_access() {
        let Ok(Expression::Member(outer)) = parse("a.b.c") else {
            panic!("expected a member access");
        };

        assert_eq!(outer.member, "c");
        assert!(matches!(&*outer.lhs, Expression::Member(inner) if inner.member == "b"));
    }

    #[test]
    fn test_binary_position_is_the_left_operand() {
        let Ok(Expression::Binary(add)) = parse("  x + y") else {
            panic!("expected a binary expression");
        };

        assert_eq!(add.position, (1, 3));
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(
            Err(ParseError {
                message: "expected expression".into(),
                position: (1, 7),
            }),
            parse("1.0 + end")
        );
    }

    #[test]
    fn test_operand_cut_off_by_eof() {
        assert_eq!(
            Err(ParseError {
                message: "unexpected end of file".into(),
                position: (1, 6),
            }),
            parse("1.0 +")
        );
    }

    #[test]
    fn test_unclosed_parenthesis() {
        assert_eq!(
            Err(ParseError {
                message: "expected right parenthesis".into(),
                position: (1, 6),
            }),
            parse("(1.0 end")
        );
    }
}
