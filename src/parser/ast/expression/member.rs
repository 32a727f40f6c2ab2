use crate::lexer::Position;

use super::Expression;

/// Member access `expr.field`. `entry` is the index of the field in the
/// defining record's entry list; it is `None` out of the parser and filled
/// in by the type checker.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemberAccess<T> {
    pub lhs: Box<Expression<T>>,
    pub member: String,
    pub entry: Option<usize>,
    pub info: T,
    pub position: Position,
}
