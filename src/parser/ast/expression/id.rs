use crate::lexer::Position;

/// An identifier, either a variable reference in an expression or the name
/// of a declaration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Id<T> {
    pub name: String,
    pub info: T,
    pub position: Position,
}
