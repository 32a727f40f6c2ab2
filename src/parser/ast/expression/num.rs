use crate::lexer::{Number, Position};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Num<T> {
    Integer(i64, T, Position),
    FloatingPoint(f64, T, Position),
}

impl<T> Num<T>
where
    T: Clone,
{
    pub fn get_info(&self) -> T {
        match self {
            Num::Integer(_, info, _) => info.clone(),
            Num::FloatingPoint(_, info, _) => info.clone(),
        }
    }
}

impl<T> Num<T> {
    pub fn position(&self) -> Position {
        match self {
            Num::Integer(_, _, position) => *position,
            Num::FloatingPoint(_, _, position) => *position,
        }
    }
}

impl Num<()> {
    pub(crate) fn from_number(value: Number, position: Position) -> Self {
        match value {
            Number::Integer(value) => Num::Integer(value, (), position),
            Number::FloatingPoint(value) => Num::FloatingPoint(value, (), position),
        }
    }
}
