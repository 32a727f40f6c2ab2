use std::{error::Error, fmt::Display};

use crate::lexer::Position;

use super::types::Type;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeCheckError {
    RedeclaredToplevel(RedeclaredToplevel, Position),
    RedeclaredRecord(RedeclaredRecord, Position),
    RedeclaredVariable(RedeclaredVariable, Position),
    ParameterShadowing(ParameterShadowing, Position),
    UndefinedVariable(UndefinedVariable, Position),
    UndefinedRecordType(UndefinedRecordType, Position),
    UndefinedType(UndefinedType, Position),
    UnknownMember(UnknownMember, Position),
    NotARecord(NotARecord, Position),
    ProcedureAsValue(ProcedureAsValue, Position),
    TypeMismatch(TypeMismatch, Position),
    IncompatibleRecordTypes(IncompatibleRecordTypes, Position),
    DifferentVectorSizes(DifferentVectorSizes, Position),
    InvalidArithmetic(InvalidArithmetic, Position),
    MixedScalarVectorAddition(MixedScalarVectorAddition, Position),
    MixedVectorScalarMultiplication(MixedVectorScalarMultiplication, Position),
    VectorOperandMismatch(VectorOperandMismatch, Position),
    VectorTooLarge(VectorTooLarge, Position),
    MissingReturn(MissingReturn, Position),
    IncompatibleReturnType(IncompatibleReturnType, Position),
}

impl TypeCheckError {
    pub fn position(&self) -> Position {
        match self {
            TypeCheckError::RedeclaredToplevel(_, position)
            | TypeCheckError::RedeclaredRecord(_, position)
            | TypeCheckError::RedeclaredVariable(_, position)
            | TypeCheckError::ParameterShadowing(_, position)
            | TypeCheckError::UndefinedVariable(_, position)
            | TypeCheckError::UndefinedRecordType(_, position)
            | TypeCheckError::UndefinedType(_, position)
            | TypeCheckError::UnknownMember(_, position)
            | TypeCheckError::NotARecord(_, position)
            | TypeCheckError::ProcedureAsValue(_, position)
            | TypeCheckError::TypeMismatch(_, position)
            | TypeCheckError::IncompatibleRecordTypes(_, position)
            | TypeCheckError::DifferentVectorSizes(_, position)
            | TypeCheckError::InvalidArithmetic(_, position)
            | TypeCheckError::MixedScalarVectorAddition(_, position)
            | TypeCheckError::MixedVectorScalarMultiplication(_, position)
            | TypeCheckError::VectorOperandMismatch(_, position)
            | TypeCheckError::VectorTooLarge(_, position)
            | TypeCheckError::MissingReturn(_, position)
            | TypeCheckError::IncompatibleReturnType(_, position) => *position,
        }
    }

    fn err(&self) -> Box<dyn Error> {
        match self {
            TypeCheckError::RedeclaredToplevel(e, _) => Box::new(e.clone()),
            TypeCheckError::RedeclaredRecord(e, _) => Box::new(e.clone()),
            TypeCheckError::RedeclaredVariable(e, _) => Box::new(e.clone()),
            TypeCheckError::ParameterShadowing(e, _) => Box::new(e.clone()),
            TypeCheckError::UndefinedVariable(e, _) => Box::new(e.clone()),
            TypeCheckError::UndefinedRecordType(e, _) => Box::new(e.clone()),
            TypeCheckError::UndefinedType(e, _) => Box::new(e.clone()),
            TypeCheckError::UnknownMember(e, _) => Box::new(e.clone()),
            TypeCheckError::NotARecord(e, _) => Box::new(e.clone()),
            TypeCheckError::ProcedureAsValue(e, _) => Box::new(e.clone()),
            TypeCheckError::TypeMismatch(e, _) => Box::new(e.clone()),
            TypeCheckError::IncompatibleRecordTypes(e, _) => Box::new(e.clone()),
            TypeCheckError::DifferentVectorSizes(e, _) => Box::new(e.clone()),
            TypeCheckError::InvalidArithmetic(e, _) => Box::new(e.clone()),
            TypeCheckError::MixedScalarVectorAddition(e, _) => Box::new(e.clone()),
            TypeCheckError::MixedVectorScalarMultiplication(e, _) => Box::new(e.clone()),
            TypeCheckError::VectorOperandMismatch(e, _) => Box::new(e.clone()),
            TypeCheckError::VectorTooLarge(e, _) => Box::new(e.clone()),
            TypeCheckError::MissingReturn(e, _) => Box::new(e.clone()),
            TypeCheckError::IncompatibleReturnType(e, _) => Box::new(e.clone()),
        }
    }
}

impl Display for TypeCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.err()))
    }
}

impl Error for TypeCheckError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedeclaredToplevel {
    pub name: String,
}

impl Display for RedeclaredToplevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("redeclaration of toplevel '{}'", self.name))
    }
}

impl Error for RedeclaredToplevel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedeclaredRecord {
    pub name: String,
}

impl Display for RedeclaredRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "redeclaration of record type '{}'",
            self.name
        ))
    }
}

impl Error for RedeclaredRecord {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedeclaredVariable {
    pub name: String,
}

impl Display for RedeclaredVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("redeclaration of variable '{}'", self.name))
    }
}

impl Error for RedeclaredVariable {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterShadowing {
    pub name: String,
}

impl Display for ParameterShadowing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "function parameter '{}' shadows variable",
            self.name
        ))
    }
}

impl Error for ParameterShadowing {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndefinedVariable {
    pub name: String,
}

impl Display for UndefinedVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("variable '{}' not in scope", self.name))
    }
}

impl Error for UndefinedVariable {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndefinedRecordType {
    pub name: String,
}

impl Display for UndefinedRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("unknown record type '{}'", self.name))
    }
}

impl Error for UndefinedRecordType {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndefinedType {
    pub name: String,
}

impl Display for UndefinedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("no type '{}' in scope", self.name))
    }
}

impl Error for UndefinedType {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMember {
    pub record: String,
    pub member: String,
}

impl Display for UnknownMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "record type '{}' does not have a member '{}'",
            self.record, self.member
        ))
    }
}

impl Error for UnknownMember {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotARecord;

impl Display for NotARecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("left hand side must be a record type")
    }
}

impl Error for NotARecord {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcedureAsValue {
    pub name: String,
}

impl Display for ProcedureAsValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "cannot use procedure '{}' as a value",
            self.name
        ))
    }
}

impl Error for ProcedureAsValue {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMismatch {
    pub expected: Type,
    pub actual: Type,
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("incompatible types")
    }
}

impl Error for TypeMismatch {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncompatibleRecordTypes {
    pub left: String,
    pub right: String,
}

impl Display for IncompatibleRecordTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "incompatible record types '{}' and '{}'",
            self.left, self.right
        ))
    }
}

impl Error for IncompatibleRecordTypes {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifferentVectorSizes;

impl Display for DifferentVectorSizes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("different sized vectors")
    }
}

impl Error for DifferentVectorSizes {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidArithmetic;

impl Display for InvalidArithmetic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid argument to arithmetic operation")
    }
}

impl Error for InvalidArithmetic {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixedScalarVectorAddition;

impl Display for MixedScalarVectorAddition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("cannot perform addition or subtraction on mixed scalar and vector operands")
    }
}

impl Error for MixedScalarVectorAddition {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixedVectorScalarMultiplication;

impl Display for MixedVectorScalarMultiplication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("cannot perform vector/scalar multiplication on mixed type operands")
    }
}

impl Error for MixedVectorScalarMultiplication {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorOperandMismatch;

impl Display for VectorOperandMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("cannot perform arithmetic on vectors of different types or sizes")
    }
}

impl Error for VectorOperandMismatch {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorTooLarge {
    pub size: usize,
}

impl Display for VectorTooLarge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("maximum vector size is 4")
    }
}

impl Error for VectorTooLarge {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingReturn;

impl Display for MissingReturn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("non-void function must return")
    }
}

impl Error for MissingReturn {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncompatibleReturnType;

impl Display for IncompatibleReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("incompatible return type")
    }
}

impl Error for IncompatibleReturnType {}
