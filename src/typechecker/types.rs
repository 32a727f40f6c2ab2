use crate::lexer::Position;
use crate::parser::ast::TypeName;

use super::{
    context::Context,
    error::{
        DifferentVectorSizes, IncompatibleRecordTypes, TypeCheckError, TypeMismatch, UndefinedType,
    },
    TypeResult,
};

/// Canonical semantic type used throughout resolution. No unresolved
/// variant exists here; named references live in [`TypeName`] until they
/// are converted via `TryFrom<(&TypeName, &Context)>`.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Type {
    /// 32-bit floating point scalar
    F32,
    /// 64-bit floating point scalar
    F64,
    /// Return type of procedures producing no value
    Void,
    /// Fixed size vector, 1 to 4 elements
    Vector { elem: Box<Type>, size: u8 },
    /// A record type, identified by its registered name. Record names are
    /// globally unique, so name equality is nominal type identity.
    Record(String),
    /// Signature of a procedure
    Proc {
        params: Vec<Type>,
        return_type: Box<Type>,
    },
}

impl Type {
    /// Compare two types the way the resolver reports them: structurally
    /// for scalars and vectors, nominally for records. The specific
    /// mismatch determines the diagnostic.
    pub fn compare(&self, other: &Type, position: Position) -> TypeResult<()> {
        match (self, other) {
            (Type::F32, Type::F32) | (Type::F64, Type::F64) | (Type::Void, Type::Void) => Ok(()),
            (
                Type::Vector {
                    elem: left_elem,
                    size: left_size,
                },
                Type::Vector {
                    elem: right_elem,
                    size: right_size,
                },
            ) => {
                left_elem.compare(right_elem, position)?;

                if left_size != right_size {
                    return Err(TypeCheckError::DifferentVectorSizes(
                        DifferentVectorSizes,
                        position,
                    ));
                }

                Ok(())
            }
            (Type::Record(left), Type::Record(right)) => {
                if left != right {
                    return Err(TypeCheckError::IncompatibleRecordTypes(
                        IncompatibleRecordTypes {
                            left: left.clone(),
                            right: right.clone(),
                        },
                        position,
                    ));
                }

                Ok(())
            }
            _ => Err(TypeCheckError::TypeMismatch(
                TypeMismatch {
                    expected: self.clone(),
                    actual: other.clone(),
                },
                position,
            )),
        }
    }
}

impl std::fmt::Debug for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::F32 => write!(f, "f32"),
            Self::F64 => write!(f, "f64"),
            Self::Void => write!(f, "void"),
            Self::Vector { elem, size } => write!(f, "vec{size}<{elem:?}>"),
            Self::Record(name) => write!(f, "record {name}"),
            Self::Proc {
                params,
                return_type,
            } => f.write_fmt(format_args!(
                "proc({}) {return_type:?}",
                params
                    .iter()
                    .map(|param| format!("{param:?}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// Convert a parsed [`TypeName`] into a resolved [`Type`], looking named
/// references up in the record registry. Builtin names take precedence and
/// cannot be redeclared as records.
impl TryFrom<(&TypeName, &Context)> for Type {
    type Error = TypeCheckError;

    fn try_from((value, ctx): (&TypeName, &Context)) -> Result<Self, Self::Error> {
        match value {
            TypeName::Literal(name, position) => match name.as_str() {
                "f32" => Ok(Type::F32),
                "f64" => Ok(Type::F64),
                "void" => Ok(Type::Void),
                name if ctx.records.contains(name) => Ok(Type::Record(name.to_string())),
                name => Err(TypeCheckError::UndefinedType(
                    UndefinedType {
                        name: name.to_string(),
                    },
                    *position,
                )),
            },
            TypeName::Vector { size, elem, .. } => Ok(Type::Vector {
                elem: Box::new(Type::try_from((elem.as_ref(), ctx))?),
                size: *size,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::TypeName;
    use crate::typechecker::{context::Context, error::TypeCheckError};

    use super::Type;

    #[test]
    fn test_builtin_literals() {
        let ctx = Context::default();

        assert_eq!(
            Ok(Type::F32),
            Type::try_from((&TypeName::Literal("f32".into(), (1, 1)), &ctx))
        );
        assert_eq!(
            Ok(Type::F64),
            Type::try_from((&TypeName::Literal("f64".into(), (1, 1)), &ctx))
        );
        assert_eq!(
            Ok(Type::Void),
            Type::try_from((&TypeName::Literal("void".into(), (1, 1)), &ctx))
        );
    }

    #[test]
    fn test_unknown_literal() {
        let ctx = Context::default();

        let result = Type::try_from((&TypeName::Literal("i64".into(), (2, 7)), &ctx));
        assert!(matches!(
            result,
            Err(TypeCheckError::UndefinedType(error, (2, 7))) if error.name == "i64"
        ));
    }

    #[test]
    fn test_registered_record() {
        let mut ctx = Context::default();
        ctx.records
            .register("Vertex", (1, 1))
            .expect("something went wrong");

        assert_eq!(
            Ok(Type::Record("Vertex".into())),
            Type::try_from((&TypeName::Literal("Vertex".into(), (1, 1)), &ctx))
        );
    }

    #[test]
    fn test_vector_type() {
        let ctx = Context::default();

        let type_name = TypeName::Vector {
            size: 3,
            elem: Box::new(TypeName::Literal("f32".into(), (1, 6))),
            position: (1, 1),
        };

        assert_eq!(
            Ok(Type::Vector {
                elem: Box::new(Type::F32),
                size: 3,
            }),
            Type::try_from((&type_name, &ctx))
        );
    }

    #[test]
    fn test_record_comparison_is_nominal() {
        let a = Type::Record("A".into());
        let also_a = Type::Record("A".into());
        let b = Type::Record("B".into());

        assert!(a.compare(&also_a, (1, 1)).is_ok());
        assert!(matches!(
            a.compare(&b, (1, 1)),
            Err(TypeCheckError::IncompatibleRecordTypes(_, _))
        ));
    }

    #[test]
    fn test_vector_comparison() {
        let vec3 = Type::Vector {
            elem: Box::new(Type::F32),
            size: 3,
        };
        let vec4 = Type::Vector {
            elem: Box::new(Type::F32),
            size: 4,
        };

        assert!(vec3.compare(&vec3.clone(), (1, 1)).is_ok());
        assert!(matches!(
            vec3.compare(&vec4, (1, 1)),
            Err(TypeCheckError::DifferentVectorSizes(_, _))
        ));
    }

    #[test]
    fn test_mismatched_variants() {
        assert!(matches!(
            Type::F32.compare(&Type::F64, (1, 1)),
            Err(TypeCheckError::TypeMismatch(_, _))
        ));
    }

    #[test]
    fn test_debug_formatting() {
        assert_eq!("f32", format!("{:?}", Type::F32));
        assert_eq!(
            "vec2<f64>",
            format!(
                "{:?}",
                Type::Vector {
                    elem: Box::new(Type::F64),
                    size: 2
                }
            )
        );
        assert_eq!("record P", format!("{:?}", Type::Record("P".into())));
    }
}
