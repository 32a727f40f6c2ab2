use crate::lexer::Position;
use crate::parser::ast::{
    BinaryExpression, BinaryOperator, Expression, Id, MemberAccess, Num, RecordLiteral,
    RecordLiteralMember, VectorLiteral,
};
use crate::typechecker::error::{
    InvalidArithmetic, MixedScalarVectorAddition, MixedVectorScalarMultiplication, NotARecord,
    ProcedureAsValue, TypeCheckError, UndefinedRecordType, UndefinedVariable, UnknownMember,
    VectorOperandMismatch, VectorTooLarge,
};
use crate::typechecker::{Context, Type, TypeCheckable, TypeInformation, TypeResult, VarEntry};

impl TypeCheckable for Expression<()> {
    type Typed = Expression<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        match self {
            Expression::Id(id) => Ok(Expression::Id(id.check(ctx)?)),
            Expression::Num(num) => Ok(Expression::Num(num.check(ctx)?)),
            Expression::Binary(binary) => Ok(Expression::Binary(binary.check(ctx)?)),
            Expression::Member(member) => Ok(Expression::Member(member.check(ctx)?)),
            Expression::RecordLiteral(record) => {
                Ok(Expression::RecordLiteral(record.check(ctx)?))
            }
            Expression::VectorLiteral(vector) => {
                Ok(Expression::VectorLiteral(vector.check(ctx)?))
            }
        }
    }
}

impl TypeCheckable for Id<()> {
    type Typed = Id<TypeInformation>;

    /// A variable reference. Procedures are visible in the value scope but
    /// carry no value type, so reading one is rejected here.
    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Id { name, position, .. } = self;

        let type_id = match ctx.scope.resolve_name(&name) {
            Some(VarEntry::Variable(type_id)) => type_id.clone(),
            Some(VarEntry::Procedure(_)) => {
                return Err(TypeCheckError::ProcedureAsValue(
                    ProcedureAsValue { name },
                    position,
                ))
            }
            // a binding mid declaration is not usable in its own initializer
            Some(VarEntry::Declared) | None => {
                return Err(TypeCheckError::UndefinedVariable(
                    UndefinedVariable { name },
                    position,
                ))
            }
        };

        Ok(Id {
            name,
            info: TypeInformation { type_id },
            position,
        })
    }
}

impl TypeCheckable for Num<()> {
    type Typed = Num<TypeInformation>;

    /// Numeric literals all type as `f32`; integer literals are promoted.
    fn check(self, _ctx: &mut Context) -> TypeResult<Self::Typed> {
        let info = TypeInformation { type_id: Type::F32 };

        Ok(match self {
            Num::Integer(value, _, position) => Num::Integer(value, info, position),
            Num::FloatingPoint(value, _, position) => Num::FloatingPoint(value, info, position),
        })
    }
}

impl TypeCheckable for BinaryExpression<()> {
    type Typed = BinaryExpression<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let BinaryExpression {
            left,
            right,
            operator,
            position,
            ..
        } = self;

        let left = (*left).check(ctx)?;
        let right = (*right).check(ctx)?;

        let left_type = left.get_info().type_id;
        let right_type = right.get_info().type_id;

        let type_id = match (&left_type, &right_type) {
            (Type::F32, Type::F32) | (Type::F64, Type::F64) => left_type.clone(),
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
                if left_elem != right_elem || left_size != right_size {
                    return Err(TypeCheckError::VectorOperandMismatch(
                        VectorOperandMismatch,
                        position,
                    ));
                }
                left_type.clone()
            }
            (Type::Vector { elem, .. }, other) => {
                Self::check_vector_scalar(operator, elem, other, position)?;
                left_type.clone()
            }
            (other, Type::Vector { elem, .. }) => {
                Self::check_vector_scalar(operator, elem, other, position)?;
                right_type.clone()
            }
            _ => {
                return Err(TypeCheckError::InvalidArithmetic(
                    InvalidArithmetic,
                    position,
                ))
            }
        };

        Ok(BinaryExpression {
            left: Box::new(left),
            right: Box::new(right),
            operator,
            info: TypeInformation { type_id },
            position,
        })
    }
}

impl BinaryExpression<()> {
    /// Vector/scalar arithmetic is restricted to `*` and `/`, and the
    /// scalar operand must match the vector's element type.
    fn check_vector_scalar(
        operator: BinaryOperator,
        elem: &Type,
        scalar: &Type,
        position: Position,
    ) -> TypeResult<()> {
        if !operator.is_multiplicative() {
            return Err(TypeCheckError::MixedScalarVectorAddition(
                MixedScalarVectorAddition,
                position,
            ));
        }

        if elem != scalar {
            return Err(TypeCheckError::MixedVectorScalarMultiplication(
                MixedVectorScalarMultiplication,
                position,
            ));
        }

        Ok(())
    }
}

impl TypeCheckable for MemberAccess<()> {
    type Typed = MemberAccess<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let MemberAccess {
            lhs,
            member,
            position,
            ..
        } = self;

        let lhs = (*lhs).check(ctx)?;

        let Type::Record(record_name) = lhs.get_info().type_id else {
            return Err(TypeCheckError::NotARecord(NotARecord, position));
        };

        let Some((entry, record_entry)) = ctx.records.member(&record_name, &member) else {
            return Err(TypeCheckError::UnknownMember(
                UnknownMember {
                    record: record_name,
                    member,
                },
                position,
            ));
        };
        let type_id = record_entry.type_id.clone();

        Ok(MemberAccess {
            lhs: Box::new(lhs),
            member,
            entry: Some(entry),
            info: TypeInformation { type_id },
            position,
        })
    }
}

impl TypeCheckable for RecordLiteral<()> {
    type Typed = RecordLiteral<TypeInformation>;

    /// Every supplied member must exist on the target record and its
    /// initializer must match the field type. Members not listed stay
    /// default initialized; completeness is not enforced.
    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let RecordLiteral {
            name,
            members,
            position,
            ..
        } = self;

        if !ctx.records.contains(&name) {
            return Err(TypeCheckError::UndefinedRecordType(
                UndefinedRecordType { name },
                position,
            ));
        }

        let mut checked_members = vec![];
        for member in members {
            let RecordLiteralMember {
                name: member_name,
                value,
                position: member_position,
                ..
            } = member;

            let Some((entry, record_entry)) = ctx.records.member(&name, &member_name) else {
                return Err(TypeCheckError::UnknownMember(
                    UnknownMember {
                        record: name,
                        member: member_name,
                    },
                    member_position,
                ));
            };
            let entry_type = record_entry.type_id.clone();

            let value = value.check(ctx)?;
            value
                .get_info()
                .type_id
                .compare(&entry_type, member_position)?;

            checked_members.push(RecordLiteralMember {
                name: member_name,
                value,
                entry: Some(entry),
                position: member_position,
            });
        }

        Ok(RecordLiteral {
            members: checked_members,
            info: TypeInformation {
                type_id: Type::Record(name.clone()),
            },
            name,
            position,
        })
    }
}

impl TypeCheckable for VectorLiteral<()> {
    type Typed = VectorLiteral<TypeInformation>;

    /// Operands flatten into one vector: a scalar contributes one slot, a
    /// vector operand contributes its size. All operands must share one
    /// element type and the total may not exceed four slots.
    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let VectorLiteral {
            elements, position, ..
        } = self;

        let mut checked = vec![];
        let mut elem: Option<Type> = None;
        let mut size: usize = 0;

        for element in elements {
            let element = element.check(ctx)?;

            let (element_elem, element_size) = match element.get_info().type_id {
                Type::Vector { elem, size } => (*elem, size as usize),
                other => (other, 1),
            };

            match &elem {
                None => elem = Some(element_elem),
                Some(first) => first.compare(&element_elem, position)?,
            }
            size += element_size;

            checked.push(element);
        }

        if size > 4 {
            return Err(TypeCheckError::VectorTooLarge(
                VectorTooLarge { size },
                position,
            ));
        }

        let Some(elem) = elem else {
            unreachable!("vector literals always carry at least one operand");
        };

        Ok(VectorLiteral {
            elements: checked,
            info: TypeInformation {
                type_id: Type::Vector {
                    elem: Box::new(elem),
                    size: size as u8,
                },
            },
            position,
        })
    }
}
