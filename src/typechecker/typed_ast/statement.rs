use crate::parser::ast::{Id, Initialisation, ReturnStatement, Statement};
use crate::typechecker::error::{RedeclaredVariable, TypeCheckError};
use crate::typechecker::{Context, Type, TypeCheckable, TypeInformation, TypeResult, VarEntry};

impl TypeCheckable for Statement<()> {
    type Typed = Statement<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        match self {
            Statement::Initialisation(init) => Ok(Statement::Initialisation(init.check(ctx)?)),
            Statement::Return(ret) => Ok(Statement::Return(ret.check(ctx)?)),
        }
    }
}

impl TypeCheckable for Initialisation<()> {
    type Typed = Initialisation<TypeInformation>;

    /// The name is claimed before the initializer resolves, so a duplicate
    /// fails ahead of any error inside the initializer. With both an
    /// annotation and an initializer present the annotation wins as the
    /// variable's type once they compare equal.
    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Initialisation {
            id,
            type_name,
            value,
            position,
            ..
        } = self;

        ctx.scope
            .add_variable(&id.name, VarEntry::Declared)
            .map_err(|_| {
                TypeCheckError::RedeclaredVariable(
                    RedeclaredVariable {
                        name: id.name.clone(),
                    },
                    position,
                )
            })?;

        let value = value.check(ctx)?;
        let value_type = value.get_info().type_id;

        let type_id = match &type_name {
            Some(type_name) => {
                let declared = Type::try_from((type_name, &*ctx))?;
                declared.compare(&value_type, value.position())?;
                declared
            }
            None => value_type,
        };

        ctx.scope
            .update_variable(&id.name, VarEntry::Variable(type_id.clone()));

        let info = TypeInformation { type_id };

        Ok(Initialisation {
            id: Id {
                name: id.name,
                info: info.clone(),
                position: id.position,
            },
            type_name,
            value,
            info,
            position,
        })
    }
}

impl TypeCheckable for ReturnStatement<()> {
    type Typed = ReturnStatement<TypeInformation>;

    /// The returned expression resolves here; the comparison against the
    /// procedure's declared return type happens in the procedure check,
    /// which knows the declared type.
    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let ReturnStatement {
            value, position, ..
        } = self;

        let value = value.check(ctx)?;
        let info = TypeInformation {
            type_id: value.get_info().type_id,
        };

        Ok(ReturnStatement {
            value,
            info,
            position,
        })
    }
}
