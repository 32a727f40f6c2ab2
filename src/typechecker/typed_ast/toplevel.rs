use crate::parser::ast::{
    Id, Parameter, Procedure, RecordDeclaration, Statement, TopLevelStatement,
};
use crate::typechecker::error::{
    IncompatibleReturnType, MissingReturn, ParameterShadowing, RedeclaredRecord,
    RedeclaredToplevel, TypeCheckError,
};
use crate::typechecker::{
    Context, RecordEntry, ShallowCheck, Type, TypeCheckable, TypeInformation, TypeResult, VarEntry,
};

impl ShallowCheck for TopLevelStatement<()> {
    /// First pass registration: claim the toplevel's name in its namespace.
    /// Types are not resolved yet, so mutually recursive declarations work
    /// regardless of source order.
    fn shallow_check(&self, ctx: &mut Context) -> TypeResult<()> {
        match self {
            TopLevelStatement::Procedure(procedure) => ctx
                .scope
                .add_variable(&procedure.id.name, VarEntry::Procedure(None))
                .map_err(|_| {
                    TypeCheckError::RedeclaredToplevel(
                        RedeclaredToplevel {
                            name: procedure.id.name.clone(),
                        },
                        procedure.position,
                    )
                }),
            TopLevelStatement::RecordDeclaration(record) => ctx
                .records
                .register(&record.id.name, record.position)
                .map_err(|_| {
                    TypeCheckError::RedeclaredRecord(
                        RedeclaredRecord {
                            name: record.id.name.clone(),
                        },
                        record.position,
                    )
                }),
        }
    }
}

impl TypeCheckable for RecordDeclaration<()> {
    type Typed = RecordDeclaration<TypeInformation>;

    /// Resolve the declared member types against the registry and store
    /// the layout. Runs for every record before any procedure body.
    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let RecordDeclaration {
            id,
            members,
            position,
            ..
        } = self;

        let mut entries = vec![];
        for member in members.iter() {
            let type_id = Type::try_from((&member.type_name, &*ctx))?;

            entries.push(RecordEntry {
                kind: member.kind,
                name: member.name.clone(),
                type_id,
                position: member.position,
            });
        }

        ctx.records.define_entries(&id.name, entries);

        let info = TypeInformation {
            type_id: Type::Record(id.name.clone()),
        };

        Ok(RecordDeclaration {
            id: Id {
                name: id.name,
                info: info.clone(),
                position: id.position,
            },
            members,
            info,
            position,
        })
    }
}

impl TypeCheckable for Procedure<()> {
    type Typed = Procedure<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Procedure {
            id,
            parameters,
            return_type,
            statements,
            entry_point,
            position,
            ..
        } = self;

        let resolved_return = Type::try_from((&return_type, &*ctx))?;

        ctx.scope.enter_scope();

        let mut checked_parameters = vec![];
        let mut parameter_types = vec![];

        for parameter in parameters {
            let Parameter {
                id: parameter_id,
                type_name,
                position: parameter_position,
            } = parameter;

            ctx.scope
                .add_variable(&parameter_id.name, VarEntry::Declared)
                .map_err(|_| {
                    TypeCheckError::ParameterShadowing(
                        ParameterShadowing {
                            name: parameter_id.name.clone(),
                        },
                        parameter_position,
                    )
                })?;

            let parameter_type = Type::try_from((&type_name, &*ctx))?;
            ctx.scope.update_variable(
                &parameter_id.name,
                VarEntry::Variable(parameter_type.clone()),
            );

            parameter_types.push(parameter_type.clone());
            checked_parameters.push(Parameter {
                id: Id {
                    name: parameter_id.name,
                    info: TypeInformation {
                        type_id: parameter_type,
                    },
                    position: parameter_id.position,
                },
                type_name,
                position: parameter_position,
            });
        }

        let procedure_type = Type::Proc {
            params: parameter_types,
            return_type: Box::new(resolved_return.clone()),
        };
        ctx.scope
            .update_variable(&id.name, VarEntry::Procedure(Some(procedure_type.clone())));

        let mut checked_statements = vec![];
        let mut did_return = false;

        for statement in statements {
            let statement = statement.check(ctx)?;

            if let Statement::Return(ret) = &statement {
                ret.info
                    .type_id
                    .compare(&resolved_return, ret.position)
                    .map_err(|_| {
                        TypeCheckError::IncompatibleReturnType(IncompatibleReturnType, ret.position)
                    })?;
                did_return = true;
            }

            checked_statements.push(statement);
        }

        if resolved_return != Type::Void && !did_return {
            return Err(TypeCheckError::MissingReturn(MissingReturn, position));
        }

        ctx.scope.exit_scope();

        let info = TypeInformation {
            type_id: procedure_type,
        };

        Ok(Procedure {
            id: Id {
                name: id.name,
                info: info.clone(),
                position: id.position,
            },
            parameters: checked_parameters,
            return_type,
            statements: checked_statements,
            entry_point,
            info,
            position,
        })
    }
}
