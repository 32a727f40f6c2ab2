//! # Type Checker Module
//!
//! Two pass semantic analysis over the parsed AST.
//!
//! Pass 1 ([`ShallowCheck`]) walks the toplevels in source order and only
//! registers names: procedures into the global value scope, records into
//! the type scope. Pass 2 resolves every record layout first and then every
//! procedure body, rewriting the AST from `T = ()` into
//! `T = TypeInformation` so that each node carries its concrete [`Type`].
//!
//! The checker stops at the first error; there is no recovery.

mod context;
mod error;
mod scope;
mod typed_ast;
mod typescope;
mod types;

pub use self::context::Context;
pub use self::error::TypeCheckError;
pub use self::scope::{Scope, VarEntry};
pub use self::typescope::{RecordDef, RecordEntry, TypeScope};
pub use self::types::Type;

use log::trace;

use crate::parser::ast::TopLevelStatement;

/// Annotation attached to every AST node by the type checker.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TypeInformation {
    pub type_id: Type,
}

pub type TypeResult<T> = Result<T, TypeCheckError>;

/// The fully resolved output of the front-end: the typed toplevels in
/// source order plus the record registry their types refer to.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypedAst {
    pub statements: Vec<TopLevelStatement<TypeInformation>>,
    pub records: TypeScope,
}

trait TypeCheckable {
    type Typed;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed>;
}

trait ShallowCheck {
    fn shallow_check(&self, ctx: &mut Context) -> TypeResult<()>;
}

#[derive(Debug, Default)]
pub struct TypeChecker {
    context: Context,
    statements: Vec<TopLevelStatement<()>>,
}

impl TypeChecker {
    pub fn new(statements: Vec<TopLevelStatement<()>>) -> TypeChecker {
        TypeChecker {
            statements,
            ..Default::default()
        }
    }

    fn shallow_check(&mut self) -> TypeResult<()> {
        for statement in self.statements.iter() {
            statement.shallow_check(&mut self.context)?;
        }

        trace!(
            "registered {} toplevel names",
            self.statements.len()
        );

        Ok(())
    }

    /// Run both passes and return the typed AST. Record layouts resolve
    /// before any procedure body so that procedures may use records
    /// declared after them.
    pub fn check(mut self) -> TypeResult<TypedAst> {
        self.shallow_check()?;

        let statements = std::mem::take(&mut self.statements);
        let mut slots: Vec<Option<TopLevelStatement<TypeInformation>>> = vec![];
        let mut procedures = vec![];

        for statement in statements {
            match statement {
                TopLevelStatement::RecordDeclaration(record) => {
                    let record = record.check(&mut self.context)?;
                    slots.push(Some(TopLevelStatement::RecordDeclaration(record)));
                }
                TopLevelStatement::Procedure(procedure) => {
                    procedures.push((slots.len(), procedure));
                    slots.push(None);
                }
            }
        }

        for (index, procedure) in procedures {
            let procedure = procedure.check(&mut self.context)?;
            slots[index] = Some(TopLevelStatement::Procedure(procedure));
        }

        Ok(TypedAst {
            statements: slots.into_iter().flatten().collect(),
            records: self.context.records,
        })
    }
}
