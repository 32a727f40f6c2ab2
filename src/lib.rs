//! # bsl
//!
//! Front-end for the BSL shading language. BSL programs are a collection
//! of record declarations and procedures; selected procedures are tagged
//! as vertex or fragment entry points via `[entry_point(...)]` attributes.
//!
//! [`compile`] runs the whole pipeline (lexing, parsing, two pass name and
//! type resolution) and produces either a fully typed AST or the first
//! diagnostic:
//!
//! ```
//! let source = "proc brighten(c: vec3<f32>) vec3<f32> return c * 2.0 end";
//!
//! let ast = bsl::compile(source).expect("source is well typed");
//! assert_eq!(ast.statements.len(), 1);
//! ```

pub mod diagnostic;
pub mod lexer;
pub mod parser;
pub mod typechecker;

use std::{error::Error, fmt::Display};

use log::debug;

use diagnostic::Diagnostic;
use lexer::Lexer;
use parser::{ast::TopLevelStatement, ParseError, Parser};
use typechecker::{TypeCheckError, TypeChecker, TypedAst};

pub type Ast<T> = Vec<TopLevelStatement<T>>;

#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Parse(ParseError),
    TypeCheck(TypeCheckError),
}

impl CompileError {
    /// The structured line/column/message record for this error.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Parse(error) => Diagnostic::new(error.position, &error.message),
            CompileError::TypeCheck(error) => Diagnostic::new(error.position(), error),
        }
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.diagnostic().fmt(f)
    }
}

impl Error for CompileError {}

impl From<ParseError> for CompileError {
    fn from(value: ParseError) -> Self {
        CompileError::Parse(value)
    }
}

impl From<TypeCheckError> for CompileError {
    fn from(value: TypeCheckError) -> Self {
        CompileError::TypeCheck(value)
    }
}

/// Compile BSL source text into a fully resolved AST. Halts at the first
/// error; the returned [`CompileError`] carries the single diagnostic of
/// the failing stage.
pub fn compile(source: &str) -> Result<TypedAst, CompileError> {
    let ast = Parser::new(Lexer::new(source)).parse_ast()?;
    debug!("parsed {} toplevel declarations", ast.len());

    let typed = TypeChecker::new(ast).check()?;
    debug!(
        "resolved {} toplevels against {} record types",
        typed.statements.len(),
        typed.records.len()
    );

    Ok(typed)
}
