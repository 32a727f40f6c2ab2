//! Resolution context carried through both resolver passes. Cheap to pass
//! around by mutable reference; owns the value scope chain and the record
//! registry (the type scope).

use super::{scope::Scope, typescope::TypeScope};

#[derive(Debug, Clone, Default)]
pub struct Context {
    pub scope: Scope,
    pub records: TypeScope,
}
