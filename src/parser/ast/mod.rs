//! Node definitions for the BSL syntax tree.
//!
//! Every node is generic over its annotation `T`: the parser produces
//! `T = ()`, the type checker rewrites the tree into
//! `T = TypeInformation`. Parsing lives next to each node as a
//! [`FromTokens`](crate::parser::FromTokens) impl or an inherent
//! `parse_body` helper invoked by the dispatching node.

mod expression;
mod statement;
mod type_name;

pub use self::expression::*;
pub use self::statement::*;
pub use self::type_name::*;
