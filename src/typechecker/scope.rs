use std::{collections::HashMap, error::Error, fmt::Display};

use super::types::Type;

/// An entry in the value scope.
#[derive(Debug, Clone, PartialEq)]
pub enum VarEntry {
    /// A binding whose type is still being established. Variables pass
    /// through this state between claiming their name and resolving their
    /// initializer.
    Declared,
    /// A fully resolved variable or parameter.
    Variable(Type),
    /// A procedure. The type is present once the signature has resolved
    /// during the second pass.
    Procedure(Option<Type>),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Frame {
    entries: HashMap<String, VarEntry>,
}

/// Lexical value scope as a stack of frames, innermost last. Lookups walk
/// from the innermost frame outward; insertion collides with any visible
/// name, not only names of the innermost frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    stacks: Vec<Frame>,
}

impl Default for Scope {
    fn default() -> Self {
        Scope {
            stacks: vec![Frame::default()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAddError {
    pub name: String,
}

impl Display for VariableAddError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "tried to add already existing binding '{}'",
            self.name
        ))
    }
}

impl Error for VariableAddError {}

impl Scope {
    pub fn new() -> Scope {
        Self::default()
    }

    /// Push a new empty frame (enter a procedure body).
    pub fn enter_scope(&mut self) {
        self.stacks.push(Frame::default())
    }

    /// Pop the innermost frame (leave a procedure body).
    pub fn exit_scope(&mut self) {
        self.stacks.pop();
    }

    /// Insert a binding into the innermost frame. Fails if the name is
    /// already visible in any enclosing frame.
    pub fn add_variable(
        &mut self,
        name: impl ToString,
        entry: VarEntry,
    ) -> Result<(), VariableAddError> {
        let name = name.to_string();

        if self.resolve_name(&name).is_some() {
            return Err(VariableAddError { name });
        }

        let Some(last) = self.stacks.last_mut() else {
            unreachable!("trying to add binding '{name}' to an empty scope");
        };

        last.entries.insert(name, entry);

        Ok(())
    }

    /// Resolve a name walking from the innermost frame outward.
    pub fn resolve_name(&self, name: impl ToString) -> Option<&VarEntry> {
        let name = name.to_string();

        self.stacks
            .iter()
            .rev()
            .find_map(|frame| frame.entries.get(&name))
    }

    /// Replace the entry of an existing binding, innermost match first.
    /// Does nothing for unknown names.
    pub fn update_variable(&mut self, name: impl ToString, entry: VarEntry) {
        let name = name.to_string();

        let Some(frame) = self
            .stacks
            .iter_mut()
            .rev()
            .find(|frame| frame.entries.contains_key(&name))
        else {
            return;
        };

        frame.entries.insert(name, entry);
    }
}
