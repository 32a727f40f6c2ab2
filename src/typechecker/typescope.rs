use std::{collections::HashMap, error::Error, fmt::Display};

use crate::lexer::Position;
use crate::parser::ast::RecordMemberKind;

use super::types::Type;

/// A resolved record field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordEntry {
    pub kind: RecordMemberKind,
    pub name: String,
    pub type_id: Type,
    pub position: Position,
}

/// A registered record type. `entries` stays empty between registration in
/// the first resolver pass and layout resolution at the start of the
/// second.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordDef {
    pub name: String,
    pub entries: Vec<RecordEntry>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAddError {
    pub name: String,
}

impl Display for TypeAddError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "tried to register already existing record type '{}'",
            self.name
        ))
    }
}

impl Error for TypeAddError {}

/// The global type scope: every toplevel record, keyed by its name. Names
/// are unique, which is what makes name equality nominal type identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TypeScope {
    records: HashMap<String, RecordDef>,
}

impl TypeScope {
    pub fn register(
        &mut self,
        name: impl ToString,
        position: Position,
    ) -> Result<(), TypeAddError> {
        let name = name.to_string();

        if self.records.contains_key(&name) {
            return Err(TypeAddError { name });
        }

        self.records.insert(
            name.clone(),
            RecordDef {
                name,
                entries: vec![],
                position,
            },
        );

        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&RecordDef> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fill in the resolved entry list of a registered record.
    pub(crate) fn define_entries(&mut self, name: &str, entries: Vec<RecordEntry>) {
        if let Some(def) = self.records.get_mut(name) {
            def.entries = entries;
        }
    }

    /// Look a member up by name, returning its index in the entry list
    /// together with the entry. The index is what typed AST nodes store.
    pub fn member<'a>(&'a self, record: &str, member: &str) -> Option<(usize, &'a RecordEntry)> {
        self.get(record)?
            .entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.name == member)
    }
}
