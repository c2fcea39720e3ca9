//! Named schemas: one definition per table shape.

use crate::keyword::{Keyword, Metadata};

/// A named schema: a table name plus its columns, unique by name and in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    name: String,
    columns: Vec<Keyword>,
    metadata: Metadata,
}

impl Definition {
    /// Create a definition. Columns with duplicate names keep the first
    /// occurrence.
    ///
    /// # Panics
    ///
    /// Panics when `name` is empty.
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = Keyword>) -> Definition {
        let name = name.into();
        assert!(!name.is_empty(), "definition name must not be empty");
        let mut unique: Vec<Keyword> = Vec::new();
        for column in columns {
            if !unique.contains(&column) {
                unique.push(column);
            }
        }
        Definition {
            name,
            columns: unique,
            metadata: Metadata::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Keyword] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Keyword> {
        self.columns.iter().find(|keyword| keyword.name() == name)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Derive a definition bound to a schema or catalog qualifier.
    pub fn qualified(&self, qualifier: impl Into<String>) -> Definition {
        let mut definition = self.clone();
        definition.metadata.qualifier = Some(qualifier.into());
        definition
    }
}
