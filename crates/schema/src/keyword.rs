//! Named, typed column descriptors.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::definition::Definition;
use crate::value::ValueType;

/// The annotations a keyword or definition can carry.
///
/// A closed set rather than an open bag: the compilers only ever consult
/// these two fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// The table alias or name this column belongs to.
    pub qualifier: Option<String>,
    /// The underlying column name, when the keyword has been renamed for
    /// projection. The select list renders `source AS name`.
    pub source: Option<String>,
}

/// A named, typed column descriptor.
///
/// Two keywords are the same column iff their names match; metadata never
/// affects equality or hashing, only compilation.
#[derive(Debug, Clone)]
pub struct Keyword {
    name: String,
    value_type: ValueType,
    metadata: Metadata,
}

impl Keyword {
    /// Create a keyword.
    ///
    /// # Panics
    ///
    /// Panics when `name` is empty. An unnamed column is a programming
    /// error, caught at construction rather than at compile time.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Keyword {
        let name = name.into();
        assert!(!name.is_empty(), "keyword name must not be empty");
        Keyword {
            name,
            value_type,
            metadata: Metadata::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The column name to use in compiled statements: the source column when
    /// this keyword has been renamed, otherwise the keyword name itself.
    pub fn column_name(&self) -> &str {
        self.metadata.source.as_deref().unwrap_or(&self.name)
    }

    /// Derive a keyword bound to a table alias or name.
    pub fn qualified(&self, qualifier: impl Into<String>) -> Keyword {
        let mut keyword = self.clone();
        keyword.metadata.qualifier = Some(qualifier.into());
        keyword
    }

    /// Derive a keyword renamed for projection, remembering the original
    /// column name.
    pub fn aliased(&self, alias: impl Into<String>) -> Keyword {
        let alias = alias.into();
        assert!(!alias.is_empty(), "keyword alias must not be empty");
        Keyword {
            name: alias,
            value_type: self.value_type,
            metadata: Metadata {
                qualifier: self.metadata.qualifier.clone(),
                source: Some(self.column_name().to_string()),
            },
        }
    }

    /// Derive the keyword as seen through a definition: qualified by the
    /// definition's name and renamed to `{definition}_{column}`.
    pub fn of(&self, definition: &Definition) -> Keyword {
        self.qualified(definition.name())
            .aliased(format!("{}_{}", definition.name(), self.name))
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Keyword) -> bool {
        self.name == other.name
    }
}

impl Eq for Keyword {}

impl Hash for Keyword {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
