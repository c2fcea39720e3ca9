//! Ordered keyword-to-value mappings.

use indexmap::IndexMap;

use crate::keyword::Keyword;
use crate::value::Value;

/// An ordered mapping from keyword to value, unique by keyword name.
///
/// Used both as a row (for insert and update) and to carry per-call options.
/// `set` returns a new record; existing fields keep their position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<Keyword, Value>,
}

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    /// Return a new record with the field set, replacing any existing value
    /// for the same column name.
    pub fn set(mut self, keyword: Keyword, value: impl Into<Value>) -> Record {
        self.fields.insert(keyword, value.into());
        self
    }

    /// Return a new record merged with `other`: `other`'s values win for
    /// shared column names, and fields already present keep their position.
    pub fn update(mut self, other: Record) -> Record {
        for (keyword, value) in other.fields {
            self.fields.insert(keyword, value);
        }
        self
    }

    pub fn get(&self, keyword: &Keyword) -> Option<&Value> {
        self.fields.get(keyword)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &Keyword> {
        self.fields.keys()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&Keyword, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(Keyword, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (Keyword, Value)>>(iter: I) -> Record {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}
