//! The baseline ANSI grammar.

use enum_iterator::all;
use quill_schema::value::ValueType;

use super::{SqlGrammar, TypeMapping};

/// The default grammar: ANSI statement shapes with ANSI column datatypes.
#[derive(Debug, Clone)]
pub struct AnsiGrammar {
    mappings: TypeMapping,
}

impl AnsiGrammar {
    pub fn new() -> AnsiGrammar {
        AnsiGrammar::with_mappings(default_mappings())
    }

    /// A grammar with a caller-supplied datatype mapping, for engines whose
    /// native types deviate from the defaults.
    pub fn with_mappings(mappings: TypeMapping) -> AnsiGrammar {
        AnsiGrammar { mappings }
    }
}

impl Default for AnsiGrammar {
    fn default() -> AnsiGrammar {
        AnsiGrammar::new()
    }
}

impl SqlGrammar for AnsiGrammar {
    fn mappings(&self) -> &TypeMapping {
        &self.mappings
    }
}

/// ANSI column datatypes, one entry per value type.
pub fn default_mappings() -> TypeMapping {
    all::<ValueType>().fold(TypeMapping::new(), |mappings, value_type| {
        let column_type = match value_type {
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Real => "double precision",
            ValueType::Text => "varchar(4000)",
            ValueType::Timestamp => "timestamp",
        };
        mappings.with(value_type, column_type)
    })
}
