//! The SQLite grammar variant.
//!
//! Delegates every statement to the ANSI baseline and overrides only the
//! pieces SQLite spells differently: its storage-class datatypes and its
//! `group_concat` string aggregation.

use enum_iterator::all;
use quill_schema::projection::{Aggregate, AggregateFunction};
use quill_schema::value::ValueType;
use quill_sql::sql::ast::SetFunction;
use quill_sql::sql::helpers::column_reference;

use super::{ansi_set_function, SqlGrammar, TypeMapping};

#[derive(Debug, Clone)]
pub struct SqliteGrammar {
    mappings: TypeMapping,
}

impl SqliteGrammar {
    pub fn new() -> SqliteGrammar {
        SqliteGrammar {
            mappings: default_mappings(),
        }
    }
}

impl Default for SqliteGrammar {
    fn default() -> SqliteGrammar {
        SqliteGrammar::new()
    }
}

impl SqlGrammar for SqliteGrammar {
    fn mappings(&self) -> &TypeMapping {
        &self.mappings
    }

    fn set_function(&self, aggregate: &Aggregate) -> SetFunction {
        match &aggregate.function {
            AggregateFunction::Concat { separator } => SetFunction {
                function: "group_concat".to_string(),
                argument: column_reference(&aggregate.column),
                separator: Some(separator.clone()),
            },
            _ => ansi_set_function(aggregate),
        }
    }
}

/// SQLite storage classes; booleans and timestamps are integers.
pub fn default_mappings() -> TypeMapping {
    all::<ValueType>().fold(TypeMapping::new(), |mappings, value_type| {
        let column_type = match value_type {
            ValueType::Boolean | ValueType::Integer | ValueType::Timestamp => "integer",
            ValueType::Real => "real",
            ValueType::Text => "text",
        };
        mappings.with(value_type, column_type)
    })
}
