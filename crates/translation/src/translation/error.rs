//! Errors for statement translation.

use quill_schema::value::ValueType;
use thiserror::Error;

/// A type for translation errors.
///
/// Every error is local to one compilation call; nothing is retried and no
/// state is held across calls.
#[derive(Debug, Error)]
pub enum Error {
    /// A predicate shape has no translation. Reported with the offending
    /// predicate's runtime shape, never silently skipped.
    #[error("unsupported predicate shape: {0}")]
    UnsupportedPredicate(String),

    /// `create table` met a value type absent from the dialect's datatype
    /// mapping. A configuration error, not a silent default.
    #[error("no column type mapping for column '{column}' of type {value_type}")]
    UnmappedColumnType {
        column: String,
        value_type: ValueType,
    },
}
