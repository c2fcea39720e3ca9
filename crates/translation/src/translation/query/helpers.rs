//! Shared helpers for the statement builders.

use quill_schema::definition::Definition;
use quill_schema::predicate::Predicate;
use quill_sql::sql::ast::Expression;
use quill_sql::sql::helpers::{concat, empty, table_primary, text};

use super::filtering;
use crate::translation::error::Error;

/// The table name as statement text, quoted and qualified.
pub fn table_text(definition: &Definition) -> String {
    let mut sql = quill_sql::sql::string::Sql::new();
    table_primary(definition).table.to_sql(&mut sql);
    sql.text
}

/// ` WHERE <predicate>` when a predicate is present, nothing otherwise.
pub fn where_clause(filter: Option<&Predicate>) -> Result<Expression, Error> {
    match filter {
        None => Ok(empty()),
        Some(predicate) => Ok(concat(vec![
            text(" WHERE "),
            filtering::translate_predicate(predicate)?,
        ])),
    }
}
