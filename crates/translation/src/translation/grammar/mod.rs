//! Per-dialect statement-building strategies.
//!
//! [`SqlGrammar`] carries a default (ANSI) implementation of every
//! statement; a vendor grammar overrides only what its dialect spells
//! differently and inherits the rest.

pub mod ansi;
pub mod sqlite;

use std::collections::BTreeMap;

use quill_schema::definition::Definition;
use quill_schema::keyword::Keyword;
use quill_schema::predicate::Predicate;
use quill_schema::projection::{Aggregate, AggregateFunction, Projection, Sort};
use quill_schema::record::Record;
use quill_schema::value::ValueType;
use quill_sql::sql::ast::{Expression, From, Select, SelectList, SetFunction, SetQuantifier, Where};
use quill_sql::sql::helpers::{
    column_reference, compound, concat, derived_column, parametrized, table_primary, text,
};
use quill_sql::sql::string::quote;

use super::error::Error;
use super::query::{aggregates, filtering, helpers, sorting};

pub use ansi::AnsiGrammar;
pub use sqlite::SqliteGrammar;

/// The datatype mapping a dialect consults when creating tables. Missing
/// entries are a configuration error surfaced as
/// [`Error::UnmappedColumnType`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMapping {
    entries: BTreeMap<ValueType, String>,
}

impl TypeMapping {
    pub fn new() -> TypeMapping {
        TypeMapping::default()
    }

    pub fn with(mut self, value_type: ValueType, column_type: impl Into<String>) -> TypeMapping {
        self.entries.insert(value_type, column_type.into());
        self
    }

    pub fn get(&self, value_type: ValueType) -> Option<&str> {
        self.entries.get(&value_type).map(String::as_str)
    }
}

/// The aggregate shape shared by ANSI-flavoured dialects.
pub(crate) fn ansi_set_function(aggregate: &Aggregate) -> SetFunction {
    let (function, separator) = match &aggregate.function {
        AggregateFunction::Count => ("count", None),
        AggregateFunction::Sum => ("sum", None),
        AggregateFunction::Minimum => ("min", None),
        AggregateFunction::Maximum => ("max", None),
        AggregateFunction::Average => ("avg", None),
        AggregateFunction::Concat { separator } => ("listagg", Some(separator.clone())),
    };
    SetFunction {
        function: function.to_string(),
        argument: column_reference(&aggregate.column),
        separator,
    }
}

/// A per-dialect statement-building strategy over one schema definition.
///
/// Implementations are stateless beyond their datatype mapping; every method
/// is a pure function from inputs to an expression tree.
pub trait SqlGrammar {
    /// The dialect's column-datatype mapping, consulted by `create_table`.
    fn mappings(&self) -> &TypeMapping;

    /// How the dialect spells an aggregate application.
    fn set_function(&self, aggregate: &Aggregate) -> SetFunction {
        ansi_set_function(aggregate)
    }

    fn select(
        &self,
        definition: &Definition,
        projection: &[Projection],
        quantifier: SetQuantifier,
        filter: Option<&Predicate>,
        order_by: &[Sort],
    ) -> Result<Select, Error> {
        tracing::debug!(table = definition.name(), "compiling select");
        let columns = projection
            .iter()
            .map(|item| match item {
                Projection::Column(keyword) => derived_column(keyword),
                Projection::Aggregate(aggregate) => {
                    aggregates::derived_column(self.set_function(aggregate), aggregate)
                }
            })
            .collect();
        let where_ = match filter {
            None => Where(Expression::Empty),
            Some(predicate) => Where(filtering::translate_predicate(predicate)?),
        };
        Ok(Select {
            quantifier,
            select_list: SelectList { columns },
            from: From::Table(table_primary(definition)),
            where_,
            group_by: aggregates::implied_group_by(projection),
            order_by: sorting::translate(order_by),
        })
    }

    fn insert(&self, definition: &Definition, record: &Record) -> Expression {
        tracing::debug!(table = definition.name(), "compiling insert");
        let columns = record
            .keywords()
            .map(|keyword| text(quote(keyword.column_name())))
            .collect();
        let placeholders = vec!["?"; record.len()].join(", ");
        let values = record.fields().map(|(_, value)| value.clone()).collect();
        concat(vec![
            text(format!("INSERT INTO {} ", helpers::table_text(definition))),
            compound(columns, "(", ", ", ")"),
            text(" VALUES "),
            parametrized(format!("({placeholders})"), values),
        ])
    }

    fn update(
        &self,
        definition: &Definition,
        filter: &Predicate,
        record: &Record,
    ) -> Result<Expression, Error> {
        tracing::debug!(table = definition.name(), "compiling update");
        let assignments = record
            .fields()
            .map(|(keyword, value)| set_clause(keyword, value.clone()))
            .collect();
        Ok(concat(vec![
            text(format!("UPDATE {} SET ", helpers::table_text(definition))),
            compound(assignments, "", ", ", ""),
            helpers::where_clause(Some(filter))?,
        ]))
    }

    fn delete(
        &self,
        definition: &Definition,
        filter: Option<&Predicate>,
    ) -> Result<Expression, Error> {
        tracing::debug!(table = definition.name(), "compiling delete");
        Ok(concat(vec![
            text(format!("DELETE FROM {}", helpers::table_text(definition))),
            helpers::where_clause(filter)?,
        ]))
    }

    fn create_table(&self, definition: &Definition) -> Result<Expression, Error> {
        tracing::debug!(table = definition.name(), "compiling create table");
        let mut columns = Vec::with_capacity(definition.columns().len());
        for keyword in definition.columns() {
            let column_type = self.mappings().get(keyword.value_type()).ok_or_else(|| {
                Error::UnmappedColumnType {
                    column: keyword.name().to_string(),
                    value_type: keyword.value_type(),
                }
            })?;
            columns.push(text(format!(
                "{} {column_type}",
                quote(keyword.column_name())
            )));
        }
        Ok(concat(vec![
            text(format!("CREATE TABLE {} ", helpers::table_text(definition))),
            compound(columns, "(", ", ", ")"),
        ]))
    }

    fn drop_table(&self, definition: &Definition) -> Expression {
        tracing::debug!(table = definition.name(), "compiling drop table");
        text(format!("DROP TABLE {}", helpers::table_text(definition)))
    }
}

fn set_clause(keyword: &Keyword, value: quill_schema::value::Value) -> Expression {
    parametrized(format!("{} = ?", quote(keyword.column_name())), vec![value])
}
