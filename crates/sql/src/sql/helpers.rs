//! Helpers for building sql::ast types in certain shapes and patterns.

use quill_schema::keyword::Keyword;
use quill_schema::value::Value;

use super::ast::*;

/// Literal SQL text.
pub fn text(text: impl Into<String>) -> Expression {
    Expression::Text(text.into())
}

/// A template with `?` placeholders bound to `parameters` in order. With no
/// parameters this degrades to plain text.
pub fn parametrized(template: impl Into<String>, parameters: Vec<Value>) -> Expression {
    let template = template.into();
    debug_assert_eq!(
        template.chars().filter(|c| *c == '?').count(),
        parameters.len(),
        "placeholder count must match parameter count"
    );
    if parameters.is_empty() {
        Expression::Text(template)
    } else {
        Expression::Parametrized {
            template,
            parameters,
        }
    }
}

pub fn empty() -> Expression {
    Expression::Empty
}

/// Concatenate expressions with no separator.
pub fn concat(expressions: Vec<Expression>) -> Expression {
    compound(expressions, "", "", "")
}

pub fn compound(
    expressions: Vec<Expression>,
    start: impl Into<String>,
    separator: impl Into<String>,
    end: impl Into<String>,
) -> Expression {
    Expression::Compound(Compound {
        expressions,
        start: start.into(),
        separator: separator.into(),
        end: end.into(),
    })
}

/// The column reference a keyword compiles to: the source column name when
/// the keyword is a projection alias, with the keyword's qualifier metadata.
pub fn column_reference(keyword: &Keyword) -> ColumnReference {
    ColumnReference {
        name: keyword.column_name().to_string(),
        qualifier: keyword.metadata().qualifier.clone(),
    }
}

pub fn column(keyword: &Keyword) -> Expression {
    Expression::Column(column_reference(keyword))
}

/// The derived column a keyword projects to, with an AS clause when the
/// keyword has been renamed.
pub fn derived_column(keyword: &Keyword) -> DerivedColumn {
    DerivedColumn {
        value: column(keyword),
        alias: keyword
            .metadata()
            .source
            .is_some()
            .then(|| keyword.name().to_string()),
    }
}

/// The table primary a definition selects from; aliasing is left to the
/// qualifier pass.
pub fn table_primary(definition: &quill_schema::definition::Definition) -> TablePrimary {
    TablePrimary {
        table: TableName {
            name: definition.name().to_string(),
            qualifier: definition.metadata().qualifier.clone(),
        },
        alias: None,
    }
}

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(Expression::Empty)
}

/// An empty `GROUP BY` clause.
pub fn empty_group_by() -> GroupBy {
    GroupBy { columns: vec![] }
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// Build a select over a table with a select list and everything else empty.
pub fn simple_select(from: TablePrimary, columns: Vec<DerivedColumn>) -> Select {
    Select {
        quantifier: SetQuantifier::All,
        select_list: SelectList { columns },
        from: From::Table(from),
        where_: empty_where(),
        group_by: empty_group_by(),
        order_by: empty_order_by(),
    }
}
