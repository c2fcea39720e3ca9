//! The qualifier rewrite pass: re-bind column references onto a table
//! alias so a statement can be embedded as a derived table or correlated
//! sub-select.

use std::collections::BTreeMap;

use super::ast::*;

/// Rewrites an expression tree so every column reference is qualified
/// against a target alias, without touching literal text or parameters.
///
/// The resolver maps a column alias the qualifier already owns to the
/// qualifier that column should take instead; unresolved names fall back to
/// the table alias itself. Qualification only fills in missing qualifiers
/// and aliases, it never overrides ones the caller wrote.
#[derive(Debug, Clone)]
pub struct Qualifier {
    alias: String,
    columns: BTreeMap<String, String>,
}

impl Qualifier {
    pub fn new(alias: impl Into<String>) -> Qualifier {
        Qualifier {
            alias: alias.into(),
            columns: BTreeMap::new(),
        }
    }

    /// A qualifier that resolves the given column aliases to other
    /// qualifiers, for correlated column lookups across sub-selects.
    pub fn with_columns(
        alias: impl Into<String>,
        columns: BTreeMap<String, String>,
    ) -> Qualifier {
        Qualifier {
            alias: alias.into(),
            columns,
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        self.columns.get(name).map(String::as_str)
    }

    pub fn qualify_select(&self, select: Select) -> Select {
        Select {
            quantifier: select.quantifier,
            select_list: SelectList {
                columns: select
                    .select_list
                    .columns
                    .into_iter()
                    .map(|column| self.qualify_derived_column(column))
                    .collect(),
            },
            from: self.qualify_from(select.from),
            where_: Where(self.qualify_expression(select.where_.0)),
            group_by: GroupBy {
                columns: select
                    .group_by
                    .columns
                    .into_iter()
                    .map(|column| self.qualify_column(column))
                    .collect(),
            },
            order_by: OrderBy {
                elements: select
                    .order_by
                    .elements
                    .into_iter()
                    .map(|element| OrderByElement {
                        target: self.qualify_expression(element.target),
                        direction: element.direction,
                    })
                    .collect(),
            },
        }
    }

    pub fn qualify_expression(&self, expression: Expression) -> Expression {
        match expression {
            Expression::Column(column) => Expression::Column(self.qualify_column(column)),
            Expression::SetFunction(function) => Expression::SetFunction(SetFunction {
                function: function.function,
                argument: self.qualify_column(function.argument),
                separator: function.separator,
            }),
            Expression::Compound(compound) => Expression::Compound(Compound {
                expressions: compound
                    .expressions
                    .into_iter()
                    .map(|expression| self.qualify_expression(expression))
                    .collect(),
                start: compound.start,
                separator: compound.separator,
                end: compound.end,
            }),
            // Literal text and parameters carry no column references.
            other @ (Expression::Empty
            | Expression::Text(_)
            | Expression::Parametrized { .. }) => other,
        }
    }

    pub fn qualify_column(&self, column: ColumnReference) -> ColumnReference {
        match column.qualifier {
            Some(_) => column,
            None => {
                let qualifier = self
                    .resolve(&column.name)
                    .unwrap_or(&self.alias)
                    .to_string();
                ColumnReference {
                    name: column.name,
                    qualifier: Some(qualifier),
                }
            }
        }
    }

    /// An AS-aliased derived column may resolve to a different qualifier,
    /// supporting correlated sub-query column lookups; otherwise the value
    /// expression is qualified in this scope.
    pub fn qualify_derived_column(&self, column: DerivedColumn) -> DerivedColumn {
        let scoped = column
            .alias
            .as_deref()
            .and_then(|alias| self.resolve(alias))
            .map(Qualifier::new);
        let qualifier = scoped.as_ref().unwrap_or(self);
        DerivedColumn {
            value: qualifier.qualify_expression(column.value),
            alias: column.alias,
        }
    }

    fn qualify_from(&self, from: From) -> From {
        match from {
            From::Table(primary) => From::Table(TablePrimary {
                table: primary.table,
                // Fill in missing aliasing only, never caller intent.
                alias: primary.alias.or_else(|| Some(self.alias.clone())),
            }),
            // Joins carry explicit aliasing already.
            From::Join(join) => From::Join(join),
        }
    }
}
