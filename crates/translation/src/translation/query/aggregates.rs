//! Handle aggregate expansion in select lists.

use quill_schema::projection::{Aggregate, AggregateFunction, Projection};
use quill_sql::sql::ast::{DerivedColumn, Expression, GroupBy, SetFunction};
use quill_sql::sql::helpers::column_reference;

/// Wrap a dialect's set-function rendering into a derived column, with the
/// caller's alias or a generated one.
pub fn derived_column(function: SetFunction, aggregate: &Aggregate) -> DerivedColumn {
    let alias = aggregate
        .alias
        .clone()
        .unwrap_or_else(|| generated_alias(aggregate));
    DerivedColumn {
        value: Expression::SetFunction(function),
        alias: Some(alias),
    }
}

fn generated_alias(aggregate: &Aggregate) -> String {
    let column = match aggregate.column.name() {
        "*" => "star",
        name => name,
    };
    format!("{}_{column}", label(&aggregate.function))
}

fn label(function: &AggregateFunction) -> &'static str {
    match function {
        AggregateFunction::Count => "count",
        AggregateFunction::Sum => "sum",
        AggregateFunction::Minimum => "min",
        AggregateFunction::Maximum => "max",
        AggregateFunction::Average => "avg",
        AggregateFunction::Concat { .. } => "concat",
    }
}

/// The GROUP BY a mixed projection implies: grouping by every plain column
/// when at least one aggregate is projected alongside them.
pub fn implied_group_by(projection: &[Projection]) -> GroupBy {
    let has_aggregate = projection
        .iter()
        .any(|item| matches!(item, Projection::Aggregate(_)));
    if !has_aggregate {
        return GroupBy { columns: vec![] };
    }
    GroupBy {
        columns: projection
            .iter()
            .filter_map(|item| match item {
                Projection::Column(keyword) => Some(column_reference(keyword)),
                Projection::Aggregate(_) => None,
            })
            .collect(),
    }
}
