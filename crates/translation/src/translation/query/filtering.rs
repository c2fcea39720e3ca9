//! Handle predicate-to-WHERE-clause translation.

use quill_schema::keyword::Keyword;
use quill_schema::predicate::{Condition, Predicate};
use quill_schema::value::Value;
use quill_sql::sql::ast::Expression;
use quill_sql::sql::helpers::{column, compound, concat, parametrized, text};

use crate::translation::error::Error;

/// Translate a whole predicate tree into a WHERE sub-expression.
///
/// A pure function: no state survives the call.
pub fn translate_predicate(predicate: &Predicate) -> Result<Expression, Error> {
    match predicate {
        Predicate::AlwaysTrue => Ok(tautology()),
        Predicate::AlwaysFalse => Ok(negate(tautology())),
        Predicate::Where { keyword, condition } => translate_condition(keyword, condition),
        Predicate::And(predicates) => {
            if predicates.is_empty() {
                return Ok(tautology());
            }
            let translated = predicates
                .iter()
                .map(translate_predicate)
                .collect::<Result<Vec<_>, Error>>()?;
            Ok(compound(translated, "(", " AND ", ")"))
        }
        Predicate::Or(predicates) => {
            if predicates.is_empty() {
                return Ok(negate(tautology()));
            }
            let translated = predicates
                .iter()
                .map(translate_predicate)
                .collect::<Result<Vec<_>, Error>>()?;
            Ok(compound(translated, "(", " OR ", ")"))
        }
        Predicate::Not(predicate) => Ok(negate(translate_predicate(predicate)?)),
        other => Err(Error::UnsupportedPredicate(format!("{other:?}"))),
    }
}

/// Translate a leaf condition bound to a column.
pub fn translate_condition(keyword: &Keyword, condition: &Condition) -> Result<Expression, Error> {
    match condition {
        Condition::Equals(value) => Ok(comparison(keyword, "=", value)),
        Condition::GreaterThan(value) => Ok(comparison(keyword, ">", value)),
        Condition::GreaterThanOrEqualTo(value) => Ok(comparison(keyword, ">=", value)),
        Condition::LessThan(value) => Ok(comparison(keyword, "<", value)),
        Condition::LessThanOrEqualTo(value) => Ok(comparison(keyword, "<=", value)),
        Condition::Between(lower, upper) => Ok(range(keyword, bound(lower), bound(upper))),
        Condition::In(values) => {
            if values.is_empty() {
                return Ok(negate(tautology()));
            }
            // A disjunction of equality tests rather than a native IN-list,
            // keeping one parameter per value.
            let tests = values
                .iter()
                .map(|value| comparison(keyword, "=", value))
                .collect();
            Ok(compound(tests, "(", " OR ", ")"))
        }
        Condition::StartsWith(prefix) => Ok(like(keyword, format!("{prefix}%"))),
        Condition::Contains(substring) => Ok(like(keyword, format!("%{substring}%"))),
        Condition::EndsWith(suffix) => Ok(like(keyword, format!("%{suffix}"))),
        // The portable null test: the negation of "has a value in the
        // universal range".
        Condition::IsNull => Ok(negate(range(keyword, None, None))),
        Condition::Not(condition) => Ok(negate(translate_condition(keyword, condition)?)),
        other => Err(Error::UnsupportedPredicate(format!(
            "{other:?} on column '{}'",
            keyword.name()
        ))),
    }
}

/// A range over zero, one or two bounds. The unbounded range degenerates to
/// "the column has a value".
fn range(keyword: &Keyword, lower: Option<&Value>, upper: Option<&Value>) -> Expression {
    match (lower, upper) {
        (Some(lower), Some(upper)) => compound(
            vec![
                comparison(keyword, ">=", lower),
                comparison(keyword, "<=", upper),
            ],
            "(",
            " AND ",
            ")",
        ),
        (Some(lower), None) => comparison(keyword, ">=", lower),
        (None, Some(upper)) => comparison(keyword, "<=", upper),
        (None, None) => concat(vec![column(keyword), text(" IS NOT NULL")]),
    }
}

fn bound(value: &Value) -> Option<&Value> {
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn comparison(keyword: &Keyword, operator: &str, value: &Value) -> Expression {
    concat(vec![
        column(keyword),
        parametrized(format!(" {operator} ?"), vec![value.clone()]),
    ])
}

fn like(keyword: &Keyword, pattern: String) -> Expression {
    concat(vec![
        column(keyword),
        parametrized(" LIKE ?", vec![Value::Text(pattern)]),
    ])
}

fn tautology() -> Expression {
    text("1 = 1")
}

/// Boolean negation seeded with a match-everything clause, so a purely
/// negative clause still selects from all rows on engines that need at
/// least one positive disjunct.
fn negate(expression: Expression) -> Expression {
    compound(
        vec![text("1 = 1 AND NOT ("), expression, text(")")],
        "(",
        "",
        ")",
    )
}
