//! The composable predicate algebra over keywords.

use crate::keyword::Keyword;
use crate::value::Value;

/// A boolean condition over records.
///
/// `Where` binds a leaf [`Condition`] to a column; `And`, `Or` and `Not`
/// compose whole predicates, never unbound conditions. The enum is
/// non-exhaustive so translators keep an unsupported-shape arm for variants
/// added later.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Predicate {
    AlwaysTrue,
    AlwaysFalse,
    Where {
        keyword: Keyword,
        condition: Condition,
    },
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
}

/// A leaf predicate, meaningful only once bound to a keyword.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Condition {
    Equals(Value),
    GreaterThan(Value),
    GreaterThanOrEqualTo(Value),
    LessThan(Value),
    LessThanOrEqualTo(Value),
    /// Closed range over both bounds; a `Null` bound is unbounded on that
    /// side.
    Between(Value, Value),
    In(Vec<Value>),
    StartsWith(String),
    Contains(String),
    EndsWith(String),
    IsNull,
    Not(Box<Condition>),
}

impl Predicate {
    /// Bind a leaf condition to a column.
    pub fn where_(keyword: Keyword, condition: Condition) -> Predicate {
        Predicate::Where { keyword, condition }
    }

    pub fn and(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
        Predicate::And(predicates.into_iter().collect())
    }

    pub fn or(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
        Predicate::Or(predicates.into_iter().collect())
    }

    pub fn not(predicate: Predicate) -> Predicate {
        Predicate::Not(Box::new(predicate))
    }
}
