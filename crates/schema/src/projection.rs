//! Projection, aggregate and ordering specs consumed by the grammars.

use crate::keyword::Keyword;
use crate::value::ValueType;

/// One projected item in a select: a plain column or an aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Column(Keyword),
    Aggregate(Aggregate),
}

impl From<Keyword> for Projection {
    fn from(keyword: Keyword) -> Projection {
        Projection::Column(keyword)
    }
}

impl From<Aggregate> for Projection {
    fn from(aggregate: Aggregate) -> Projection {
        Projection::Aggregate(aggregate)
    }
}

/// An aggregate over one column, optionally given a projection alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub function: AggregateFunction,
    pub column: Keyword,
    pub alias: Option<String>,
}

impl Aggregate {
    pub fn new(function: AggregateFunction, column: Keyword) -> Aggregate {
        Aggregate {
            function,
            column,
            alias: None,
        }
    }

    pub fn count(column: Keyword) -> Aggregate {
        Aggregate::new(AggregateFunction::Count, column)
    }

    /// The `count(*) AS record_count` projection.
    pub fn count_star() -> Aggregate {
        Aggregate::count(Keyword::new("*", ValueType::Integer)).aliased("record_count")
    }

    pub fn sum(column: Keyword) -> Aggregate {
        Aggregate::new(AggregateFunction::Sum, column)
    }

    pub fn minimum(column: Keyword) -> Aggregate {
        Aggregate::new(AggregateFunction::Minimum, column)
    }

    pub fn maximum(column: Keyword) -> Aggregate {
        Aggregate::new(AggregateFunction::Maximum, column)
    }

    pub fn average(column: Keyword) -> Aggregate {
        Aggregate::new(AggregateFunction::Average, column)
    }

    pub fn aliased(mut self, alias: impl Into<String>) -> Aggregate {
        self.alias = Some(alias.into());
        self
    }
}

/// The aggregate functions the grammars know how to spell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateFunction {
    Count,
    Sum,
    Minimum,
    Maximum,
    Average,
    /// String aggregation; the dialect decides the function name.
    Concat { separator: String },
}

/// One element of an ordering spec.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub keyword: Keyword,
    pub direction: Direction,
}

impl Sort {
    pub fn ascending(keyword: Keyword) -> Sort {
        Sort {
            keyword,
            direction: Direction::Ascending,
        }
    }

    pub fn descending(keyword: Keyword) -> Sort {
        Sort {
            keyword,
            direction: Direction::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}
