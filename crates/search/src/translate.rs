//! Handle predicate-to-search-query translation.

use thiserror::Error;

use quill_schema::keyword::Keyword;
use quill_schema::predicate::{Condition, Predicate};
use quill_schema::value::{StringCodec, Value};

use crate::ast::{self, SearchQuery};

/// A type for search translation errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A predicate shape has no translation, reported with its runtime
    /// shape.
    #[error("unsupported predicate shape: {0}")]
    UnsupportedPredicate(String),
}

/// Translates predicate trees into search query trees.
///
/// Stateless beyond the borrowed codec; every call is a pure function from
/// predicate to query.
pub struct SearchQueries<'a> {
    codec: &'a dyn StringCodec,
}

impl<'a> SearchQueries<'a> {
    pub fn new(codec: &'a dyn StringCodec) -> SearchQueries<'a> {
        SearchQueries { codec }
    }

    /// Translate a whole predicate tree.
    pub fn query(&self, predicate: &Predicate) -> Result<SearchQuery, Error> {
        tracing::debug!(?predicate, "compiling search query");
        self.translate(predicate)
    }

    fn translate(&self, predicate: &Predicate) -> Result<SearchQuery, Error> {
        match predicate {
            Predicate::AlwaysTrue => Ok(ast::all()),
            Predicate::AlwaysFalse => Ok(ast::not(vec![ast::all()])),
            Predicate::Where { keyword, condition } => self.condition(keyword, condition),
            Predicate::And(predicates) => Ok(ast::and(
                predicates
                    .iter()
                    .map(|predicate| self.translate(predicate))
                    .collect::<Result<Vec<_>, Error>>()?,
            )),
            Predicate::Or(predicates) => Ok(ast::or(
                predicates
                    .iter()
                    .map(|predicate| self.translate(predicate))
                    .collect::<Result<Vec<_>, Error>>()?,
            )),
            Predicate::Not(predicate) => Ok(ast::not(vec![self.translate(predicate)?])),
            other => Err(Error::UnsupportedPredicate(format!("{other:?}"))),
        }
    }

    fn condition(&self, keyword: &Keyword, condition: &Condition) -> Result<SearchQuery, Error> {
        match condition {
            Condition::Equals(value) => Ok(self.term(keyword, value)),
            Condition::GreaterThan(value) => {
                Ok(self.range(keyword, Some(value), None, false, true))
            }
            Condition::GreaterThanOrEqualTo(value) => {
                Ok(self.range(keyword, Some(value), None, true, true))
            }
            Condition::LessThan(value) => Ok(self.range(keyword, None, Some(value), true, false)),
            Condition::LessThanOrEqualTo(value) => {
                Ok(self.range(keyword, None, Some(value), true, true))
            }
            Condition::Between(lower, upper) => {
                Ok(self.range(keyword, Some(lower), Some(upper), true, true))
            }
            Condition::In(values) => Ok(ast::or(
                values.iter().map(|value| self.term(keyword, value)).collect(),
            )),
            Condition::StartsWith(prefix) => Ok(SearchQuery::Prefix {
                field: keyword.name().to_string(),
                value: prefix.clone(),
            }),
            Condition::Contains(substring) => Ok(SearchQuery::Wildcard {
                field: keyword.name().to_string(),
                pattern: format!("*{substring}*"),
            }),
            Condition::EndsWith(suffix) => Ok(SearchQuery::Wildcard {
                field: keyword.name().to_string(),
                pattern: format!("*{suffix}"),
            }),
            // The negation of the unbounded range: documents with no value
            // for the field.
            Condition::IsNull => Ok(ast::not(vec![self.range(keyword, None, None, true, true)])),
            Condition::Not(condition) => Ok(ast::not(vec![self.condition(keyword, condition)?])),
            other => Err(Error::UnsupportedPredicate(format!(
                "{other:?} on field '{}'",
                keyword.name()
            ))),
        }
    }

    fn term(&self, keyword: &Keyword, value: &Value) -> SearchQuery {
        SearchQuery::Term {
            field: keyword.name().to_string(),
            value: self.codec.encode(keyword.value_type(), value),
        }
    }

    fn range(
        &self,
        keyword: &Keyword,
        lower: Option<&Value>,
        upper: Option<&Value>,
        include_lower: bool,
        include_upper: bool,
    ) -> SearchQuery {
        SearchQuery::Range {
            field: keyword.name().to_string(),
            lower: self.bound(keyword, lower),
            upper: self.bound(keyword, upper),
            include_lower,
            include_upper,
        }
    }

    fn bound(&self, keyword: &Keyword, value: Option<&Value>) -> Option<String> {
        match value {
            None => None,
            Some(value) if value.is_null() => None,
            Some(value) => Some(self.codec.encode(keyword.value_type(), value)),
        }
    }
}
