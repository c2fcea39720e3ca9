//! Type definitions of the search query tree.

use serde::Serialize;

use quill_schema::definition::Definition;

/// The reserved field that discriminates document types. One index holds
/// many definitions; every document carries its definition name here.
pub const TYPE_FIELD: &str = "type";

/// A node in the search engine's query tree. Serializes to the engine's
/// externally-tagged JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchQuery {
    MatchAll,
    Term {
        field: String,
        value: String,
    },
    Range {
        field: String,
        lower: Option<String>,
        upper: Option<String>,
        include_lower: bool,
        include_upper: bool,
    },
    Prefix {
        field: String,
        value: String,
    },
    Wildcard {
        field: String,
        pattern: String,
    },
    Boolean {
        must: Vec<SearchQuery>,
        should: Vec<SearchQuery>,
        must_not: Vec<SearchQuery>,
    },
}

/// Match every document.
pub fn all() -> SearchQuery {
    SearchQuery::MatchAll
}

/// The document-type filter for one definition.
pub fn record_query(definition: &Definition) -> SearchQuery {
    SearchQuery::Term {
        field: TYPE_FIELD.to_string(),
        value: definition.name().to_string(),
    }
}

/// Every query must match.
pub fn and(queries: Vec<SearchQuery>) -> SearchQuery {
    SearchQuery::Boolean {
        must: queries,
        should: vec![],
        must_not: vec![],
    }
}

/// At least one query must match.
pub fn or(queries: Vec<SearchQuery>) -> SearchQuery {
    SearchQuery::Boolean {
        must: vec![],
        should: queries,
        must_not: vec![],
    }
}

/// No query may match. Seeded with a match-all `should` clause so a purely
/// negative query does not vacuously match nothing.
pub fn not(queries: Vec<SearchQuery>) -> SearchQuery {
    SearchQuery::Boolean {
        must: vec![],
        should: vec![all()],
        must_not: queries,
    }
}
