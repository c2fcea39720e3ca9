//! Translate the predicate algebra into structured full-text search
//! queries, sharing the same value codec as the SQL side so both backends
//! agree on string boundaries.

pub mod ast;
pub mod translate;

pub use ast::{SearchQuery, TYPE_FIELD};
pub use translate::{Error, SearchQueries};
