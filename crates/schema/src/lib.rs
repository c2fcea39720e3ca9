//! The record/keyword data model shared by the SQL and search compilers.
//!
//! Everything in this crate is an immutable value: deriving an aliased or
//! qualified keyword, setting a record field, or composing predicates always
//! returns a new value and never mutates in place.

pub mod definition;
pub mod keyword;
pub mod predicate;
pub mod projection;
pub mod record;
pub mod value;

pub use definition::Definition;
pub use keyword::{Keyword, Metadata};
pub use predicate::{Condition, Predicate};
pub use projection::{Aggregate, AggregateFunction, Direction, Projection, Sort};
pub use record::Record;
pub use value::{LexicalCodec, StringCodec, Value, ValueType};
