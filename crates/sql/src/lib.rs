//! The SQL expression AST, its parameterized-string renderer, and the
//! qualifier rewrite pass.

pub mod sql;
