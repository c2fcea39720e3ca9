//! Translate the predicate/record algebra into dialect-specific SQL
//! statements.

pub mod translation;
