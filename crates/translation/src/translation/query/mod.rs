pub mod aggregates;
pub mod filtering;
pub mod helpers;
pub mod sorting;
