//! Persistent per-category color assignment.

pub mod assign;
