//! collegefinder-core — Catalog model, filtering, comparison, and quiz scoring.
//!
//! This crate defines the college and scholarship data model, the embedded
//! dataset, and the pure transformations every front end builds on: the
//! finder's filter and sort, the comparison table, and the career quiz.

pub mod bookmarks;
pub mod builtin;
pub mod compare;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod scholarship;
pub mod traits;
