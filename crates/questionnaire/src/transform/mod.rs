//! Cleaning transforms over respondent tables.
//!
//! Every transform borrows its input and returns a new table.

mod imputation;
mod operations;
mod scoring;

pub use imputation::ScoreImputer;
pub use operations::{CellChange, Imputation, ScoreSummary};
pub use scoring::{DEFAULT_MAX_MISSING, SubjectScorer};
