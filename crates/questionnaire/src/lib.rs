//! Questionnaire: cleaning and scoring pipeline for survey datasets.
//!
//! A respondent table carries `age`, `gender`, `email` and five question
//! scores `q1..q5`. The library validates emails, imputes missing answers
//! from each respondent's own mean, and derives a composite score, plus an
//! age histogram and gender/age grouped means.
//!
//! # Core Principles
//!
//! - **Non-destructive**: every transform borrows its input and returns a new table
//! - **Explicit missingness**: a missing value is [`Cell::Missing`], never zero or NaN
//! - **Fail fast**: schema and argument problems surface as errors, never as partial output
//!
//! # Example
//!
//! ```no_run
//! use questionnaire::QuestionnaireAnalysis;
//!
//! let mut analysis = QuestionnaireAnalysis::new("data.json").unwrap();
//! analysis.read_data().unwrap();
//!
//! let cleaned = analysis.remove_rows_without_mail().unwrap();
//! let imputed = analysis.fill_na_with_mean().unwrap();
//! let scored = analysis.score_subjects(1).unwrap();
//!
//! println!("Valid rows: {}", cleaned.row_count());
//! println!("Imputed rows: {:?}", imputed.touched_rows);
//! println!("Columns: {:?}", scored.headers());
//! ```

pub mod analysis;
pub mod error;
pub mod input;
pub mod schema;
pub mod transform;
pub mod validation;

mod export;
mod questionnaire;

pub use crate::questionnaire::{AnalysisConfig, AnalysisReport, QuestionnaireAnalysis};
pub use analysis::{AgeHistogram, GroupMeans, HistogramConfig, age_distribution, correlate_gender_age};
pub use error::{QuestionnaireError, Result};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata, TableFormat};
pub use schema::{Cell, ColumnSchema, ColumnType, QuestionScores};
pub use transform::{CellChange, Imputation, ScoreImputer, ScoreSummary, SubjectScorer};
pub use validation::{EmailValidator, InvalidEmail};
