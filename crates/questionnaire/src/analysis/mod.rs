//! Aggregate statistics over respondent tables.

mod correlation;
mod histogram;

pub use correlation::{DEFAULT_AGE_THRESHOLD, GroupMeans, correlate_gender_age};
pub use histogram::{AgeHistogram, HistogramConfig, MAX_BINS, age_distribution};
