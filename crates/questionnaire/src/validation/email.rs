//! Email address validation and row filtering.
//!
//! The accepted grammar is a small, deterministic subset of real address
//! syntax. An address is valid when:
//!
//! - it contains exactly one `@`
//! - it contains at least one `.`
//! - it neither starts nor ends with `@` or `.`
//! - the character right after `@` is not `.`
//!
//! No other character restriction applies; any unicode content passes.
//! There is no DNS or MX lookup.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{QuestionnaireError, Result};
use crate::input::DataTable;
use crate::schema::{Cell, EMAIL_COLUMN};

// One `@`, no leading/trailing `@` or `.`, and no `.` right after the `@`.
// The "at least one dot" rule is checked separately.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@.][^@]*@[^@.](?:[^@]*[^@.])?$").unwrap());

/// A row rejected by the email filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidEmail {
    /// Row position in the input table.
    pub row: usize,
    /// The rejected address.
    pub email: String,
}

/// Validates the `email` column of respondent tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check a single address against the grammar. Never fails.
    pub fn is_valid(email: &str) -> bool {
        email.contains('.') && EMAIL_SHAPE.is_match(email)
    }

    /// Keep only rows with a valid email, reindexed 0..k-1 in original order.
    ///
    /// Fails without filtering anything if the column is absent or any row
    /// holds a non-string email.
    pub fn filter_valid(&self, table: &DataTable) -> Result<DataTable> {
        let emails = email_cells(table)?;

        let keep: Vec<usize> = emails
            .iter()
            .enumerate()
            .filter(|(_, email)| Self::is_valid(email))
            .map(|(row, _)| row)
            .collect();

        let dropped = table.row_count() - keep.len();
        if dropped > 0 {
            warn!(dropped, kept = keep.len(), "dropped rows with invalid email");
        } else {
            debug!(rows = keep.len(), "all emails valid");
        }

        Ok(table.select_rows(&keep))
    }

    /// List the rows whose email fails validation, in row order.
    pub fn invalid_rows(&self, table: &DataTable) -> Result<Vec<InvalidEmail>> {
        let emails = email_cells(table)?;

        Ok(emails
            .into_iter()
            .enumerate()
            .filter(|(_, email)| !Self::is_valid(email))
            .map(|(row, email)| InvalidEmail {
                row,
                email: email.to_string(),
            })
            .collect())
    }
}

/// Borrow every email as a string, failing on the first non-string cell.
fn email_cells(table: &DataTable) -> Result<Vec<&str>> {
    let index = table
        .column_index(EMAIL_COLUMN)
        .ok_or_else(|| QuestionnaireError::schema(EMAIL_COLUMN, "required column is absent"))?;

    table
        .column_values(index)
        .enumerate()
        .map(|(row, cell)| match cell {
            Cell::Text(s) => Ok(s.as_str()),
            other => Err(QuestionnaireError::InvalidInput {
                row,
                column: EMAIL_COLUMN.to_string(),
                message: format!("expected a string email, found {}", other.kind()),
            }),
        })
        .collect()
}
