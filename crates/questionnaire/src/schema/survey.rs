//! The fixed respondent schema and per-row question snapshots.

use crate::error::{QuestionnaireError, Result};
use crate::input::DataTable;

pub const AGE_COLUMN: &str = "age";
pub const GENDER_COLUMN: &str = "gender";
pub const EMAIL_COLUMN: &str = "email";
pub const SCORE_COLUMN: &str = "score";

/// The five question columns, in order.
pub const QUESTION_COLUMNS: [&str; 5] = ["q1", "q2", "q3", "q4", "q5"];

/// One respondent's five question values.
///
/// Every mean computed here runs only over present values; a missing answer
/// never contributes a zero or a NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuestionScores(pub [Option<f64>; 5]);

impl QuestionScores {
    pub fn new(values: [Option<f64>; 5]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[Option<f64>; 5] {
        &self.0
    }

    /// Number of unanswered questions.
    pub fn missing_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }

    pub fn is_all_missing(&self) -> bool {
        self.missing_count() == self.0.len()
    }

    /// Arithmetic mean of the answered questions, or `None` if none were answered.
    pub fn mean(&self) -> Option<f64> {
        let (sum, count) = self
            .0
            .iter()
            .flatten()
            .fold((0.0_f64, 0usize), |(sum, count), v| (sum + v, count + 1));

        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Replace every missing answer with the row's own mean.
    ///
    /// Rows with no answers, or no missing answers, come back unchanged.
    pub fn filled_with_mean(&self) -> Self {
        match self.mean() {
            Some(mean) => Self(self.0.map(|v| Some(v.unwrap_or(mean)))),
            None => *self,
        }
    }
}

/// Resolved positions of q1..q5 in a table.
#[derive(Debug, Clone, Copy)]
pub struct QuestionColumns {
    positions: [usize; 5],
}

impl QuestionColumns {
    /// Locate q1..q5 and check that every cell in them is numeric or missing.
    pub fn resolve(table: &DataTable) -> Result<Self> {
        let mut positions = [0usize; 5];

        for (slot, name) in positions.iter_mut().zip(QUESTION_COLUMNS) {
            let index = table
                .column_index(name)
                .ok_or_else(|| QuestionnaireError::schema(name, "required question column is absent"))?;

            if let Some((row, cell)) = table
                .column_values(index)
                .enumerate()
                .find(|(_, cell)| !cell.is_numeric_or_missing())
            {
                return Err(QuestionnaireError::schema(
                    name,
                    format!("expected numeric values, found {} at row {}", cell.kind(), row),
                ));
            }

            *slot = index;
        }

        Ok(Self { positions })
    }

    pub fn positions(&self) -> &[usize; 5] {
        &self.positions
    }

    /// Snapshot the question values of one row.
    pub fn scores(&self, table: &DataTable, row: usize) -> QuestionScores {
        QuestionScores(
            self.positions
                .map(|col| table.get(row, col).and_then(|cell| cell.as_f64())),
        )
    }
}
