//! Composite score derivation.

use tracing::debug;

use crate::error::{QuestionnaireError, Result};
use crate::input::DataTable;
use crate::schema::{Cell, ColumnType, QuestionColumns, QuestionScores, SCORE_COLUMN};

use super::operations::ScoreSummary;

/// Default number of unanswered questions still eligible for scoring.
pub const DEFAULT_MAX_MISSING: usize = 1;

/// Adds a `score` column holding the floor of each row's answered-question
/// mean, or `Missing` when too many answers are absent.
///
/// The missing count is taken on the values present at scoring time. If the
/// caller imputes first, every touched row has zero missing answers.
#[derive(Debug, Clone, Copy)]
pub struct SubjectScorer {
    max_missing: usize,
}

impl SubjectScorer {
    /// Create a scorer with the given tolerance. Negative values are rejected.
    pub fn new(max_missing: i64) -> Result<Self> {
        let max_missing = usize::try_from(max_missing).map_err(|_| {
            QuestionnaireError::InvalidArgument(format!(
                "max_missing must be a non-negative integer, got {max_missing}"
            ))
        })?;
        Ok(Self { max_missing })
    }

    pub fn max_missing(&self) -> usize {
        self.max_missing
    }

    /// Score a copy of `table`, appending or overwriting its `score` column.
    pub fn score(&self, table: &DataTable) -> Result<DataTable> {
        self.score_with_summary(table).map(|(table, _)| table)
    }

    /// Like [`score`](Self::score), also reporting how many rows were scored.
    pub fn score_with_summary(&self, table: &DataTable) -> Result<(DataTable, ScoreSummary)> {
        let questions = QuestionColumns::resolve(table)?;
        let mut summary = ScoreSummary::default();

        let cells = (0..table.row_count())
            .map(|row| {
                let score = self.score_row(&questions.scores(table, row)).map_err(|e| match e {
                    QuestionnaireError::InvalidArgument(msg) => {
                        QuestionnaireError::InvalidArgument(format!("row {row}: {msg}"))
                    }
                    other => other,
                })?;
                match score {
                    Some(value) => {
                        summary.scored += 1;
                        Ok(Cell::UInt8(value))
                    }
                    None => {
                        summary.unscored += 1;
                        Ok(Cell::Missing)
                    }
                }
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            max_missing = self.max_missing,
            scored = summary.scored,
            unscored = summary.unscored,
            "scored subjects"
        );

        Ok((table.with_column(SCORE_COLUMN, ColumnType::UInt8, cells), summary))
    }

    /// Score one row snapshot.
    ///
    /// Returns `Ok(None)` when the row has more missing answers than allowed.
    /// A floored mean outside 0..=255 is an error rather than being clamped.
    pub fn score_row(&self, scores: &QuestionScores) -> Result<Option<u8>> {
        if scores.missing_count() > self.max_missing {
            return Ok(None);
        }

        let Some(mean) = scores.mean() else {
            return Ok(None);
        };

        let floored = mean.floor();
        if !(0.0..=f64::from(u8::MAX)).contains(&floored) {
            return Err(QuestionnaireError::InvalidArgument(format!(
                "mean question score {mean} floors to {floored}, outside the 0..=255 score range"
            )));
        }

        Ok(Some(floored as u8))
    }

    /// Read back the `score` column of a scored table.
    pub fn read_scores(table: &DataTable) -> Result<Vec<Option<u8>>> {
        let index = table
            .column_index(SCORE_COLUMN)
            .ok_or_else(|| QuestionnaireError::schema(SCORE_COLUMN, "table has not been scored"))?;

        table
            .column_values(index)
            .enumerate()
            .map(|(row, cell)| match cell {
                Cell::UInt8(v) => Ok(Some(*v)),
                Cell::Missing => Ok(None),
                other => Err(QuestionnaireError::schema(
                    SCORE_COLUMN,
                    format!("expected uint8 or missing, found {} at row {}", other.kind(), row),
                )),
            })
            .collect()
    }
}

impl Default for SubjectScorer {
    fn default() -> Self {
        Self {
            max_missing: DEFAULT_MAX_MISSING,
        }
    }
}
