//! Row-wise mean imputation of question scores.

use tracing::debug;

use crate::error::Result;
use crate::input::DataTable;
use crate::schema::{Cell, ColumnType, QUESTION_COLUMNS, QuestionColumns};

use super::operations::{CellChange, Imputation};

/// Fills missing question answers with the mean of that respondent's own
/// answered questions.
///
/// The mean is per row, never per column. A row with no answers at all has
/// no mean and is left entirely missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreImputer;

impl ScoreImputer {
    pub fn new() -> Self {
        Self
    }

    /// Impute a copy of `table`.
    ///
    /// Only q1..q5 change; every other column is copied as is.
    pub fn impute(&self, table: &DataTable) -> Result<Imputation> {
        let questions = QuestionColumns::resolve(table)?;
        let mut imputed = table.clone();
        let mut touched_rows = Vec::new();
        let mut changes = Vec::new();

        for row in 0..table.row_count() {
            let scores = questions.scores(table, row);
            if scores.is_complete() || scores.is_all_missing() {
                continue;
            }

            let filled = scores.filled_with_mean();
            for (q, (&position, (before, after))) in questions
                .positions()
                .iter()
                .zip(scores.values().iter().zip(filled.values()))
                .enumerate()
            {
                if before.is_some() {
                    continue;
                }
                let new_value = Cell::from(*after);
                changes.push(CellChange {
                    row,
                    column: QUESTION_COLUMNS[q].to_string(),
                    original_value: Cell::Missing,
                    new_value: new_value.clone(),
                });
                imputed.rows[row][position] = new_value;
            }

            touched_rows.push(row);
        }

        // A filled mean may turn an integer column fractional.
        for &position in questions.positions() {
            imputed.columns[position].column_type =
                match ColumnType::infer(imputed.column_values(position)) {
                    ColumnType::Unknown => table.columns[position].column_type,
                    inferred => inferred,
                };
        }

        debug!(
            rows = table.row_count(),
            touched = touched_rows.len(),
            filled = changes.len(),
            "imputed missing question scores"
        );

        Ok(Imputation {
            table: imputed,
            touched_rows,
            changes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuestionnaireError;

    fn question_table(rows: Vec<[Option<f64>; 5]>) -> DataTable {
        let mut headers = vec!["email".to_string()];
        headers.extend(QUESTION_COLUMNS.iter().map(|q| q.to_string()));
        DataTable::new(
            headers,
            rows.into_iter()
                .map(|qs| {
                    let mut row = vec![Cell::from("x@y.z")];
                    row.extend(qs.into_iter().map(Cell::from));
                    row
                })
                .collect(),
        )
    }

    #[test]
    fn test_complete_rows_untouched() {
        let table = question_table(vec![[Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)]]);
        let result = ScoreImputer::new().impute(&table).unwrap();

        assert!(result.touched_rows.is_empty());
        assert!(result.changes.is_empty());
        assert_eq!(result.table.rows, table.rows);
    }

    #[test]
    fn test_fills_with_row_mean_not_column_mean() {
        let table = question_table(vec![
            [Some(4.0), None, Some(4.0), Some(4.0), Some(4.0)],
            [Some(1.0), Some(1.0), Some(1.0), Some(1.0), Some(1.0)],
        ]);
        let result = ScoreImputer::new().impute(&table).unwrap();

        assert_eq!(result.touched_rows, vec![0]);
        assert_eq!(result.table.get(0, 2), Some(&Cell::Number(4.0)));
        assert_eq!(
            result.changes,
            vec![CellChange {
                row: 0,
                column: "q2".to_string(),
                original_value: Cell::Missing,
                new_value: Cell::Number(4.0),
            }]
        );
    }

    #[test]
    fn test_all_missing_row_stays_missing() {
        let table = question_table(vec![[None; 5], [Some(2.0), None, None, None, Some(3.0)]]);
        let result = ScoreImputer::new().impute(&table).unwrap();

        assert_eq!(result.touched_rows, vec![1]);
        assert!(result.table.rows[0][1..].iter().all(Cell::is_missing));
        assert!(result.table.rows[1][2..5].iter().all(|c| *c == Cell::Number(2.5)));
        assert_eq!(result.values_changed(), 3);
        assert_eq!(result.table.column("q2").unwrap().column_type, ColumnType::Float);
    }

    #[test]
    fn test_input_not_mutated() {
        let table = question_table(vec![[Some(2.0), None, None, None, None]]);
        let before = table.clone();
        let (imputed, touched) = ScoreImputer::new().impute(&table).unwrap().into_parts();

        assert_eq!(table, before);
        assert_eq!(touched, vec![0]);
        assert_eq!(imputed.get(0, 5), Some(&Cell::Number(2.0)));
    }

    #[test]
    fn test_missing_question_column() {
        let table = DataTable::new(vec!["q1".into()], vec![vec![Cell::Number(1.0)]]);
        let err = ScoreImputer::new().impute(&table).unwrap_err();
        assert!(matches!(err, QuestionnaireError::Schema { ref column, .. } if column == "q2"));
    }

    #[test]
    fn test_text_question_column() {
        let mut table = question_table(vec![[Some(1.0); 5]]);
        table.rows[0][3] = Cell::from("three");
        let err = ScoreImputer::new().impute(&table).unwrap_err();
        assert!(matches!(err, QuestionnaireError::Schema { ref column, .. } if column == "q3"));
    }
}
