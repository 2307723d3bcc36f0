//! Question means grouped by gender and age bracket.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QuestionnaireError, Result};
use crate::input::DataTable;
use crate::schema::{AGE_COLUMN, Cell, GENDER_COLUMN, QuestionColumns};

/// Default age splitting the two brackets.
pub const DEFAULT_AGE_THRESHOLD: f64 = 40.0;

/// Per-question means for one (gender, age bracket) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMeans {
    pub gender: String,
    /// Whether the group's respondents are older than the threshold.
    pub above_threshold: bool,
    /// Rows in the group.
    pub count: usize,
    /// Mean of q1..q5 over present values; `None` if the group answered none.
    pub means: [Option<f64>; 5],
}

#[derive(Default)]
struct Accumulator {
    count: usize,
    sums: [f64; 5],
    answered: [usize; 5],
}

/// Mean of each question per `(gender, age > threshold)` group.
///
/// Rows with a missing age or gender are left out. Groups come back sorted
/// by gender, then `false` before `true`.
pub fn correlate_gender_age(table: &DataTable, age_threshold: f64) -> Result<Vec<GroupMeans>> {
    let questions = QuestionColumns::resolve(table)?;
    let age_index = table
        .column_index(AGE_COLUMN)
        .ok_or_else(|| QuestionnaireError::schema(AGE_COLUMN, "required column is absent"))?;
    let gender_index = table
        .column_index(GENDER_COLUMN)
        .ok_or_else(|| QuestionnaireError::schema(GENDER_COLUMN, "required column is absent"))?;

    let mut groups: BTreeMap<(String, bool), Accumulator> = BTreeMap::new();
    let mut skipped = 0usize;

    for row in 0..table.row_count() {
        let age = match &table.rows[row][age_index] {
            Cell::Missing => None,
            cell => Some(cell.as_f64().ok_or_else(|| {
                QuestionnaireError::schema(
                    AGE_COLUMN,
                    format!("expected numeric values, found {} at row {}", cell.kind(), row),
                )
            })?),
        };
        let gender = table.rows[row][gender_index].as_str();

        let (Some(age), Some(gender)) = (age, gender) else {
            skipped += 1;
            continue;
        };

        let acc = groups
            .entry((gender.to_string(), age > age_threshold))
            .or_default();
        acc.count += 1;
        for (q, value) in questions.scores(table, row).values().iter().enumerate() {
            if let Some(v) = value {
                acc.sums[q] += v;
                acc.answered[q] += 1;
            }
        }
    }

    debug!(groups = groups.len(), skipped, "grouped question means");

    Ok(groups
        .into_iter()
        .map(|((gender, above_threshold), acc)| GroupMeans {
            gender,
            above_threshold,
            count: acc.count,
            means: std::array::from_fn(|q| {
                (acc.answered[q] > 0).then(|| acc.sums[q] / acc.answered[q] as f64)
            }),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::QUESTION_COLUMNS;

    fn survey(rows: Vec<(&str, Option<f64>, [Option<f64>; 5])>) -> DataTable {
        let mut headers = vec!["gender".to_string(), "age".to_string()];
        headers.extend(QUESTION_COLUMNS.iter().map(|q| q.to_string()));
        DataTable::new(
            headers,
            rows.into_iter()
                .map(|(g, age, qs)| {
                    let mut row = vec![Cell::from(g), Cell::from(age)];
                    row.extend(qs.into_iter().map(Cell::from));
                    row
                })
                .collect(),
        )
    }

    #[test]
    fn test_groups_sorted_with_means() {
        let table = survey(vec![
            ("Male", Some(50.0), [Some(2.0), Some(4.0), None, Some(1.0), Some(1.0)]),
            ("Female", Some(20.0), [Some(1.0); 5]),
            ("Male", Some(60.0), [Some(4.0), None, None, Some(1.0), Some(1.0)]),
            ("Male", Some(40.0), [Some(5.0); 5]),
        ]);

        let groups = correlate_gender_age(&table, DEFAULT_AGE_THRESHOLD).unwrap();

        let keys: Vec<(&str, bool)> = groups
            .iter()
            .map(|g| (g.gender.as_str(), g.above_threshold))
            .collect();
        assert_eq!(keys, vec![("Female", false), ("Male", false), ("Male", true)]);

        let older_men = &groups[2];
        assert_eq!(older_men.count, 2);
        assert_eq!(older_men.means, [Some(3.0), Some(4.0), None, Some(1.0), Some(1.0)]);
        // 40 is not above 40.
        assert_eq!(groups[1].means[0], Some(5.0));
    }

    #[test]
    fn test_missing_age_or_gender_skipped() {
        let mut table = survey(vec![
            ("Female", None, [Some(1.0); 5]),
            ("Female", Some(30.0), [Some(3.0); 5]),
        ]);
        table.rows[1][0] = Cell::Missing;

        let groups = correlate_gender_age(&table, DEFAULT_AGE_THRESHOLD).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_requires_gender_column() {
        let table = DataTable::new(
            QUESTION_COLUMNS.iter().chain(["age"].iter()).map(|s| s.to_string()).collect(),
            vec![],
        );
        let err = correlate_gender_age(&table, DEFAULT_AGE_THRESHOLD).unwrap_err();
        assert!(matches!(err, QuestionnaireError::Schema { ref column, .. } if column == "gender"));
    }
}
