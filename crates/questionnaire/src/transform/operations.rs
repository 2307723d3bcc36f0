//! Results and audit records produced by transforms.

use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::schema::Cell;

/// Audit information for a single cell change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellChange {
    /// Row index (0-based).
    pub row: usize,

    /// Column that was changed.
    pub column: String,

    /// Value before transformation.
    pub original_value: Cell,

    /// Value after transformation.
    pub new_value: Cell,
}

/// Result of running the score imputer.
#[derive(Debug, Clone)]
pub struct Imputation {
    /// The imputed table. The input table is never modified.
    pub table: DataTable,

    /// Rows where at least one value was filled, ascending, no duplicates.
    pub touched_rows: Vec<usize>,

    /// Every filled cell, in row then column order.
    pub changes: Vec<CellChange>,
}

impl Imputation {
    /// Number of cells filled.
    pub fn values_changed(&self) -> usize {
        self.changes.len()
    }

    /// Split into the `(table, touched_rows)` pair.
    pub fn into_parts(self) -> (DataTable, Vec<usize>) {
        (self.table, self.touched_rows)
    }
}

/// Summary of a scoring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Rows that received a score.
    pub scored: usize,

    /// Rows disqualified by the missing-answer tolerance.
    pub unscored: usize,
}
