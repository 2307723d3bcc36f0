//! Column schema definition.

use serde::{Deserialize, Serialize};

use super::types::{Cell, ColumnType};

/// Schema for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Position in the table (0-based).
    pub position: usize,
    /// Declared or inferred type.
    pub column_type: ColumnType,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, position: usize, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            position,
            column_type,
        }
    }

    /// Create a column whose type is inferred from its cells.
    pub fn inferred<'a>(
        name: impl Into<String>,
        position: usize,
        cells: impl IntoIterator<Item = &'a Cell>,
    ) -> Self {
        Self::new(name, position, ColumnType::infer(cells))
    }
}
