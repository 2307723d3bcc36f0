//! Data source abstraction and metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::{Cell, ColumnSchema, ColumnType};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (json, csv, tsv).
    pub format: String,
    /// Number of data rows.
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// In-memory respondent table.
///
/// Rows are addressed by position; a row's position is its identity for
/// every index-based result. Transforms never reorder rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    /// Column schemas in table order.
    pub columns: Vec<ColumnSchema>,
    /// Row data (row-major order). Every row has one cell per column.
    pub rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Create a table from headers and rows, inferring column types.
    ///
    /// Short rows are padded with `Missing`; long rows are truncated.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Missing);
                row
            })
            .collect();

        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(i, name)| ColumnSchema::inferred(name, i, rows.iter().map(|r| &r[i])))
            .collect();

        Self { columns, rows }
    }

    /// Build a table from record maps, taking columns in first-seen order.
    ///
    /// A key absent from a record becomes `Missing` in that row.
    pub fn from_records(records: Vec<IndexMap<String, Cell>>) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|mut record| {
                headers
                    .iter()
                    .map(|h| record.swap_remove(h).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self::new(headers, rows)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get all column names.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get a column schema by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Copy the rows at `indices`, in the given order, into a new table.
    ///
    /// The new table is indexed 0..indices.len().
    pub fn select_rows(&self, indices: &[usize]) -> DataTable {
        DataTable {
            columns: self.columns.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }

    /// Return a copy with `name` set to `cells`, typed `column_type`.
    ///
    /// An existing column of that name is overwritten in place; otherwise the
    /// column is appended.
    pub fn with_column(&self, name: &str, column_type: ColumnType, cells: Vec<Cell>) -> DataTable {
        debug_assert_eq!(cells.len(), self.row_count());
        let mut table = self.clone();

        let position = match table.column_index(name) {
            Some(position) => {
                table.columns[position].column_type = column_type;
                position
            }
            None => {
                let position = table.columns.len();
                table.columns.push(ColumnSchema::new(name, position, column_type));
                for row in &mut table.rows {
                    row.push(Cell::Missing);
                }
                position
            }
        };

        for (row, cell) in table.rows.iter_mut().zip(cells) {
            row[position] = cell;
        }

        table
    }

    /// Rows as ordered maps of column name to cell, for serialization.
    pub fn records(&self) -> Vec<IndexMap<&str, &Cell>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| (c.name.as_str(), &row[c.position]))
                    .collect()
            })
            .collect()
    }

    /// Check if a raw text value represents a missing value.
    pub fn is_null_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
    }
}
