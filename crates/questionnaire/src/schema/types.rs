//! Core type definitions for cells and columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared or inferred data type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers (no fractional part).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Text/string values.
    String,
    /// Boolean values (true/false).
    Boolean,
    /// Fixed-width unsigned 8-bit integers or missing.
    UInt8,
    /// Mixed values, or no non-missing value to infer from.
    #[default]
    Unknown,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnType::Integer | ColumnType::Float | ColumnType::UInt8
        )
    }

    /// Infer the type of a column from its cells. Missing cells are ignored.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        let mut inferred: Option<ColumnType> = None;

        for cell in cells {
            let cell_type = match cell {
                Cell::Missing => continue,
                Cell::Number(v) if v.fract() == 0.0 => ColumnType::Integer,
                Cell::Number(_) => ColumnType::Float,
                Cell::Text(_) => ColumnType::String,
                Cell::Bool(_) => ColumnType::Boolean,
                Cell::UInt8(_) => ColumnType::UInt8,
            };

            inferred = Some(match (inferred, cell_type) {
                (None, t) => t,
                (Some(a), b) if a == b => a,
                (Some(ColumnType::Integer), ColumnType::Float)
                | (Some(ColumnType::Float), ColumnType::Integer) => ColumnType::Float,
                _ => return ColumnType::Unknown,
            });
        }

        inferred.unwrap_or_default()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::String => "string",
            ColumnType::Boolean => "boolean",
            ColumnType::UInt8 => "uint8",
            ColumnType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A single table value.
///
/// `Missing` is an explicit absence and is never conflated with zero or NaN.
/// Serializes to the matching JSON scalar (`Missing` becomes `null`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Missing,
    Number(f64),
    Text(String),
    Bool(bool),
    UInt8(u8),
}

impl Cell {
    /// Build a numeric cell; NaN becomes `Missing`.
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Cell::Missing
        } else {
            Cell::Number(value)
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Whether this cell can live in a numeric column.
    pub fn is_numeric_or_missing(&self) -> bool {
        matches!(self, Cell::Missing | Cell::Number(_) | Cell::UInt8(_))
    }

    /// Numeric value of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::UInt8(v) => Some(f64::from(*v)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Missing => "missing",
            Cell::Number(_) => "number",
            Cell::Text(_) => "text",
            Cell::Bool(_) => "boolean",
            Cell::UInt8(_) => "uint8",
        }
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Missing, Cell::number)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => f.write_str("NA"),
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::UInt8(v) => write!(f, "{v}"),
        }
    }
}
