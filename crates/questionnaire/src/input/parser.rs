//! JSON/CSV loader for respondent tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{QuestionnaireError, Result};
use crate::schema::Cell;
use super::source::{DataTable, SourceMetadata};

/// Supported table file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// A JSON array of record objects.
    Json,
    Csv,
    Tsv,
}

impl TableFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(TableFormat::Json),
            "csv" => Some(TableFormat::Csv),
            "tsv" | "tab" => Some(TableFormat::Tsv),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TableFormat::Json => "json",
            TableFormat::Csv => "csv",
            TableFormat::Tsv => "tsv",
        }
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Format to use (None = detect from extension).
    pub format: Option<TableFormat>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
}

/// Loads respondent tables from files.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();
        let io_err = |source| QuestionnaireError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let size_bytes = file.metadata().map_err(io_err)?.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let format = match self.config.format {
            Some(format) => format,
            None => TableFormat::from_path(path).ok_or_else(|| {
                QuestionnaireError::UnsupportedFormat(format!(
                    "cannot infer format of '{}'; expected .json, .csv or .tsv",
                    path.display()
                ))
            })?,
        };

        let table = self.parse_bytes(&contents, format)?;
        debug!(
            path = %path.display(),
            format = format.name(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded table"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format.name().to_string(),
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse in-memory bytes in the given format.
    pub fn parse_bytes(&self, bytes: &[u8], format: TableFormat) -> Result<DataTable> {
        let table = match format {
            TableFormat::Json => self.parse_json(bytes)?,
            TableFormat::Csv => self.parse_delimited(bytes, b',')?,
            TableFormat::Tsv => self.parse_delimited(bytes, b'\t')?,
        };

        if table.column_count() == 0 {
            return Err(QuestionnaireError::EmptyData("No columns found".to_string()));
        }

        Ok(table)
    }

    fn parse_json(&self, bytes: &[u8]) -> Result<DataTable> {
        let raw: Vec<IndexMap<String, Value>> = serde_json::from_slice(bytes)?;
        let limit = self.config.max_rows.unwrap_or(usize::MAX);

        let records = raw
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(row, record)| {
                record
                    .into_iter()
                    .map(|(key, value)| {
                        let cell = json_to_cell(value).ok_or_else(|| QuestionnaireError::InvalidInput {
                            row,
                            column: key.clone(),
                            message: "nested arrays and objects are not supported".to_string(),
                        })?;
                        Ok((key, cell))
                    })
                    .collect::<Result<IndexMap<_, _>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DataTable::from_records(records))
    }

    fn parse_delimited(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            rows.push(record.iter().map(text_to_cell).collect());
        }

        Ok(DataTable::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a JSON scalar into a cell. Arrays and objects have no cell form.
fn json_to_cell(value: Value) -> Option<Cell> {
    match value {
        Value::Null => Some(Cell::Missing),
        Value::Bool(b) => Some(Cell::Bool(b)),
        Value::Number(n) => Some(n.as_f64().map_or(Cell::Missing, Cell::number)),
        Value::String(s) => Some(Cell::Text(s)),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Convert a raw delimited field into a cell.
fn text_to_cell(raw: &str) -> Cell {
    if DataTable::is_null_value(raw) {
        return Cell::Missing;
    }

    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<f64>() {
        return Cell::number(v);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" => Cell::Bool(true),
        "false" => Cell::Bool(false),
        _ => Cell::Text(raw.to_string()),
    }
}
