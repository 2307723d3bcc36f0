//! Writing respondent tables back to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{QuestionnaireError, Result};
use crate::input::{DataTable, TableFormat};
use crate::schema::Cell;

impl DataTable {
    /// Save the table in the given format, creating parent directories.
    ///
    /// Missing cells become `null` in JSON and an empty field in CSV/TSV.
    pub fn save(&self, path: impl AsRef<Path>, format: TableFormat) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| QuestionnaireError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, format)?;
        writer.flush().map_err(io_err)
    }

    /// Serialize the table into any writer.
    pub fn write_to<W: Write>(&self, writer: W, format: TableFormat) -> Result<()> {
        match format {
            TableFormat::Json => {
                serde_json::to_writer_pretty(writer, &self.records())?;
                Ok(())
            }
            TableFormat::Csv => self.write_delimited(writer, b','),
            TableFormat::Tsv => self.write_delimited(writer, b'\t'),
        }
    }

    fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        writer.write_record(self.headers())?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|cell| match cell {
                Cell::Missing => String::new(),
                other => other.to_string(),
            }))?;
        }
        writer.flush().map_err(|e| QuestionnaireError::Csv(e.into()))?;
        Ok(())
    }
}
