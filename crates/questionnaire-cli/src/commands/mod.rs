//! CLI command implementations.

pub mod clean;
pub mod correlate;
pub mod histogram;
pub mod impute;
pub mod report;
pub mod score;

use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use questionnaire::{AnalysisConfig, DataTable, QuestionnaireAnalysis, TableFormat};

use crate::cli::OutputFormat;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Load the configuration file, or the defaults when none was given.
pub fn load_config(config: Option<&Path>) -> Result<AnalysisConfig, Box<dyn std::error::Error>> {
    match config {
        Some(path) => Ok(AnalysisConfig::from_file(path)?),
        None => Ok(AnalysisConfig::default()),
    }
}

/// Open `file` and read it into memory.
pub fn load(file: &Path, config: AnalysisConfig) -> Result<QuestionnaireAnalysis, Box<dyn std::error::Error>> {
    let mut analysis = QuestionnaireAnalysis::with_config(file, config)?;
    analysis.read_data()?;
    Ok(analysis)
}

/// Interval notation for a histogram bin. Only the last bin is closed.
pub fn bin_label(low: f64, high: f64, last: bool) -> String {
    let close = if last { ']' } else { ')' };
    format!("[{}, {}{}", low, high, close)
}

/// Write `table` to `output`, or to stdout when no path is given.
pub fn emit_table(
    table: &DataTable,
    output: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> CommandResult {
    let format = TableFormat::from(format);
    match output {
        Some(path) => {
            table.save(&path, format)?;
            if verbose {
                eprintln!(
                    "{} {} rows to {}",
                    "Wrote".green(),
                    table.row_count(),
                    path.display()
                );
            }
        }
        None => {
            let stdout = io::stdout();
            table.write_to(stdout.lock(), format)?;
            if matches!(format, TableFormat::Json) {
                println!();
            }
        }
    }
    Ok(())
}
