//! Impute command - fill missing answers with the row mean.

use std::path::{Path, PathBuf};

use colored::Colorize;

use super::{CommandResult, emit_table, load, load_config};
use crate::cli::OutputFormat;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    config: Option<&Path>,
    verbose: bool,
) -> CommandResult {
    let analysis = load(&file, load_config(config)?)?;
    let imputation = analysis.fill_na_with_mean()?;

    if verbose {
        eprintln!(
            "{} {} values in {} rows: {:?}",
            "Filled".green(),
            imputation.values_changed(),
            imputation.touched_rows.len(),
            imputation.touched_rows
        );
        for change in &imputation.changes {
            eprintln!(
                "  row {} {}: {} -> {}",
                change.row,
                change.column.yellow(),
                change.original_value,
                change.new_value.to_string().green()
            );
        }
    }

    emit_table(&imputation.table, output, format, verbose)
}
