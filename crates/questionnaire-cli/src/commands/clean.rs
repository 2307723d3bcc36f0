//! Clean command - drop rows with an invalid email.

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
    let cleaned = analysis.remove_rows_without_mail()?;

    if verbose {
        let dropped = analysis.data()?.row_count() - cleaned.row_count();
        eprintln!(
            "{} {} of {} rows ({} dropped)",
            "Kept".green(),
            cleaned.row_count(),
            analysis.data()?.row_count(),
            dropped.to_string().red()
        );
    }

    emit_table(&cleaned, output, format, verbose)
}
