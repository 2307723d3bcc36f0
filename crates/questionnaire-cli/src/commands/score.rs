//! Score command - add the composite score column.

use std::path::{Path, PathBuf};

use colored::Colorize;
use questionnaire::SubjectScorer;

use super::{CommandResult, emit_table, load, load_config};
use crate::cli::OutputFormat;

pub fn run(
    file: PathBuf,
    max_missing: Option<i64>,
    output: Option<PathBuf>,
    format: OutputFormat,
    config: Option<&Path>,
    verbose: bool,
) -> CommandResult {
    let mut config = load_config(config)?;
    if let Some(max_missing) = max_missing {
        config.max_missing = max_missing;
    }
    let max_missing = config.max_missing;

    let analysis = load(&file, config)?;
    let (scored, summary) = SubjectScorer::new(max_missing)?.score_with_summary(analysis.data()?)?;

    if verbose {
        eprintln!(
            "{} {} rows, {} left unscored (tolerance {})",
            "Scored".green(),
            summary.scored,
            summary.unscored.to_string().yellow(),
            max_missing
        );
    }

    emit_table(&scored, output, format, verbose)
}
