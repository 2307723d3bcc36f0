//! Report command - run the full pipeline and summarize it.

use std::path::{Path, PathBuf};

use colored::Colorize;

use super::{CommandResult, bin_label, load, load_config};

pub fn run(file: PathBuf, json_output: bool, config: Option<&Path>, _verbose: bool) -> CommandResult {
    let analysis = load(&file, load_config(config)?)?;
    let report = analysis.report()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Questionnaire report for".cyan().bold(),
        report.source.file.white()
    );
    println!(
        "  {} rows, {} columns ({})",
        report.source.row_count, report.source.column_count, report.source.format
    );
    println!();

    println!("{}", "Emails:".yellow().bold());
    if report.invalid_emails.is_empty() {
        println!("  {}", "All addresses valid".green());
    } else {
        for invalid in &report.invalid_emails {
            println!("  row {}: {}", invalid.row, invalid.email.red());
        }
    }
    println!();

    println!("{}", "Imputation:".yellow().bold());
    println!(
        "  {} values filled in {} rows",
        report.imputed_values.to_string().white().bold(),
        report.imputed_rows.len()
    );
    println!();

    println!("{}", "Scoring:".yellow().bold());
    println!("  Scored:   {}", report.scored_rows.to_string().green());
    println!("  Unscored: {}", report.unscored_rows.to_string().red());
    println!();

    println!("{}", "Age distribution:".yellow().bold());
    let last_bin = report.age_histogram.counts.len().saturating_sub(1);
    for (i, (low, high, count)) in report.age_histogram.bins().enumerate() {
        if count > 0 {
            println!("  {}: {}", bin_label(low, high, i == last_bin), count);
        }
    }
    println!();

    println!("{}", "Gender/age groups:".yellow().bold());
    for group in &report.gender_age_means {
        let bracket = if group.above_threshold { "above" } else { "at/below" };
        println!("  {} {} (n={})", group.gender, bracket, group.count);
    }

    Ok(())
}
