//! Example: run the full questionnaire pipeline on a data file.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>
//!
//! Example:
//!   cargo run --example analyze -- data.json

use std::env;
use std::path::Path;

use questionnaire::{QuestionnaireAnalysis, SubjectScorer};

fn main() -> questionnaire::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- data.json");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Questionnaire Analysis: {}", file_path);
    println!("{}", separator);
    println!();

    let mut analysis = QuestionnaireAnalysis::new(path)?;
    analysis.read_data()?;
    let source = analysis.source()?;

    println!("## Source Metadata");
    println!("  File: {}", source.file);
    println!("  Format: {}", source.format);
    println!("  Rows: {}", source.row_count);
    println!("  Columns: {}", source.column_count);
    println!();

    println!("## Age Distribution");
    let hist = analysis.show_age_distrib()?;
    for (left, right, count) in hist.bins() {
        println!("  [{:>5.1}, {:>5.1}) {:>5} {}", left, right, count, "#".repeat(count as usize));
    }
    println!();

    let cleaned = analysis.remove_rows_without_mail()?;
    println!("## Email Validation");
    println!(
        "  Kept {} of {} rows",
        cleaned.row_count(),
        analysis.data()?.row_count()
    );
    println!();

    let imputation = analysis.fill_na_with_mean()?;
    println!("## Imputation");
    println!(
        "  Filled {} values in {} rows",
        imputation.values_changed(),
        imputation.touched_rows.len()
    );
    for change in imputation.changes.iter().take(10) {
        println!(
            "    row {:>4} {}: {} -> {}",
            change.row, change.column, change.original_value, change.new_value
        );
    }
    println!();

    let scored = analysis.score_subjects(analysis.config().max_missing)?;
    let scores = SubjectScorer::read_scores(&scored)?;
    println!("## Scores");
    println!(
        "  Scored {} rows, {} disqualified",
        scores.iter().filter(|s| s.is_some()).count(),
        scores.iter().filter(|s| s.is_none()).count()
    );
    println!();

    println!("## Means by Gender and Age");
    for group in analysis.correlate_gender_age()? {
        let means: Vec<String> = group
            .means
            .iter()
            .map(|m| m.map_or("NA".to_string(), |v| format!("{:.2}", v)))
            .collect();
        println!(
            "  {:10} {:>5} n={:<4} {}",
            group.gender,
            if group.above_threshold { "older" } else { "young" },
            group.count,
            means.join("  ")
        );
    }
    println!();

    println!("{}", separator);

    Ok(())
}
