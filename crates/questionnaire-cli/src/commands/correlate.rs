//! Correlate command - question means by gender and age bracket.

use std::path::{Path, PathBuf};

use colored::Colorize;
use questionnaire::schema::QUESTION_COLUMNS;

use super::{CommandResult, load, load_config};

pub fn run(
    file: PathBuf,
    threshold: Option<f64>,
    json_output: bool,
    config: Option<&Path>,
    _verbose: bool,
) -> CommandResult {
    let mut config = load_config(config)?;
    if let Some(threshold) = threshold {
        config.age_threshold = threshold;
    }
    let threshold = config.age_threshold;

    let analysis = load(&file, config)?;
    let groups = analysis.correlate_gender_age()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    println!(
        "{} {} {}",
        "Question means by gender and age (threshold".cyan().bold(),
        threshold.to_string().white().bold(),
        ")".cyan().bold()
    );
    println!();

    print!("  {:<12} {:<8} {:>6}", "gender", "age", "n");
    for question in QUESTION_COLUMNS {
        print!(" {:>6}", question);
    }
    println!();

    for group in &groups {
        let bracket = if group.above_threshold { "above" } else { "at/below" };
        print!("  {:<12} {:<8} {:>6}", group.gender, bracket, group.count);
        for mean in group.means {
            match mean {
                Some(value) => print!(" {:>6.2}", value),
                None => print!(" {:>6}", "NA".dimmed()),
            }
        }
        println!();
    }

    if groups.is_empty() {
        println!("  {}", "No rows with both gender and age".yellow());
    }

    Ok(())
}
