//! Histogram command - show the age distribution.

use std::path::{Path, PathBuf};

use colored::Colorize;

use super::{CommandResult, bin_label, load, load_config};

const BAR_WIDTH: u64 = 40;

pub fn run(file: PathBuf, json_output: bool, config: Option<&Path>, _verbose: bool) -> CommandResult {
    let analysis = load(&file, load_config(config)?)?;
    let histogram = analysis.show_age_distrib()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&histogram)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Age distribution for".cyan().bold(),
        file.display().to_string().white()
    );
    println!();

    let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
    let last_bin = histogram.counts.len().saturating_sub(1);
    for (i, (low, high, count)) in histogram.bins().enumerate() {
        let filled = (count * BAR_WIDTH).div_ceil(peak) as usize;
        println!(
            "  {:<14} {:>5}  {}",
            bin_label(low, high, i == last_bin),
            count.to_string().white().bold(),
            "█".repeat(filled).cyan()
        );
    }
    println!();
    println!("Total: {} respondents with a known age", histogram.total());

    Ok(())
}
