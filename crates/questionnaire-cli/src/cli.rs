//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use questionnaire::TableFormat;
use std::path::PathBuf;

/// Questionnaire: clean and score survey datasets
#[derive(Parser)]
#[command(name = "questionnaire")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file (parser, histogram bins, tolerance, age threshold)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the age distribution of the respondents
    Histogram {
        /// Path to the data file (JSON/CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drop rows with an invalid email address
    Clean {
        /// Path to the data file (JSON/CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the cleaned table (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,
    },

    /// Fill missing question answers with each row's own mean
    Impute {
        /// Path to the data file (JSON/CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the imputed table (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,
    },

    /// Add a composite score column
    Score {
        /// Path to the data file (JSON/CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Maximum unanswered questions still eligible for scoring
        #[arg(short, long, allow_negative_numbers = true)]
        max_missing: Option<i64>,

        /// Output path for the scored table (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,
    },

    /// Show question means by gender and age bracket
    Correlate {
        /// Path to the data file (JSON/CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Age separating the two brackets
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the whole pipeline and summarize the results
    Report {
        /// Path to the data file (JSON/CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv, tsv, or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl From<OutputFormat> for TableFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => TableFormat::Csv,
            OutputFormat::Tsv => TableFormat::Tsv,
            OutputFormat::Json => TableFormat::Json,
        }
    }
}
