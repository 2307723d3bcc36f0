//! Questionnaire CLI - clean and score survey datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Histogram { file, json } => commands::histogram::run(file, json, config, cli.verbose),

        Commands::Clean {
            file,
            output,
            format,
        } => commands::clean::run(file, output, format, config, cli.verbose),

        Commands::Impute {
            file,
            output,
            format,
        } => commands::impute::run(file, output, format, config, cli.verbose),

        Commands::Score {
            file,
            max_missing,
            output,
            format,
        } => commands::score::run(file, max_missing, output, format, config, cli.verbose),

        Commands::Correlate {
            file,
            threshold,
            json,
        } => commands::correlate::run(file, threshold, json, config, cli.verbose),

        Commands::Report { file, json } => commands::report::run(file, json, config, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "questionnaire=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
