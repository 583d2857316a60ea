//! `tagrule-check` entry point.

use std::path::{self, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tagrule_analyzer::{Analyzer, AnalyzerError, Report};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tagrule-check", version)]
#[command(about = "Validates tag annotations in a Rust package without running it", long_about = None)]
struct Cli {
    /// Package directory to validate
    #[arg(short, long)]
    package: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log discovery and scanning progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<Report, Box<dyn std::error::Error>> {
    let package = path::absolute(&cli.package).map_err(|e| AnalyzerError::Io {
        path: cli.package.clone(),
        source: e,
    })?;
    let report = Analyzer::new().analyze(&package)?;

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_text(&report),
    }
    Ok(report)
}

fn print_text(report: &Report) {
    if report.is_clean() {
        println!("All tags are valid");
        return;
    }
    for diagnostic in &report.diagnostics {
        eprintln!("{diagnostic}");
    }
    eprintln!("found {} tag validation errors", report.error_count());
}
