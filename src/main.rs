//! milestones-to-xlsx - export a milestone CSV to an Excel workbook

use anyhow::{bail, Context, Result};
use clap::Parser;
use milestone_xlsx::{export, load_milestones, ExportOptions};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "milestones-to-xlsx")]
#[command(author, version, about = "Export project milestones to Excel", long_about = None)]
struct Cli {
    /// Path to the milestone CSV file
    #[arg(long, value_name = "CSV", env = "MILESTONES_INPUT")]
    input: PathBuf,

    /// Path of the XLSX file to write
    #[arg(
        long,
        value_name = "XLSX",
        env = "MILESTONES_OUTPUT",
        default_value = "milestones.xlsx"
    )]
    output: PathBuf,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if !cli.input.exists() {
        bail!("Input file not found: {}", cli.input.display());
    }

    let milestones = load_milestones(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    export(&cli.output, &milestones, &ExportOptions::from_env())?;

    let saved = std::fs::canonicalize(&cli.output).unwrap_or_else(|_| cli.output.clone());
    println!("Saved: {}", saved.display());
    Ok(())
}
