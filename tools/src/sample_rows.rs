//! sample-rows: draw a seeded random row sample from a CSV.
//!
//! Usage:
//!   sample-rows --input data/synth/products_macro_synth.csv --output sample/products.csv --rows 100

use anyhow::Result;
use clap::Parser;
use pricegen_core::sampler::sample_rows;
use std::path::PathBuf;

/// Generate a sample dataset for distribution alongside the repository.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to raw input CSV file
    #[arg(long)]
    input: PathBuf,

    /// Path to output sample CSV file
    #[arg(long)]
    output: PathBuf,

    /// Number of rows to sample
    #[arg(long, default_value_t = 100)]
    rows: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let report = sample_rows(&args.input, &args.output, args.rows, args.seed)?;

    println!(
        "Sample dataset created: {} ({} rows)",
        report.output_path.display(),
        report.rows
    );
    Ok(())
}
