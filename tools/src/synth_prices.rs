//! synth-prices: expand a product catalog into monthly synthetic price snapshots.
//!
//! Usage:
//!   synth-prices --input data/raw/products_macro.csv --output data/synth/products_macro_synth.csv
//!   synth-prices --config run.json --seed 7 --years 5
//!   synth-prices --months 1            # single snapshot

use anyhow::{bail, Result};
use clap::Parser;
use pricegen_core::{config::GeneratorConfig, generator::PriceGenerator};
use std::path::PathBuf;

/// Generate synthetic monthly prices and discounts for a product catalog.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Catalog CSV with id, Category, name, price, discount_price columns
    #[arg(long, default_value = "data/raw/products_macro.csv")]
    input: PathBuf,

    /// Destination CSV (parent directories are created)
    #[arg(long, default_value = "data/synth/products_macro_synth.csv")]
    output: PathBuf,

    /// JSON file with GeneratorConfig fields; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    start_year: Option<i32>,

    #[arg(long)]
    start_month: Option<u32>,

    #[arg(long)]
    years: Option<u32>,

    /// Horizon in months; overrides --years
    #[arg(long)]
    months: Option<u32>,

    #[arg(long)]
    inflation_mean: Option<f64>,

    #[arg(long)]
    inflation_std: Option<f64>,

    /// Monthly per-product random walk volatility
    #[arg(long)]
    product_vol: Option<f64>,

    /// Category seasonality amplitude
    #[arg(long)]
    seasonality_amp: Option<f64>,

    #[arg(long)]
    discount_rate_min: Option<f64>,

    #[arg(long)]
    discount_rate_max: Option<f64>,

    #[arg(long)]
    discount_depth_min: Option<f64>,

    #[arg(long)]
    discount_depth_max: Option<f64>,

    /// Twelve comma-separated discount multipliers, January first
    #[arg(long, value_delimiter = ',')]
    discount_month_mult: Option<Vec<f64>>,

    #[arg(long)]
    currency_symbol: Option<String>,

    #[arg(long)]
    decimals: Option<u32>,
}

impl Args {
    fn into_config(self) -> Result<(GeneratorConfig, PathBuf, PathBuf)> {
        let mut cfg = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(v) = self.seed {
            cfg.seed = v;
        }
        if let Some(v) = self.start_year {
            cfg.start_year = v;
        }
        if let Some(v) = self.start_month {
            cfg.start_month = v;
        }
        if let Some(v) = self.years {
            cfg.years = v;
        }
        if self.months.is_some() {
            cfg.months = self.months;
        }
        if let Some(v) = self.inflation_mean {
            cfg.annual_inflation_mean = v;
        }
        if let Some(v) = self.inflation_std {
            cfg.annual_inflation_std = v;
        }
        if let Some(v) = self.product_vol {
            cfg.product_monthly_vol = v;
        }
        if let Some(v) = self.seasonality_amp {
            cfg.category_seasonality_amp = v;
        }
        if let Some(v) = self.discount_rate_min {
            cfg.discount_rate_min = v;
        }
        if let Some(v) = self.discount_rate_max {
            cfg.discount_rate_max = v;
        }
        if let Some(v) = self.discount_depth_min {
            cfg.discount_depth_min = v;
        }
        if let Some(v) = self.discount_depth_max {
            cfg.discount_depth_max = v;
        }
        if let Some(v) = self.discount_month_mult {
            match <[f64; 12]>::try_from(v) {
                Ok(table) => cfg.discount_month_mult = table,
                Err(v) => bail!("--discount-month-mult needs 12 values, got {}", v.len()),
            }
        }
        if let Some(v) = self.currency_symbol {
            cfg.currency_symbol = v;
        }
        if let Some(v) = self.decimals {
            cfg.decimals = v;
        }

        Ok((cfg, self.input, self.output))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let (config, input, output) = Args::parse().into_config()?;
    log::debug!("config: {config:?}");

    let generator = PriceGenerator::new(config)?;
    let report = generator.run(&input, &output)?;

    println!("Saved: {}", report.output_path.display());
    println!(
        "Rows: {} (products={}, months={})",
        report.rows, report.products, report.months
    );
    println!(
        "Discounted rows: {} ({:.1}%)",
        report.discounted_rows,
        report.discounted_share() * 100.0
    );
    println!("Snapshots: {} .. {}", report.first_period, report.last_period);
    Ok(())
}
