//! Synthetic retail price series from a static product catalog.
//!
//! `generator` evolves catalog prices month by month (inflation, random
//! walk, category seasonality, discounts); `sampler` draws a seeded row
//! sample from any CSV.

pub mod catalog;
pub mod config;
pub mod currency;
pub mod discount;
pub mod error;
pub mod generator;
pub mod macro_path;
pub mod output;
pub mod random_walk;
pub mod rng;
pub mod sampler;
pub mod seasonality;
pub mod table;
pub mod timeline;
