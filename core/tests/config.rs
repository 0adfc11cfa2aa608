mod common;

use pricegen_core::{
    config::{GeneratorConfig, DEFAULT_DISCOUNT_MONTH_MULT},
    error::GenError,
    generator::PriceGenerator,
};
use tempfile::TempDir;

#[test]
fn defaults_match_reference_run() {
    let cfg = GeneratorConfig::default();
    assert_eq!(cfg.seed, 42);
    assert_eq!((cfg.start_year, cfg.start_month, cfg.years), (2005, 1, 20));
    assert_eq!(cfg.horizon_months(), 240);
    assert_eq!(cfg.discount_multiplier(11), 1.35);
    assert_eq!(cfg.discount_multiplier(7), 0.85);
    assert_eq!(cfg.columns.snapshot, "snapshot_utc");
    cfg.validate().expect("defaults are valid");
}

#[test]
fn partial_json_keeps_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = common::write_csv(
        dir.path(),
        "run.json",
        r#"{ "seed": 7, "years": 2, "currency_symbol": "$", "columns": { "category": "cat" } }"#,
    );

    let cfg = GeneratorConfig::load(&path).unwrap();
    assert_eq!(cfg.seed, 7);
    assert_eq!(cfg.horizon_months(), 24);
    assert_eq!(cfg.currency_symbol, "$");
    assert_eq!(cfg.columns.category, "cat");
    assert_eq!(cfg.columns.price, "price");
    assert_eq!(cfg.discount_month_mult, DEFAULT_DISCOUNT_MONTH_MULT);
    assert_eq!(cfg.product_monthly_vol, 0.015);
}

#[test]
fn months_overrides_years() {
    let cfg = GeneratorConfig { months: Some(1), ..GeneratorConfig::default() };
    assert_eq!(cfg.horizon_months(), 1);
}

#[test]
fn missing_config_file_is_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let err = GeneratorConfig::load(dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, GenError::NotFound { .. }));
}

#[test]
fn inconsistent_values_are_rejected() {
    let base = GeneratorConfig::default_test();
    let bad = [
        GeneratorConfig { start_month: 0, ..base.clone() },
        GeneratorConfig { start_month: 13, ..base.clone() },
        GeneratorConfig { years: 0, ..base.clone() },
        GeneratorConfig { months: Some(0), ..base.clone() },
        GeneratorConfig { product_monthly_vol: -0.1, ..base.clone() },
        GeneratorConfig { discount_rate_min: 0.3, discount_rate_max: 0.2, ..base.clone() },
        GeneratorConfig { discount_depth_max: 1.0, ..base.clone() },
        GeneratorConfig { price_floor: 0.0, ..base.clone() },
        GeneratorConfig { annual_inflation_mean: f64::NAN, ..base.clone() },
        GeneratorConfig { annual_inflation_std: f64::INFINITY, ..base.clone() },
        GeneratorConfig { product_monthly_vol: f64::NAN, ..base.clone() },
        GeneratorConfig { price_floor: f64::NAN, ..base.clone() },
        GeneratorConfig { price_floor: f64::INFINITY, ..base.clone() },
        GeneratorConfig { discount_rate_max: f64::NAN, ..base.clone() },
        GeneratorConfig { discount_depth_min: f64::NEG_INFINITY, ..base.clone() },
    ];
    for cfg in bad {
        let err = PriceGenerator::new(cfg.clone()).err();
        assert!(
            matches!(err, Some(GenError::InvalidConfig { .. })),
            "accepted invalid config: {cfg:?}"
        );
    }
}

