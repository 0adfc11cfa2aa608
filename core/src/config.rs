use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Discount-probability multiplier per calendar month (January first).
pub const DEFAULT_DISCOUNT_MONTH_MULT: [f64; 12] = [
    0.95, // Jan
    0.95, // Feb
    1.00, // Mar
    1.00, // Apr
    1.00, // May
    0.90, // Jun
    0.85, // Jul
    0.85, // Aug
    1.00, // Sep
    1.05, // Oct
    1.35, // Nov
    1.25, // Dec
];

/// Column names the generator reads and writes.
/// Every other column passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub id:       String,
    pub category: String,
    pub name:     String,
    pub price:    String,
    pub discount: String,
    pub snapshot: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            id:       "id".into(),
            category: "Category".into(),
            name:     "name".into(),
            price:    "price".into(),
            discount: "discount_price".into(),
            snapshot: "snapshot_utc".into(),
        }
    }
}

/// Every knob of a generation run. Built once, never mutated while
/// the generator runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,

    // ── Timeline ───────────────────────────────────
    pub start_year:  i32,
    pub start_month: u32,
    pub years:       u32,
    /// Explicit horizon in months. Overrides `years` when set;
    /// `Some(1)` produces a single snapshot.
    pub months:      Option<u32>,

    // ── Price dynamics ─────────────────────────────
    pub annual_inflation_mean:    f64,
    pub annual_inflation_std:     f64,
    pub product_monthly_vol:      f64,
    pub category_seasonality_amp: f64,
    pub price_floor:              f64,

    // ── Discount dynamics ──────────────────────────
    pub discount_rate_min:   f64,
    pub discount_rate_max:   f64,
    pub discount_rate_cap:   f64,
    pub discount_depth_min:  f64,
    pub discount_depth_max:  f64,
    pub discount_month_mult: [f64; 12],

    // ── Formatting ─────────────────────────────────
    pub currency_symbol: String,
    pub decimals:        u32,
    pub columns:         ColumnNames,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_year: 2005,
            start_month: 1,
            years: 20,
            months: None,
            annual_inflation_mean: 0.02,
            annual_inflation_std: 0.01,
            product_monthly_vol: 0.015,
            category_seasonality_amp: 0.03,
            price_floor: 0.10,
            discount_rate_min: 0.08,
            discount_rate_max: 0.25,
            discount_rate_cap: 0.95,
            discount_depth_min: 0.05,
            discount_depth_max: 0.35,
            discount_month_mult: DEFAULT_DISCOUNT_MONTH_MULT,
            currency_symbol: "€".into(),
            decimals: 2,
            columns: ColumnNames::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load from a JSON file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GenError::NotFound { path: path.to_path_buf() });
        }
        let content = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// One year from January 2020 with the default dynamics.
    /// In tests, use this instead of the twenty-year default.
    pub fn default_test() -> Self {
        Self {
            start_year: 2020,
            years: 1,
            ..Self::default()
        }
    }

    /// Number of monthly snapshots this run produces.
    pub fn horizon_months(&self) -> usize {
        self.months.unwrap_or(self.years.saturating_mul(12)) as usize
    }

    /// Discount multiplier for a calendar month (1–12). Unknown months get 1.0.
    pub fn discount_multiplier(&self, calendar_month: u32) -> f64 {
        match calendar_month {
            1..=12 => self.discount_month_mult[(calendar_month - 1) as usize],
            _ => 1.0,
        }
    }

    pub fn validate(&self) -> GenResult<()> {
        let fail = |reason: String| Err(GenError::InvalidConfig { reason });

        let numeric = [
            ("annual_inflation_mean", self.annual_inflation_mean),
            ("annual_inflation_std", self.annual_inflation_std),
            ("product_monthly_vol", self.product_monthly_vol),
            ("category_seasonality_amp", self.category_seasonality_amp),
            ("price_floor", self.price_floor),
            ("discount_rate_min", self.discount_rate_min),
            ("discount_rate_max", self.discount_rate_max),
            ("discount_rate_cap", self.discount_rate_cap),
            ("discount_depth_min", self.discount_depth_min),
            ("discount_depth_max", self.discount_depth_max),
        ];
        if let Some((name, value)) = numeric.iter().find(|(_, v)| !v.is_finite()) {
            return fail(format!("{name} must be finite, got {value}"));
        }

        if !(1..=12).contains(&self.start_month) {
            return fail(format!("start_month must be 1-12, got {}", self.start_month));
        }
        if self.horizon_months() == 0 {
            return fail("horizon must cover at least one month".into());
        }
        if self.annual_inflation_std < 0.0 || self.product_monthly_vol < 0.0 {
            return fail("standard deviations must be non-negative".into());
        }
        if self.annual_inflation_mean - 4.0 * self.annual_inflation_std <= -1.0 {
            return fail("annual inflation draws would fall at or below -100%".into());
        }
        if !(0.0..1.0).contains(&self.category_seasonality_amp) {
            return fail(format!(
                "category_seasonality_amp must be in [0, 1), got {}",
                self.category_seasonality_amp
            ));
        }
        if self.price_floor <= 0.0 {
            return fail(format!("price_floor must be positive, got {}", self.price_floor));
        }
        if !(0.0 <= self.discount_rate_min
            && self.discount_rate_min <= self.discount_rate_max
            && self.discount_rate_max <= 1.0)
        {
            return fail(format!(
                "discount rate bounds must satisfy 0 <= min <= max <= 1, got [{}, {}]",
                self.discount_rate_min, self.discount_rate_max
            ));
        }
        if !(0.0..=1.0).contains(&self.discount_rate_cap) {
            return fail(format!("discount_rate_cap must be in [0, 1], got {}", self.discount_rate_cap));
        }
        if !(0.0 <= self.discount_depth_min
            && self.discount_depth_min <= self.discount_depth_max
            && self.discount_depth_max < 1.0)
        {
            return fail(format!(
                "discount depth bounds must satisfy 0 <= min <= max < 1, got [{}, {}]",
                self.discount_depth_min, self.discount_depth_max
            ));
        }
        if self.discount_month_mult.iter().any(|m| *m < 0.0 || !m.is_finite()) {
            return fail("discount_month_mult entries must be finite and non-negative".into());
        }
        if self.decimals > 6 {
            return fail(format!("decimals must be at most 6, got {}", self.decimals));
        }
        Ok(())
    }
}
