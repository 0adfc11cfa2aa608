//! Macro inflation path — one economy-wide price multiplier per month.

use crate::{config::GeneratorConfig, error::GenResult, rng::SimRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroPath {
    /// Sampled annual inflation rate per month.
    pub annual_rates:  Vec<f64>,
    /// Equivalent monthly compounding rate per month.
    pub monthly_rates: Vec<f64>,
    /// Cumulative product of `1 + monthly_rate`. Entry 0 already carries
    /// the first month's drift; there is no neutral 1.0 baseline.
    pub multipliers:   Vec<f64>,
}

impl MacroPath {
    pub fn simulate(config: &GeneratorConfig, n_months: usize, rng: &mut SimRng) -> GenResult<Self> {
        let annual_rates = rng.normals(
            config.annual_inflation_mean,
            config.annual_inflation_std,
            n_months,
        )?;
        let monthly_rates: Vec<f64> = annual_rates
            .iter()
            .map(|a| monthly_rate(*a))
            .collect();

        let multipliers = monthly_rates
            .iter()
            .scan(1.0, |acc, r| {
                *acc *= 1.0 + r;
                Some(*acc)
            })
            .collect::<Vec<_>>();

        if let (Some(first), Some(last)) = (multipliers.first(), multipliers.last()) {
            log::debug!(
                "macro: {n_months} months, multiplier {first:.4} -> {last:.4}"
            );
        }

        Ok(Self { annual_rates, monthly_rates, multipliers })
    }
}

/// Monthly rate that compounds to `annual` over twelve months.
pub fn monthly_rate(annual: f64) -> f64 {
    (1.0 + annual).powf(1.0 / 12.0) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_rate_compounds_back_to_annual() {
        let m = monthly_rate(0.02);
        assert!(((1.0 + m).powi(12) - 1.02).abs() < 1e-12);
    }

    #[test]
    fn first_multiplier_carries_one_month_of_drift() {
        let config = GeneratorConfig::default_test();
        let mut rng = SimRng::new(42);
        let path = MacroPath::simulate(&config, 12, &mut rng).unwrap();
        assert_eq!(path.multipliers.len(), 12);
        assert_eq!(path.multipliers[0], 1.0 + path.monthly_rates[0]);
        for t in 1..12 {
            let expected = path.multipliers[t - 1] * (1.0 + path.monthly_rates[t]);
            assert!((path.multipliers[t] - expected).abs() < 1e-15);
        }
    }
}
