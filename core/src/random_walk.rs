//! Per-product multiplicative random walk.

use crate::{config::GeneratorConfig, error::GenResult, rng::SimRng};
use ndarray::Array2;

#[derive(Debug, Clone)]
pub struct ProductWalk {
    /// `months x products` monthly shocks.
    pub shocks:      Array2<f64>,
    /// Cumulative product of `1 + shock` down each product column.
    pub multipliers: Array2<f64>,
}

impl ProductWalk {
    /// Shocks are drawn month-major: every product for month 0, then month 1, ...
    pub fn simulate(
        config: &GeneratorConfig,
        n_months: usize,
        n_products: usize,
        rng: &mut SimRng,
    ) -> GenResult<Self> {
        let draws = rng.normals(0.0, config.product_monthly_vol, n_months * n_products)?;
        let shocks = Array2::from_shape_vec((n_months, n_products), draws)
            .map_err(anyhow::Error::from)?;

        let mut multipliers = shocks.mapv(|s| 1.0 + s);
        for t in 1..n_months {
            for p in 0..n_products {
                let prev = multipliers[[t - 1, p]];
                multipliers[[t, p]] *= prev;
            }
        }

        log::debug!(
            "random walk: {n_months}x{n_products} shocks, vol={}",
            config.product_monthly_vol
        );
        Ok(Self { shocks, multipliers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_volatility_is_flat() {
        let config = GeneratorConfig { product_monthly_vol: 0.0, ..GeneratorConfig::default_test() };
        let mut rng = SimRng::new(5);
        let walk = ProductWalk::simulate(&config, 6, 3, &mut rng).unwrap();
        assert!(walk.multipliers.iter().all(|m| *m == 1.0));
    }

    #[test]
    fn columns_accumulate_independently() {
        let config = GeneratorConfig::default_test();
        let mut rng = SimRng::new(5);
        let walk = ProductWalk::simulate(&config, 4, 2, &mut rng).unwrap();
        for p in 0..2 {
            let mut acc = 1.0;
            for t in 0..4 {
                acc *= 1.0 + walk.shocks[[t, p]];
                assert!((walk.multipliers[[t, p]] - acc).abs() < 1e-15);
            }
        }
    }
}
