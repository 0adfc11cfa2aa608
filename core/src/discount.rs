//! Discount assignment: a monthly participation rate, a Bernoulli event
//! per product-month, and a depth per product-month.

use crate::{config::GeneratorConfig, currency::round_to, rng::SimRng, timeline::Timeline};
use ndarray::Array2;

#[derive(Debug, Clone)]
pub struct DiscountPlan {
    /// Uniform draw per month before the calendar multiplier.
    pub base_rates: Vec<f64>,
    /// Participation probability per month after multiplier and cap.
    pub rates:      Vec<f64>,
    /// `months x products`: whether the product is discounted that month.
    pub events:     Array2<bool>,
    /// `months x products`: fractional reduction, drawn for every cell.
    pub depths:     Array2<f64>,
}

impl DiscountPlan {
    /// Draw order: all monthly rates, then every event, then every depth.
    pub fn draw(
        config: &GeneratorConfig,
        timeline: &Timeline,
        n_products: usize,
        rng: &mut SimRng,
    ) -> Self {
        let n_months = timeline.len();

        let base_rates: Vec<f64> = (0..n_months)
            .map(|_| rng.uniform(config.discount_rate_min, config.discount_rate_max))
            .collect();
        let rates: Vec<f64> = base_rates
            .iter()
            .enumerate()
            .map(|(t, base)| {
                let mult = config.discount_multiplier(timeline.calendar_month(t));
                (base * mult).clamp(0.0, config.discount_rate_cap)
            })
            .collect();

        let mut events = Array2::from_elem((n_months, n_products), false);
        for t in 0..n_months {
            for p in 0..n_products {
                events[[t, p]] = rng.chance(rates[t]);
            }
        }

        let mut depths: Array2<f64> = Array2::zeros((n_months, n_products));
        for t in 0..n_months {
            for p in 0..n_products {
                depths[[t, p]] =
                    rng.uniform(config.discount_depth_min, config.discount_depth_max);
            }
        }

        log::debug!(
            "discounts: {} of {} product-months selected",
            events.iter().filter(|e| **e).count(),
            events.len()
        );
        Self { base_rates, rates, events, depths }
    }
}

/// Discounted price for one cell, or `None` when it would not undercut
/// the rounded list price (possible only at the price floor).
pub fn discounted_price(
    unrounded_price: f64,
    rounded_price: f64,
    depth: f64,
    floor: f64,
    decimals: u32,
) -> Option<f64> {
    let discounted = round_to((unrounded_price * (1.0 - depth)).max(floor), decimals);
    (discounted < rounded_price).then_some(discounted)
}
