//! Category seasonality — one sine curve per category, shifted by a
//! random phase drawn once per run.

use crate::rng::SimRng;
use std::{collections::HashMap, f64::consts::TAU};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPhases {
    /// Categories in order of first appearance, with their phase in [0, 2π).
    order:  Vec<(String, f64)>,
    lookup: HashMap<String, usize>,
}

impl CategoryPhases {
    /// Draw one phase per distinct category, in first-appearance order.
    pub fn draw<S: AsRef<str>>(categories: &[S], rng: &mut SimRng) -> Self {
        let mut order = Vec::new();
        let mut lookup = HashMap::new();
        for cat in categories {
            let cat = cat.as_ref();
            if lookup.contains_key(cat) {
                continue;
            }
            lookup.insert(cat.to_string(), order.len());
            order.push((cat.to_string(), rng.uniform(0.0, TAU)));
        }
        log::debug!("seasonality: {} category phases", order.len());
        Self { order, lookup }
    }

    pub fn phase(&self, category: &str) -> Option<f64> {
        self.lookup.get(category).map(|&i| self.order[i].1)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.order.iter().map(|(c, p)| (c.as_str(), *p))
    }
}

/// `1 + amplitude * sin(2π(month-1)/12 + phase)` for calendar month 1–12.
pub fn seasonal_multiplier(calendar_month: u32, phase: f64, amplitude: f64) -> f64 {
    let angle = TAU * f64::from(calendar_month.saturating_sub(1)) / 12.0;
    1.0 + amplitude * (angle + phase).sin()
}
