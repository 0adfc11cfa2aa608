//! The synthetic price generator.
//!
//! DRAW ORDER (fixed, never reordered):
//!   1. Macro inflation path      (months)
//!   2. Product shocks            (months x products, month-major)
//!   3. Category phases           (distinct categories, first-appearance order)
//!   4. Discount base rates       (months)
//!   5. Discount events           (months x products)
//!   6. Discount depths           (months x products)
//!
//! RULES:
//!   - One SimRng per run, seeded from GeneratorConfig::seed.
//!   - Every stage draws its full grid even for products with no base price.
//!   - Nothing is mutated after simulate() returns.

use crate::{
    catalog::Catalog,
    config::GeneratorConfig,
    currency::round_to,
    discount::{discounted_price, DiscountPlan},
    error::GenResult,
    macro_path::MacroPath,
    output,
    random_walk::ProductWalk,
    rng::SimRng,
    seasonality::{seasonal_multiplier, CategoryPhases},
    timeline::Timeline,
};
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Every intermediate of one run, kept for inspection and tests.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub timeline:        Timeline,
    pub macro_path:      MacroPath,
    pub walk:            ProductWalk,
    pub phases:          CategoryPhases,
    /// `months x products` seasonal multiplier.
    pub seasonal:        Array2<f64>,
    pub discounts:       DiscountPlan,
    /// `months x products`, floored and rounded. `None` for products
    /// without a base price.
    pub prices:          Array2<Option<f64>>,
    /// `months x products`; `None` when no discount applies.
    pub discount_prices: Array2<Option<f64>>,
}

impl Simulation {
    pub fn n_months(&self) -> usize {
        self.prices.nrows()
    }

    pub fn n_products(&self) -> usize {
        self.prices.ncols()
    }

    pub fn discounted_cells(&self) -> usize {
        self.discount_prices.iter().filter(|d| d.is_some()).count()
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub output_path:     PathBuf,
    pub rows:            usize,
    pub products:        usize,
    pub months:          usize,
    pub discounted_rows: usize,
    pub first_period:    String,
    pub last_period:     String,
}

impl GenerationReport {
    pub fn discounted_share(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.discounted_rows as f64 / self.rows as f64
        }
    }
}

pub struct PriceGenerator {
    config: GeneratorConfig,
}

impl PriceGenerator {
    pub fn new(config: GeneratorConfig) -> GenResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run every stage against `catalog` in the documented draw order.
    pub fn simulate(&self, catalog: &Catalog) -> GenResult<Simulation> {
        let cfg = &self.config;
        let mut rng = SimRng::new(cfg.seed).with_name("price_generator");

        let timeline = Timeline::from_config(cfg)?;
        let n_months = timeline.len();
        let n_products = catalog.len();

        log::info!(
            "simulating {n_products} products over {n_months} months (seed={})",
            cfg.seed
        );

        // 1–2
        let macro_path = MacroPath::simulate(cfg, n_months, &mut rng)?;
        let walk = ProductWalk::simulate(cfg, n_months, n_products, &mut rng)?;

        // 3
        let phases = CategoryPhases::draw(&catalog.categories, &mut rng);
        let product_phase: Vec<f64> = catalog
            .categories
            .iter()
            .map(|c| phases.phase(c).unwrap_or_default())
            .collect();

        let mut seasonal: Array2<f64> = Array2::zeros((n_months, n_products));
        for t in 0..n_months {
            let month = timeline.calendar_month(t);
            for (p, phase) in product_phase.iter().enumerate() {
                seasonal[[t, p]] = seasonal_multiplier(month, *phase, cfg.category_seasonality_amp);
            }
        }

        // 4–6
        let discounts = DiscountPlan::draw(cfg, &timeline, n_products, &mut rng);

        let mut prices: Array2<Option<f64>> = Array2::from_elem((n_months, n_products), None);
        let mut discount_prices: Array2<Option<f64>> = Array2::from_elem((n_months, n_products), None);
        for t in 0..n_months {
            for (p, base) in catalog.base_prices.iter().enumerate() {
                let Some(base) = base else { continue };

                let raw = (base
                    * macro_path.multipliers[t]
                    * walk.multipliers[[t, p]]
                    * seasonal[[t, p]])
                    .max(cfg.price_floor);
                let price = round_to(raw, cfg.decimals);
                prices[[t, p]] = Some(price);

                if discounts.events[[t, p]] {
                    discount_prices[[t, p]] = discounted_price(
                        raw,
                        price,
                        discounts.depths[[t, p]],
                        cfg.price_floor,
                        cfg.decimals,
                    );
                }
            }
        }

        Ok(Simulation {
            timeline,
            macro_path,
            walk,
            phases,
            seasonal,
            discounts,
            prices,
            discount_prices,
        })
    }

    /// Load `input`, simulate, and write the long-format table to `dest`.
    pub fn run(&self, input: impl AsRef<Path>, dest: impl AsRef<Path>) -> GenResult<GenerationReport> {
        let dest = dest.as_ref();
        let catalog = Catalog::load(input, &self.config)?;
        let sim = self.simulate(&catalog)?;
        let table = output::assemble(&catalog, &sim, &self.config);
        table.write_atomic(dest)?;

        let months = sim.n_months();
        let report = GenerationReport {
            output_path:     dest.to_path_buf(),
            rows:            table.len(),
            products:        sim.n_products(),
            months,
            discounted_rows: sim.discounted_cells(),
            first_period:    sim.timeline.period_label(0),
            last_period:     sim.timeline.period_label(months - 1),
        };
        log::info!(
            "wrote {} rows ({} discounted) to {}",
            report.rows,
            report.discounted_rows,
            dest.display()
        );
        Ok(report)
    }
}
