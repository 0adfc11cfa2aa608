//! Product catalog — the base table the generator evolves.

use crate::{
    config::{ColumnNames, GeneratorConfig},
    currency::CurrencyFormat,
    error::GenResult,
    table::Table,
};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Catalog {
    pub table: Table,
    /// Category label per product, in row order.
    pub categories: Vec<String>,
    /// Parsed and floored base price per product. `None` when the
    /// catalog price is empty or unparsable.
    pub base_prices: Vec<Option<f64>>,
    pub price_col:    usize,
    pub discount_col: usize,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>, config: &GeneratorConfig) -> GenResult<Self> {
        Self::from_table(Table::read(path)?, config)
    }

    pub fn from_table(table: Table, config: &GeneratorConfig) -> GenResult<Self> {
        let ColumnNames { id, category, name, price, discount, .. } = &config.columns;
        let id_col = table.require_column(id)?;
        table.require_column(name)?;
        let category_col = table.require_column(category)?;
        let price_col = table.require_column(price)?;
        let discount_col = table.require_column(discount)?;

        let currency = CurrencyFormat::new(config.currency_symbol.clone(), config.decimals);

        let mut categories = Vec::with_capacity(table.len());
        let mut base_prices = Vec::with_capacity(table.len());
        for row in &table.rows {
            categories.push(row.get(category_col).unwrap_or_default().to_string());

            let raw = row.get(price_col).unwrap_or_default();
            let parsed = match currency.parse(raw) {
                Ok(v) => v,
                Err(e) => {
                    log::warn!(
                        "product {}: {e}; treating price as missing",
                        row.get(id_col).unwrap_or_default()
                    );
                    None
                }
            };
            base_prices.push(parsed.map(|p| p.max(config.price_floor)));
        }

        let missing = base_prices.iter().filter(|p| p.is_none()).count();
        if missing > 0 {
            log::warn!("{missing} of {} products have no usable base price", base_prices.len());
        }

        Ok(Self { table, categories, base_prices, price_col, discount_col })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
