//! Long-format output: one catalog copy per snapshot month.

use crate::{
    catalog::Catalog,
    config::GeneratorConfig,
    currency::CurrencyFormat,
    generator::Simulation,
    table::Table,
};
use csv::StringRecord;

/// Build the output table in timeline order. Original columns keep their
/// position; the snapshot column is appended unless the catalog already
/// has one, in which case it is overwritten in place.
pub fn assemble(catalog: &Catalog, sim: &Simulation, config: &GeneratorConfig) -> Table {
    let currency = CurrencyFormat::new(config.currency_symbol.clone(), config.decimals);
    let snapshot_name = config.columns.snapshot.as_str();

    let existing_snapshot = catalog.table.column_index(snapshot_name);
    let mut headers = catalog.table.headers.clone();
    if existing_snapshot.is_none() {
        headers.push_field(snapshot_name);
    }

    let mut out = Table::new(headers);
    out.rows.reserve(sim.n_months() * catalog.len());

    for t in 0..sim.n_months() {
        let stamp = sim.timeline.snapshot_label(t);
        for (p, row) in catalog.table.rows.iter().enumerate() {
            let price = currency.format(sim.prices[[t, p]]).unwrap_or_default();
            let discount = currency.format(sim.discount_prices[[t, p]]).unwrap_or_default();

            let mut record: StringRecord = row
                .iter()
                .enumerate()
                .map(|(i, field)| {
                    if i == catalog.price_col {
                        price.as_str()
                    } else if i == catalog.discount_col {
                        discount.as_str()
                    } else if Some(i) == existing_snapshot {
                        stamp.as_str()
                    } else {
                        field
                    }
                })
                .collect();
            if existing_snapshot.is_none() {
                record.push_field(&stamp);
            }
            out.rows.push(record);
        }
    }

    out
}
