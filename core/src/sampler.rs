//! Seeded row sampling without replacement.

use crate::{
    error::{GenError, GenResult},
    rng::SimRng,
    table::Table,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleReport {
    pub output_path: PathBuf,
    pub rows:        usize,
    pub available:   usize,
}

/// Pick `k` rows of `table` uniformly without replacement.
/// Rows come out in draw order.
pub fn sample_table(table: &Table, k: usize, seed: u64) -> GenResult<Table> {
    if k > table.len() {
        return Err(GenError::SampleSize { requested: k, available: table.len() });
    }

    let mut rng = SimRng::new(seed).with_name("sampler");
    let mut out = Table::new(table.headers.clone());
    out.rows = rng
        .sample_indices(table.len(), k)
        .into_iter()
        .map(|i| table.rows[i].clone())
        .collect();
    Ok(out)
}

/// Read `input`, sample `k` rows, write them to `output`.
/// Nothing is written when the input is missing or too small.
/// Ragged rows are carried through unchanged.
pub fn sample_rows(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    k: usize,
    seed: u64,
) -> GenResult<SampleReport> {
    let output = output.as_ref();
    let table = Table::read_lenient(input)?;
    let sample = sample_table(&table, k, seed)?;
    sample.write_atomic(output)?;

    log::info!("sampled {k} of {} rows into {}", table.len(), output.display());
    Ok(SampleReport {
        output_path: output.to_path_buf(),
        rows:        sample.len(),
        available:   table.len(),
    })
}
