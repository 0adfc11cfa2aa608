//! In-memory CSV table with header-preserving, all-or-nothing writes.

use crate::error::{GenError, GenResult};
use csv::StringRecord;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: StringRecord,
    pub rows:    Vec<StringRecord>,
}

impl Table {
    pub fn new(headers: StringRecord) -> Self {
        Self { headers, rows: Vec::new() }
    }

    /// Read a headed CSV file fully into memory. Every row must have
    /// as many fields as the header.
    pub fn read(path: impl AsRef<Path>) -> GenResult<Self> {
        Self::read_with(path.as_ref(), false)
    }

    /// Like `read`, but rows may be shorter or longer than the header.
    pub fn read_lenient(path: impl AsRef<Path>) -> GenResult<Self> {
        Self::read_with(path.as_ref(), true)
    }

    fn read_with(path: &Path, flexible: bool) -> GenResult<Self> {
        if !path.exists() {
            return Err(GenError::NotFound { path: path.to_path_buf() });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(flexible)
            .from_path(path)?;
        let headers = reader.headers()?.clone();
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

        log::debug!("read {} rows x {} columns from {}", rows.len(), headers.len(), path.display());
        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> GenResult<usize> {
        self.column_index(name).ok_or_else(|| GenError::MissingColumn {
            column: name.to_string(),
        })
    }

    pub fn write_atomic(&self, path: impl AsRef<Path>) -> GenResult<()> {
        write_atomic(path.as_ref(), &self.headers, &self.rows)
    }
}

/// Write a CSV to a temp file next to `path`, then rename it into place.
/// Parent directories are created. A failure leaves `path` untouched.
/// Rows are written as they are, ragged or not.
pub fn write_atomic(path: &Path, headers: &StringRecord, rows: &[StringRecord]) -> GenResult<()> {
    let dir = parent_dir(path);
    fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(&mut tmp);
        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| GenError::Io(e.error))?;

    log::debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
