use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config file error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Sample size ({requested}) is larger than dataset size ({available})")]
    SampleSize { requested: usize, available: usize },

    #[error("Required column '{column}' missing from input header")]
    MissingColumn { column: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;
