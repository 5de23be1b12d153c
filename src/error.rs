use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while loading the dataset or applying user selections.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error reading {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("malformed CSV at line {line}: {message}")]
    Csv { line: usize, message: String },
    #[error("dataset is missing required column \"{0}\"")]
    MissingColumn(String),
    #[error("invalid date \"{value}\" at line {line}")]
    InvalidDateValue { line: usize, value: String },
    #[error("dataset contains no rows")]
    EmptyDataset,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("unknown metric column \"{0}\"")]
    InvalidMetric(String),
    #[error("date {0} is not present in the dataset")]
    InvalidDate(NaiveDate),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// `true` for the startup-only failures that abort the process.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::Io(..)
                | Error::Csv { .. }
                | Error::MissingColumn(_)
                | Error::InvalidDateValue { .. }
                | Error::EmptyDataset
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
