use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Run configuration errors. Any of these aborts the run before a file is read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid file count [1-2]: {value}")]
    InvalidFileCount { value: i64 },
    #[error("data directory not found: {}", .path.display())]
    DataDirectoryNotFound { path: PathBuf },
    #[error("data path is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },
}

/// Validation and contract errors for series data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("timestamp must be DD-MM-YYYY: '{value}'")]
    InvalidTimestamp { value: String },
    #[error("value is not a number: '{value}'")]
    InvalidValue { value: String },
    #[error("value must be finite")]
    NonFiniteValue,
    #[error("series mixes tickers: expected '{expected}', found '{found}'")]
    MixedTickers { expected: String, found: String },
    #[error("row {row} has {len} columns, expected Ticker, Timestamp, Value")]
    UnexpectedColumnCount { row: usize, len: usize },

    #[error("series has {len} data points, at least {required} required")]
    InsufficientData { len: usize, required: usize },
    #[error("window has {len} values, expected exactly {expected}")]
    InvalidWindowLength { len: usize, expected: usize },

    #[error("date {date} cannot be advanced by {days} days")]
    DateOutOfRange { date: String, days: i64 },
}

/// Coarse classification of [`CoreError`], used for per-file reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidConfig,
    InsufficientData,
    InvalidInput,
    MalformedData,
    IoFailure,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error on {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl CoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::InvalidConfig,
            Self::Validation(ValidationError::InsufficientData { .. }) => {
                ErrorKind::InsufficientData
            }
            Self::Validation(ValidationError::InvalidWindowLength { .. }) => {
                ErrorKind::InvalidInput
            }
            Self::Csv { source, .. } if source.is_io_error() => ErrorKind::IoFailure,
            Self::Validation(_) | Self::Csv { .. } => ErrorKind::MalformedData,
            Self::Io { .. } => ErrorKind::IoFailure,
        }
    }
}
