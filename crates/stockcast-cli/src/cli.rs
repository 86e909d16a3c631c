//! CLI argument definitions for stockcast.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--input-file-count` | `2` | Files sampled per exchange (1 or 2) |
//! | `--data-directory-path` | `data/` | Root holding one folder per exchange |
//! | `--forecaster` | `fixed-rule` | Forecasting rule |
//! | `--seed` | none | Seed for reproducible window sampling |
//! | `--log-level` | `debug` | Filter used when `RUST_LOG` is unset |
//! | `--log-file` | `stockcast.log` | Log file, appended to |
//! | `--summary` | `text` | Run summary format (text, json) |
//!
//! # Examples
//!
//! ```bash
//! # One file per exchange from ./prices
//! stockcast --input-file-count 1 --data-directory-path prices/
//!
//! # Reproducible run with a JSON summary
//! stockcast --seed 42 --summary json --pretty
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use stockcast_core::{ForecasterKind, DEFAULT_DATA_DIRECTORY, DEFAULT_FILE_COUNT};

/// Samples ten consecutive prices per file and forecasts the next three.
#[derive(Debug, Parser)]
#[command(
    name = "stockcast",
    author,
    version,
    about = "Sample price windows and extrapolate the next three points"
)]
pub struct Cli {
    /// Number of files to read per exchange [1-2].
    #[arg(long, default_value_t = DEFAULT_FILE_COUNT, allow_negative_numbers = true)]
    pub input_file_count: i64,

    /// Path of the data directory, containing one folder of CSV files per exchange.
    #[arg(long, default_value = DEFAULT_DATA_DIRECTORY)]
    pub data_directory_path: PathBuf,

    /// Forecasting rule applied to each sampled window.
    #[arg(long, value_enum, default_value_t = ForecasterSelector::FixedRule)]
    pub forecaster: ForecasterSelector,

    /// Seed for window sampling; omit for a fresh random run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "debug")]
    pub log_level: String,

    /// File that receives a copy of the log stream.
    #[arg(long, default_value = "stockcast.log")]
    pub log_file: PathBuf,

    /// Log to stderr only.
    #[arg(long, default_value_t = false)]
    pub no_log_file: bool,

    /// Format of the run summary printed to stdout.
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub summary: SummaryFormat,

    /// Pretty-print the JSON summary.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl Cli {
    pub fn log_file(&self) -> Option<&Path> {
        (!self.no_log_file).then_some(self.log_file.as_path())
    }
}

/// Forecasting rule options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ForecasterSelector {
    /// Second-highest value followed by damped steps.
    FixedRule,
    /// Least-squares line through the window.
    CurveFit,
}

impl From<ForecasterSelector> for ForecasterKind {
    fn from(value: ForecasterSelector) -> Self {
        match value {
            ForecasterSelector::FixedRule => Self::FixedRule,
            ForecasterSelector::CurveFit => Self::CurveFit,
        }
    }
}

/// Run summary formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// One line per file plus totals.
    Text,
    /// The full run report as JSON.
    Json,
}
