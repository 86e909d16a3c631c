//! # Stockcast Core
//!
//! Samples a short window of historical prices from each input file,
//! extends it by three forecast points and writes window plus forecast back
//! out in the input's tabular layout.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`assembly`] | Window + forecast rows into an output record set |
//! | [`config`] | Validated run configuration |
//! | [`domain`] | Tickers, dates, series, windows, forecasts |
//! | [`error`] | Error taxonomy |
//! | [`forecast`] | `Forecaster` trait and its variants |
//! | [`pipeline`] | Per-file driver and run report |
//! | [`sampling`] | Random window extraction |
//! | [`selection`] | Exchange-grouped input discovery |
//! | [`series_io`] | CSV reading and writing |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stockcast_core::{pipeline, RunConfig, RunContext};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RunConfig::new("data/", 2)?;
//!     let report = pipeline::execute(&config, RunContext::capture())?;
//!     println!("{} files written", report.persisted());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Configuration problems surface as [`ConfigError`] before any file is read.
//! Everything that goes wrong with an individual file is captured in that
//! file's [`pipeline::Outcome`] and classified by [`ErrorKind`]:
//!
//! ```rust
//! use stockcast_core::{CoreError, ErrorKind};
//!
//! fn describe(error: &CoreError) -> &'static str {
//!     match error.kind() {
//!         ErrorKind::InsufficientData => "skipped",
//!         ErrorKind::InvalidConfig => "aborted",
//!         _ => "failed",
//!     }
//! }
//! ```

pub mod assembly;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod forecast;
pub mod pipeline;
pub mod sampling;
pub mod selection;
pub mod series_io;

pub use assembly::assemble;
pub use config::{FileCap, RunConfig, DEFAULT_DATA_DIRECTORY, DEFAULT_FILE_COUNT};
pub use context::RunContext;
pub use domain::{
    Forecast, OutputRecord, OutputRecordSet, Ticker, TimeSeries, TimeSeriesPoint, TradeDate,
    Window, FORECAST_LEN, WINDOW_LEN,
};
pub use error::{ConfigError, CoreError, ErrorKind, ValidationError};
pub use forecast::{
    extrapolate, CurveFitForecaster, FixedRuleForecaster, Forecaster, ForecasterKind,
};
pub use pipeline::{
    FileOutcome, Outcome, PipelineDriver, RecordSink, RunReport, SeriesSource,
};
pub use sampling::WindowSampler;
pub use selection::{select, ExchangeFileGroup, PREDICTION_MARKER};
pub use series_io::{CsvRecordSink, CsvSeriesSource};
