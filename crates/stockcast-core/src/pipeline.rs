//! Per-file orchestration: load, sample, forecast, assemble, persist.
//!
//! Each selected file runs through the stages independently:
//!
//! ```text
//! Selected ─▶ Loaded ─▶ Sampled ─▶ Extrapolated ─▶ Assembled ─▶ Persisted
//!                │         │
//!                └─────────┴──▶ Skipped (too few points) / Failed (i/o, parse)
//! ```
//!
//! A failure on one file is recorded in the [`RunReport`] and the run moves
//! on to the next file.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::series_io::{CsvRecordSink, CsvSeriesSource};
use crate::{
    assemble, selection, CoreError, ErrorKind, ExchangeFileGroup, Forecaster, OutputRecordSet,
    RunConfig, RunContext, TimeSeries, WindowSampler,
};

/// Loads the price series stored at a path.
pub trait SeriesSource {
    fn load(&self, path: &Path) -> Result<TimeSeries, CoreError>;
}

/// Persists an assembled record set and returns where it was written.
pub trait RecordSink {
    fn persist(
        &mut self,
        input: &Path,
        marker: &str,
        context: &RunContext,
        records: &OutputRecordSet,
    ) -> Result<PathBuf, CoreError>;
}

/// Terminal state of one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Persisted { output: PathBuf },
    Skipped { reason: String },
    Failed { kind: ErrorKind, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    pub exchange: String,
    pub input: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Outcomes of every file in a run, in processing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub forecaster: &'static str,
    pub run_stamp: String,
    pub files: Vec<FileOutcome>,
}

impl RunReport {
    pub fn persisted(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Persisted { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.files
            .iter()
            .filter(|file| predicate(&file.outcome))
            .count()
    }
}

/// Runs the per-file pipeline over a set of selected files.
pub struct PipelineDriver<S, K, R = StdRng> {
    source: S,
    sink: K,
    forecaster: Box<dyn Forecaster>,
    sampler: WindowSampler<R>,
    context: RunContext,
}

impl<S, K, R> PipelineDriver<S, K, R>
where
    S: SeriesSource,
    K: RecordSink,
    R: Rng,
{
    pub fn new(
        source: S,
        sink: K,
        forecaster: Box<dyn Forecaster>,
        sampler: WindowSampler<R>,
        context: RunContext,
    ) -> Self {
        Self {
            source,
            sink,
            forecaster,
            sampler,
            context,
        }
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    pub fn run(&mut self, selected: &ExchangeFileGroup) -> RunReport {
        if !selected.is_empty() {
            info!(files = selected.file_count(), "valid CSV files found");
        }

        let files = selected
            .iter()
            .map(|(exchange, input)| FileOutcome {
                exchange: exchange.to_owned(),
                input: input.to_path_buf(),
                outcome: self.run_file(input),
            })
            .collect();

        RunReport {
            forecaster: self.forecaster.name(),
            run_stamp: self.context.run_stamp(),
            files,
        }
    }

    /// Runs one file to a terminal state; never propagates errors.
    pub fn run_file(&mut self, input: &Path) -> Outcome {
        info!(path = %input.display(), forecaster = self.forecaster.name(), "running prediction");

        match self.process(input) {
            Ok(output) => {
                info!(path = %input.display(), output = %output.display(), "prediction written");
                Outcome::Persisted { output }
            }
            Err(err) if err.kind() == ErrorKind::InsufficientData => {
                error!(path = %input.display(), reason = %err, "skipping file without enough data points");
                Outcome::Skipped {
                    reason: err.to_string(),
                }
            }
            Err(err) => {
                error!(path = %input.display(), kind = ?err.kind(), reason = %err, "prediction failed");
                Outcome::Failed {
                    kind: err.kind(),
                    reason: err.to_string(),
                }
            }
        }
    }

    fn process(&mut self, input: &Path) -> Result<PathBuf, CoreError> {
        let series = self.source.load(input)?;
        debug!(path = %input.display(), points = series.len(), "series loaded");

        let window = self.sampler.sample(&series)?;
        debug!(path = %input.display(), start = window.start_index(), "window sampled");

        let forecast = self.forecaster.predict(&window)?;
        debug!(path = %input.display(), forecast = ?forecast.values(), "forecast computed");

        let records = assemble(&window, &forecast)?;
        self.sink.persist(
            input,
            self.forecaster.output_marker(),
            &self.context,
            &records,
        )
    }
}

/// Selects files under the configured root and runs them through the CSV
/// pipeline with the configured forecaster.
pub fn execute(config: &RunConfig, context: RunContext) -> Result<RunReport, CoreError> {
    let selected = selection::select(config.data_root(), config.per_exchange_cap())?;

    let mut driver = PipelineDriver::new(
        CsvSeriesSource,
        CsvRecordSink,
        config.forecaster().build(),
        WindowSampler::from_seed_option(config.seed()),
        context,
    );

    Ok(driver.run(&selected))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        FixedRuleForecaster, Ticker, TimeSeriesPoint, TradeDate, ValidationError, FORECAST_LEN,
        WINDOW_LEN,
    };
    use time::macros::datetime;

    #[derive(Default)]
    struct MemorySource {
        series: HashMap<PathBuf, usize>,
    }

    impl MemorySource {
        fn with(mut self, path: &str, len: usize) -> Self {
            self.series.insert(PathBuf::from(path), len);
            self
        }
    }

    impl SeriesSource for MemorySource {
        fn load(&self, path: &Path) -> Result<TimeSeries, CoreError> {
            let len = *self.series.get(path).ok_or_else(|| {
                CoreError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no such series"),
                )
            })?;
            let ticker = Ticker::parse("MEM").expect("valid");
            let start = TradeDate::parse("01-01-2024").expect("valid");
            let points = (0..len)
                .map(|i| {
                    TimeSeriesPoint::new(
                        ticker.clone(),
                        start.plus_days(i as i64).expect("in range"),
                        i as f64,
                    )
                    .expect("valid point")
                })
                .collect();
            Ok(TimeSeries::new(points)?)
        }
    }

    #[derive(Default)]
    struct MemorySink {
        written: Vec<(PathBuf, String, OutputRecordSet)>,
    }

    impl RecordSink for MemorySink {
        fn persist(
            &mut self,
            input: &Path,
            marker: &str,
            context: &RunContext,
            records: &OutputRecordSet,
        ) -> Result<PathBuf, CoreError> {
            let output = input.with_extension(format!("{marker}_{}", context.run_stamp()));
            self.written
                .push((input.to_path_buf(), marker.to_owned(), records.clone()));
            Ok(output)
        }
    }

    fn driver(source: MemorySource) -> PipelineDriver<MemorySource, MemorySink> {
        PipelineDriver::new(
            source,
            MemorySink::default(),
            Box::new(FixedRuleForecaster),
            WindowSampler::seeded(11),
            RunContext::at(datetime!(2024-05-01 12:00:00 UTC)),
        )
    }

    #[test]
    fn persists_thirteen_rows_per_file() {
        let mut driver = driver(MemorySource::default().with("a.csv", 30));

        let outcome = driver.run_file(Path::new("a.csv"));

        assert!(matches!(outcome, Outcome::Persisted { .. }));
        let sink = driver.into_sink();
        assert_eq!(sink.written.len(), 1);
        let (input, marker, records) = &sink.written[0];
        assert_eq!(input, Path::new("a.csv"));
        assert_eq!(marker, "BasicPrediction");
        assert_eq!(records.len(), WINDOW_LEN + FORECAST_LEN);
    }

    #[test]
    fn short_series_is_skipped_not_failed() {
        let mut driver = driver(MemorySource::default().with("short.csv", 9));

        let outcome = driver.run_file(Path::new("short.csv"));

        let expected = ValidationError::InsufficientData {
            len: 9,
            required: WINDOW_LEN,
        };
        assert_eq!(
            outcome,
            Outcome::Skipped {
                reason: expected.to_string()
            }
        );
        assert!(driver.into_sink().written.is_empty());
    }

    #[test]
    fn load_errors_are_reported_as_failures() {
        let mut driver = driver(MemorySource::default());

        let outcome = driver.run_file(Path::new("missing.csv"));

        assert!(matches!(
            outcome,
            Outcome::Failed {
                kind: ErrorKind::IoFailure,
                ..
            }
        ));
    }

    #[test]
    fn report_counts_each_terminal_state() {
        let report = RunReport {
            forecaster: "fixed-rule",
            run_stamp: String::from("2024-05-01_12-00-00"),
            files: vec![
                FileOutcome {
                    exchange: String::from("A"),
                    input: PathBuf::from("A/1.csv"),
                    outcome: Outcome::Persisted {
                        output: PathBuf::from("A/1_out.csv"),
                    },
                },
                FileOutcome {
                    exchange: String::from("A"),
                    input: PathBuf::from("A/2.csv"),
                    outcome: Outcome::Skipped {
                        reason: String::from("short"),
                    },
                },
                FileOutcome {
                    exchange: String::from("B"),
                    input: PathBuf::from("B/1.csv"),
                    outcome: Outcome::Failed {
                        kind: ErrorKind::MalformedData,
                        reason: String::from("bad"),
                    },
                },
            ],
        };

        assert_eq!(
            (report.persisted(), report.skipped(), report.failed()),
            (1, 1, 1)
        );
    }
}
