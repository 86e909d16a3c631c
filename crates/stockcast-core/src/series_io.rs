//! CSV boundary: reading input series and writing output record sets.
//!
//! Input files have no header and three columns, `Ticker, Timestamp, Value`.
//! Output files repeat that layout under a header row.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::pipeline::{RecordSink, SeriesSource};
use crate::{
    CoreError, OutputRecordSet, RunContext, Ticker, TimeSeries, TimeSeriesPoint, TradeDate,
    ValidationError,
};

/// Reads a whole input file into a [`TimeSeries`].
pub fn read_series(path: &Path) -> Result<TimeSeries, CoreError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| CoreError::csv(path, source))?;

    let mut points = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| CoreError::csv(path, source))?;
        points.push(parse_point(index + 1, &record)?);
    }

    Ok(TimeSeries::new(points)?)
}

const COLUMN_COUNT: usize = 3;

fn parse_point(row: usize, record: &StringRecord) -> Result<TimeSeriesPoint, ValidationError> {
    if record.len() != COLUMN_COUNT {
        return Err(ValidationError::UnexpectedColumnCount {
            row,
            len: record.len(),
        });
    }

    let ticker = Ticker::parse(&record[0])?;
    let date = TradeDate::parse(&record[1])?;
    let raw_value = &record[2];
    let value = raw_value
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidValue {
            value: raw_value.to_owned(),
        })?;

    TimeSeriesPoint::new(ticker, date, value)
}

/// `<stem>_<marker>_<run stamp>.<ext>` next to `input`.
pub fn output_path(input: &Path, marker: &str, context: &RunContext) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut file_name = format!("{stem}_{marker}_{}", context.run_stamp());
    if let Some(extension) = input.extension() {
        file_name.push('.');
        file_name.push_str(&extension.to_string_lossy());
    }
    input.with_file_name(file_name)
}

/// Writes `records` with a `Ticker,Timestamp,Value` header.
pub fn write_records(path: &Path, records: &OutputRecordSet) -> Result<(), CoreError> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| CoreError::csv(path, source))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|source| CoreError::csv(path, source))?;
    }

    writer.flush().map_err(|source| CoreError::io(path, source))
}

/// Loads series from CSV files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSeriesSource;

impl SeriesSource for CsvSeriesSource {
    fn load(&self, path: &Path) -> Result<TimeSeries, CoreError> {
        read_series(path)
    }
}

/// Writes each record set next to its input file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRecordSink;

impl RecordSink for CsvRecordSink {
    fn persist(
        &mut self,
        input: &Path,
        marker: &str,
        context: &RunContext,
        records: &OutputRecordSet,
    ) -> Result<PathBuf, CoreError> {
        let output = output_path(input, marker, context);
        write_records(&output, records)?;
        Ok(output)
    }
}
