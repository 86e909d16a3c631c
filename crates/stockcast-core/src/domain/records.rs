use serde::Serialize;

use crate::{Ticker, TradeDate};

/// Number of values produced by a forecaster.
pub const FORECAST_LEN: usize = 3;

/// Extrapolated values for the days following a window, in order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Forecast([f64; FORECAST_LEN]);

impl Forecast {
    pub const fn new(values: [f64; FORECAST_LEN]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FORECAST_LEN] {
        &self.0
    }
}

/// One output row: `Ticker, Timestamp, Value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputRecord {
    pub ticker: Ticker,
    pub timestamp: String,
    pub value: f64,
}

impl OutputRecord {
    pub fn new(ticker: Ticker, date: TradeDate, value: f64) -> Self {
        Self {
            ticker,
            timestamp: date.format(),
            value,
        }
    }
}

/// Window rows followed by forecast rows, ready to persist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutputRecordSet {
    records: Vec<OutputRecord>,
}

impl OutputRecordSet {
    pub(crate) fn new(records: Vec<OutputRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a OutputRecordSet {
    type Item = &'a OutputRecord;
    type IntoIter = std::slice::Iter<'a, OutputRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
