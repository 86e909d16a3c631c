use serde::Serialize;

use crate::{Ticker, TradeDate, ValidationError};

/// Number of consecutive points sampled from each series.
pub const WINDOW_LEN: usize = 10;

/// One observed price of an instrument on a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub ticker: Ticker,
    pub date: TradeDate,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(ticker: Ticker, date: TradeDate, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue);
        }

        Ok(Self {
            ticker,
            date,
            value,
        })
    }
}

/// Ordered price history of a single instrument, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    /// Builds a series, rejecting points that belong to different tickers.
    pub fn new(points: Vec<TimeSeriesPoint>) -> Result<Self, ValidationError> {
        if let Some(first) = points.first() {
            if let Some(other) = points.iter().find(|point| point.ticker != first.ticker) {
                return Err(ValidationError::MixedTickers {
                    expected: first.ticker.to_string(),
                    found: other.ticker.to_string(),
                });
            }
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    /// Copies out the `WINDOW_LEN` points starting at `start`.
    pub fn window_at(&self, start: usize) -> Result<Window, ValidationError> {
        let end = start
            .checked_add(WINDOW_LEN)
            .filter(|end| *end <= self.points.len())
            .ok_or(ValidationError::InsufficientData {
                len: self.points.len().saturating_sub(start),
                required: WINDOW_LEN,
            })?;

        Window::new(start, self.points[start..end].to_vec())
    }
}

/// Exactly `WINDOW_LEN` contiguous points taken from a [`TimeSeries`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Window {
    start_index: usize,
    points: Vec<TimeSeriesPoint>,
}

impl Window {
    pub fn new(start_index: usize, points: Vec<TimeSeriesPoint>) -> Result<Self, ValidationError> {
        if points.len() != WINDOW_LEN {
            return Err(ValidationError::InvalidWindowLength {
                len: points.len(),
                expected: WINDOW_LEN,
            });
        }

        Ok(Self {
            start_index,
            points,
        })
    }

    /// Index of the first point within the source series.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    pub fn ticker(&self) -> &Ticker {
        &self.points[0].ticker
    }

    pub fn first_date(&self) -> TradeDate {
        self.points[0].date
    }

    pub fn last_date(&self) -> TradeDate {
        self.points[WINDOW_LEN - 1].date
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }
}
