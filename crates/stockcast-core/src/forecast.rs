//! Forecasters that extend a sampled window by [`FORECAST_LEN`] values.
//!
//! Two variants are available, selected through [`ForecasterKind`]:
//!
//! | Kind | Marker | Rule |
//! |------|--------|------|
//! | [`ForecasterKind::FixedRule`] | `BasicPrediction` | second-highest value, then damped steps |
//! | [`ForecasterKind::CurveFit`] | `CurveFitPrediction` | least-squares line through the window |
//!
//! Neither makes any claim of predictive accuracy.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{CoreError, Forecast, ValidationError, Window, FORECAST_LEN, WINDOW_LEN};

/// Produces a forecast from a sampled window.
pub trait Forecaster: Send + Sync {
    /// Short identifier used in logs and run reports.
    fn name(&self) -> &'static str;

    /// Marker inserted into output file names, e.g. `BasicPrediction`.
    fn output_marker(&self) -> &'static str;

    fn predict(&self, window: &Window) -> Result<Forecast, CoreError>;
}

/// Configured forecaster variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForecasterKind {
    #[default]
    FixedRule,
    CurveFit,
}

impl ForecasterKind {
    pub fn build(self) -> Box<dyn Forecaster> {
        match self {
            Self::FixedRule => Box::new(FixedRuleForecaster),
            Self::CurveFit => Box::new(CurveFitForecaster),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FixedRule => "fixed-rule",
            Self::CurveFit => "curve-fit",
        }
    }
}

impl Display for ForecasterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic three-step extrapolation.
///
/// 1. `p1` is the value at position 1 of the window sorted descending.
/// 2. `p2 = p1 + (p1 - last) / 2`, where `last` is the final window value.
/// 3. `p3 = p2 + (p2 - p1) / 4`.
///
/// Ties keep stable-sort order, so when the maximum occurs twice `p1` equals
/// the maximum rather than the next distinct value.
///
/// Fails with [`ValidationError::InvalidWindowLength`] unless `values` holds
/// exactly [`WINDOW_LEN`] entries.
pub fn extrapolate(values: &[f64]) -> Result<[f64; FORECAST_LEN], ValidationError> {
    if values.len() != WINDOW_LEN {
        return Err(ValidationError::InvalidWindowLength {
            len: values.len(),
            expected: WINDOW_LEN,
        });
    }

    let last = values[WINDOW_LEN - 1];

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    let second_highest = sorted[1];

    let p1 = second_highest;
    let p2 = p1 + (p1 - last) / 2.0;
    let p3 = p2 + (p2 - p1) / 4.0;

    Ok([p1, p2, p3])
}

/// [`Forecaster`] wrapping [`extrapolate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRuleForecaster;

impl Forecaster for FixedRuleForecaster {
    fn name(&self) -> &'static str {
        ForecasterKind::FixedRule.as_str()
    }

    fn output_marker(&self) -> &'static str {
        "BasicPrediction"
    }

    fn predict(&self, window: &Window) -> Result<Forecast, CoreError> {
        Ok(Forecast::new(extrapolate(&window.values())?))
    }
}

/// Degree-1 least-squares fit over (days since first point, value).
///
/// The fitted line is evaluated one, two and three days after the window's
/// last date. Windows whose points all share one date have no slope; the
/// forecast is then the window mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveFitForecaster;

impl CurveFitForecaster {
    fn fit(xs: &[f64], ys: &[f64]) -> (f64, f64) {
        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let (sxy, sxx) = xs
            .iter()
            .zip(ys)
            .fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
                let dx = x - mean_x;
                (sxy + dx * (y - mean_y), sxx + dx * dx)
            });

        if sxx == 0.0 {
            return (0.0, mean_y);
        }

        let slope = sxy / sxx;
        (slope, mean_y - slope * mean_x)
    }
}

impl Forecaster for CurveFitForecaster {
    fn name(&self) -> &'static str {
        ForecasterKind::CurveFit.as_str()
    }

    fn output_marker(&self) -> &'static str {
        "CurveFitPrediction"
    }

    fn predict(&self, window: &Window) -> Result<Forecast, CoreError> {
        let origin = window.first_date();
        let xs: Vec<f64> = window
            .points()
            .iter()
            .map(|point| point.date.days_since(origin) as f64)
            .collect();
        let ys = window.values();

        let (slope, intercept) = Self::fit(&xs, &ys);
        let last_x = window.last_date().days_since(origin) as f64;

        let mut values = [0.0; FORECAST_LEN];
        for (step, value) in values.iter_mut().enumerate() {
            *value = intercept + slope * (last_x + (step + 1) as f64);
        }

        Ok(Forecast::new(values))
    }
}
