//! Domain types for sampled price windows and their forecasts.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Instrument identifier, copied verbatim to output |
//! | [`TradeDate`] | `DD-MM-YYYY` calendar date |
//! | [`TimeSeriesPoint`] | One (ticker, date, value) observation |
//! | [`TimeSeries`] | Single-ticker history in file order |
//! | [`Window`] | Exactly [`WINDOW_LEN`] contiguous points |
//! | [`Forecast`] | Exactly [`FORECAST_LEN`] extrapolated values |
//! | [`OutputRecordSet`] | Window rows followed by forecast rows |

mod records;
mod series;
mod ticker;
mod trade_date;

pub use records::{Forecast, OutputRecord, OutputRecordSet, FORECAST_LEN};
pub use series::{TimeSeries, TimeSeriesPoint, Window, WINDOW_LEN};
pub use ticker::Ticker;
pub use trade_date::TradeDate;
