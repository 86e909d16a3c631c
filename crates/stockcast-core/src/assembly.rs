//! Output record assembly.

use crate::{CoreError, Forecast, OutputRecord, OutputRecordSet, Window};

/// Concatenates the window rows with one row per forecast value.
///
/// Forecast rows reuse the window's ticker and are dated one, two and three
/// calendar days after the window's last date.
pub fn assemble(window: &Window, forecast: &Forecast) -> Result<OutputRecordSet, CoreError> {
    let ticker = window.ticker();
    let last_date = window.last_date();

    let mut records: Vec<OutputRecord> = window
        .points()
        .iter()
        .map(|point| OutputRecord::new(point.ticker.clone(), point.date, point.value))
        .collect();

    for (offset, value) in (1_i64..).zip(forecast.values()) {
        let date = last_date.plus_days(offset)?;
        records.push(OutputRecord::new(ticker.clone(), date, *value));
    }

    Ok(OutputRecordSet::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ticker, TimeSeriesPoint, TradeDate, FORECAST_LEN, WINDOW_LEN};

    fn window_ending(last: &str) -> Window {
        let ticker = Ticker::parse("ASH").expect("valid");
        let last = TradeDate::parse(last).expect("valid");
        let points = (0..WINDOW_LEN)
            .map(|i| {
                let back = (WINDOW_LEN - 1 - i) as i64;
                TimeSeriesPoint::new(
                    ticker.clone(),
                    last.plus_days(-back).expect("in range"),
                    100.0 + i as f64,
                )
                .expect("valid point")
            })
            .collect();
        Window::new(4, points).expect("valid window")
    }

    #[test]
    fn appends_forecast_rows_after_window() {
        let window = window_ending("30-12-2023");
        let forecast = Forecast::new([1.5, 2.5, 3.5]);

        let output = assemble(&window, &forecast).expect("assemble");

        assert_eq!(output.len(), WINDOW_LEN + FORECAST_LEN);
        for (record, point) in output.iter().zip(window.points()) {
            assert_eq!(record.ticker, point.ticker);
            assert_eq!(record.timestamp, point.date.format());
            assert_eq!(record.value, point.value);
        }

        let tail: Vec<(&str, &str, f64)> = output.records()[WINDOW_LEN..]
            .iter()
            .map(|r| (r.ticker.as_str(), r.timestamp.as_str(), r.value))
            .collect();
        assert_eq!(
            tail,
            vec![
                ("ASH", "31-12-2023", 1.5),
                ("ASH", "01-01-2024", 2.5),
                ("ASH", "02-01-2024", 3.5),
            ]
        );
    }

    #[test]
    fn assembling_twice_is_identical() {
        let window = window_ending("15-03-2024");
        let forecast = Forecast::new([9.0, 8.5, 8.375]);
        assert_eq!(
            assemble(&window, &forecast).expect("first"),
            assemble(&window, &forecast).expect("second")
        );
    }
}
