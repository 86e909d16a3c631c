//! Random window extraction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{TimeSeries, ValidationError, Window, WINDOW_LEN};

/// Picks a uniformly random run of [`WINDOW_LEN`] consecutive points.
///
/// The generator is owned by the sampler, so separate samplers never share
/// random state.
#[derive(Debug, Clone)]
pub struct WindowSampler<R = StdRng> {
    rng: R,
}

impl WindowSampler<StdRng> {
    /// Sampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Sampler with a fixed seed; the same seed yields the same windows.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, otherwise from entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> WindowSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Samples a window with a start index drawn from `0..=len - WINDOW_LEN`.
    ///
    /// Series shorter than [`WINDOW_LEN`] fail with
    /// [`ValidationError::InsufficientData`].
    pub fn sample(&mut self, series: &TimeSeries) -> Result<Window, ValidationError> {
        let len = series.len();
        if len < WINDOW_LEN {
            return Err(ValidationError::InsufficientData {
                len,
                required: WINDOW_LEN,
            });
        }

        let start = self.rng.gen_range(0..=len - WINDOW_LEN);
        series.window_at(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ticker, TimeSeriesPoint, TradeDate};

    fn series(len: usize) -> TimeSeries {
        let ticker = Ticker::parse("FLTR").expect("valid");
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
        TimeSeries::new(points).expect("valid series")
    }

    #[test]
    fn short_series_is_rejected() {
        let mut sampler = WindowSampler::seeded(1);
        for len in [0, 1, 9] {
            let err = sampler.sample(&series(len)).expect_err("must fail");
            assert_eq!(
                err,
                ValidationError::InsufficientData {
                    len,
                    required: WINDOW_LEN
                }
            );
        }
    }

    #[test]
    fn exact_length_series_yields_whole_series() {
        let mut sampler = WindowSampler::seeded(99);
        let window = sampler.sample(&series(WINDOW_LEN)).expect("fits");
        assert_eq!(window.start_index(), 0);
        assert_eq!(window.values(), (0..10).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn windows_stay_in_bounds_and_contiguous() {
        let source = series(25);
        let mut sampler = WindowSampler::seeded(42);
        for _ in 0..200 {
            let window = sampler.sample(&source).expect("fits");
            let start = window.start_index();
            assert!(start + WINDOW_LEN <= source.len());
            assert_eq!(window.points(), &source.points()[start..start + WINDOW_LEN]);
        }
    }

    #[test]
    fn every_start_index_is_reachable() {
        let source = series(12);
        let mut sampler = WindowSampler::seeded(3);
        let mut seen = [false; 3];
        for _ in 0..500 {
            seen[sampler.sample(&source).expect("fits").start_index()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn same_seed_same_windows() {
        let source = series(50);
        let mut a = WindowSampler::seeded(2024);
        let mut b = WindowSampler::seeded(2024);
        for _ in 0..20 {
            assert_eq!(
                a.sample(&source).expect("fits"),
                b.sample(&source).expect("fits")
            );
        }
    }
}
