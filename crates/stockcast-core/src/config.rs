//! Validated run configuration.
//!
//! Everything here is checked before the pipeline touches a single file; a
//! [`ConfigError`] aborts the whole run.

use std::path::{Path, PathBuf};

use crate::{ConfigError, ForecasterKind};

pub const DEFAULT_DATA_DIRECTORY: &str = "data/";
pub const DEFAULT_FILE_COUNT: i64 = 2;

const MIN_FILE_COUNT: i64 = 1;
const MAX_FILE_COUNT: i64 = 2;

/// Maximum number of files processed per exchange (1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileCap(usize);

impl FileCap {
    pub fn new(value: i64) -> Result<Self, ConfigError> {
        if !(MIN_FILE_COUNT..=MAX_FILE_COUNT).contains(&value) {
            return Err(ConfigError::InvalidFileCount { value });
        }

        Ok(Self(value as usize))
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for FileCap {
    fn default() -> Self {
        Self(DEFAULT_FILE_COUNT as usize)
    }
}

/// Read-only configuration shared by every per-file run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    data_root: PathBuf,
    per_exchange_cap: FileCap,
    forecaster: ForecasterKind,
    seed: Option<u64>,
}

impl RunConfig {
    /// Validates the raw settings.
    ///
    /// Fails with [`ConfigError::InvalidFileCount`] outside `1..=2`, and with
    /// [`ConfigError::DataDirectoryNotFound`] / [`ConfigError::NotADirectory`]
    /// when the data root is unusable.
    pub fn new(data_root: impl Into<PathBuf>, file_count: i64) -> Result<Self, ConfigError> {
        let per_exchange_cap = FileCap::new(file_count)?;
        let data_root = data_root.into();

        if !data_root.exists() {
            return Err(ConfigError::DataDirectoryNotFound { path: data_root });
        }
        if !data_root.is_dir() {
            return Err(ConfigError::NotADirectory { path: data_root });
        }

        Ok(Self {
            data_root,
            per_exchange_cap,
            forecaster: ForecasterKind::default(),
            seed: None,
        })
    }

    pub fn with_forecaster(mut self, forecaster: ForecasterKind) -> Self {
        self.forecaster = forecaster;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    pub fn per_exchange_cap(&self) -> FileCap {
        self.per_exchange_cap
    }

    pub fn forecaster(&self) -> ForecasterKind {
        self.forecaster
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_and_two() {
        assert_eq!(FileCap::new(1).expect("valid").get(), 1);
        assert_eq!(FileCap::new(2).expect("valid").get(), 2);
    }

    #[test]
    fn rejects_out_of_range_counts() {
        for value in [-1, 0, 3, 100] {
            let err = FileCap::new(value).expect_err("must fail");
            assert_eq!(err, ConfigError::InvalidFileCount { value });
        }
    }

    #[test]
    fn rejects_missing_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        let err = RunConfig::new(&missing, 2).expect_err("must fail");
        assert_eq!(err, ConfigError::DataDirectoryNotFound { path: missing });
    }

    #[test]
    fn rejects_file_as_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("prices.csv");
        std::fs::write(&file, "").expect("write");
        let err = RunConfig::new(&file, 1).expect_err("must fail");
        assert!(matches!(err, ConfigError::NotADirectory { .. }));
    }

    #[test]
    fn cap_is_checked_before_root() {
        let err = RunConfig::new("/definitely/not/here", 5).expect_err("must fail");
        assert_eq!(err, ConfigError::InvalidFileCount { value: 5 });
    }

    #[test]
    fn carries_forecaster_and_seed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = RunConfig::new(dir.path(), 1)
            .expect("valid")
            .with_forecaster(ForecasterKind::CurveFit)
            .with_seed(Some(7));
        assert_eq!(config.per_exchange_cap().get(), 1);
        assert_eq!(config.forecaster(), ForecasterKind::CurveFit);
        assert_eq!(config.seed(), Some(7));
    }
}
