//! Input file discovery, grouped by exchange.
//!
//! The data root holds one subdirectory per exchange and the price files sit
//! directly inside it:
//!
//! ```text
//! data/
//! ├── LSE/
//! │   ├── FLTR.csv
//! │   └── GSK.csv
//! └── NYSE/
//!     └── ASH.csv
//! ```
//!
//! Files at any other depth are skipped, as are outputs of earlier runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::{CoreError, FileCap};

/// Substring that marks a file as the output of an earlier run.
pub const PREDICTION_MARKER: &str = "Prediction_";

const INPUT_EXTENSION: &str = "csv";

/// Selected input files keyed by exchange name.
///
/// Exchanges iterate in name order; files within an exchange keep the
/// order in which the filesystem listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeFileGroup {
    groups: BTreeMap<String, Vec<PathBuf>>,
}

impl ExchangeFileGroup {
    pub fn exchanges(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn files(&self, exchange: &str) -> &[PathBuf] {
        self.groups.get(exchange).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All selected files as `(exchange, path)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.groups.iter().flat_map(|(exchange, files)| {
            files
                .iter()
                .map(move |path| (exchange.as_str(), path.as_path()))
        })
    }

    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }

    fn push(&mut self, exchange: String, path: PathBuf) {
        self.groups.entry(exchange).or_default().push(path);
    }

    fn truncate(&mut self, cap: FileCap) {
        for files in self.groups.values_mut() {
            files.truncate(cap.get());
        }
    }
}

/// Discovers candidate files under `root` and keeps at most `cap` per exchange.
///
/// Only `root` and its immediate subdirectories are listed. An exchange
/// directory that cannot be read is logged and skipped; only a failure to
/// list `root` itself is returned as an error. Symlinks are followed.
pub fn select(root: &Path, cap: FileCap) -> Result<ExchangeFileGroup, CoreError> {
    let mut selected = ExchangeFileGroup::default();

    let entries = fs::read_dir(root).map_err(|source| CoreError::io(root, source))?;
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(err) => {
                error!(path = %root.display(), reason = %err, "skipping unreadable entry");
                continue;
            }
        };

        match EntryType::of(&path) {
            Some(EntryType::Dir) => {}
            Some(EntryType::File) => {
                if has_input_extension(&path) {
                    debug!(path = %path.display(), "skipping file not following exchange/file structure");
                }
                continue;
            }
            None => continue,
        }

        let Some(exchange) = file_name_str(&path) else {
            debug!(path = %path.display(), "skipping exchange with non UTF-8 name");
            continue;
        };

        for candidate in exchange_files(&path) {
            let Some(file_name) = file_name_str(&candidate) else {
                continue;
            };
            if file_name.contains(PREDICTION_MARKER) {
                debug!(path = %candidate.display(), "skipping output of an earlier run");
                continue;
            }
            selected.push(exchange.clone(), candidate);
        }
    }

    selected.truncate(cap);
    Ok(selected)
}

/// Candidate input files directly inside one exchange directory, in listing order.
fn exchange_files(exchange_dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(exchange_dir) {
        Ok(entries) => entries,
        Err(err) => {
            error!(path = %exchange_dir.display(), reason = %err, "skipping unreadable exchange directory");
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(err) => {
                error!(path = %exchange_dir.display(), reason = %err, "skipping unreadable entry");
                continue;
            }
        };

        match EntryType::of(&path) {
            Some(EntryType::File) if has_input_extension(&path) => files.push(path),
            Some(EntryType::File) => {}
            Some(EntryType::Dir) => {
                debug!(path = %path.display(), "skipping directory below exchange level");
            }
            None => {}
        }
    }
    files
}

enum EntryType {
    Dir,
    File,
}

impl EntryType {
    /// Classifies `path`, following symlinks. `None` for anything that is
    /// neither a file nor a directory, or cannot be inspected.
    fn of(path: &Path) -> Option<Self> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => Some(Self::Dir),
            Ok(metadata) if metadata.is_file() => Some(Self::File),
            Ok(_) => {
                debug!(path = %path.display(), "skipping entry that is neither file nor directory");
                None
            }
            Err(err) => {
                debug!(path = %path.display(), reason = %err, "skipping entry that cannot be inspected");
                None
            }
        }
    }
}

fn file_name_str(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_owned)
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}
