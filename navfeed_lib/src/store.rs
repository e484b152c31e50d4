//! Persistence for the price series.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::NavFeedError;
use crate::series::{PriceEntry, Series};

/// Durable storage for a price series.
///
/// One load and at most one save per run; the save is a full replacement
/// of whatever was stored before.
pub trait SeriesStore {
    fn load(&self) -> Result<Series, NavFeedError>;
    fn save(&self, series: &[PriceEntry]) -> Result<(), NavFeedError>;
}

/// A series stored as one JSON file holding a top-level array.
///
/// A missing file reads as an empty series (first run). Any other read
/// failure is `StorageUnavailable`, and a file that exists but does not
/// parse as a series is `MalformedStoredData`; both are fatal for the run.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeriesStore for JsonFileStore {
    fn load(&self) -> Result<Series, NavFeedError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("no series file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(NavFeedError::StorageUnavailable {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&text).map_err(|e| NavFeedError::MalformedStoredData {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn save(&self, series: &[PriceEntry]) -> Result<(), NavFeedError> {
        let json = serde_json::to_string_pretty(series)?;
        fs::write(&self.path, json).map_err(|e| NavFeedError::StorageUnavailable {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::info!(
            "saved {} entries to {}",
            series.len(),
            self.path.display()
        );
        Ok(())
    }
}
