//! Outcome of trying one location during a multi-location search.

use crate::error::{Result, SourceError};
use std::path::Path;
use tracing::{debug, trace};

#[derive(Debug)]
pub enum Probe<T> {
    /// The location has the resource; the search can stop.
    Found(T),
    /// The location was readable and simply does not have it.
    Missing,
    /// The location could not be examined (corrupt archive, permission
    /// denied, raced with deletion). The search continues past it.
    Failed(SourceError),
}

impl<T> Probe<T> {
    /// Classify a lookup result. `Ok(None)` and not-found errors are misses.
    pub fn from_lookup(result: Result<Option<T>>) -> Self {
        match result {
            Ok(Some(value)) => Probe::Found(value),
            Ok(None) => Probe::Missing,
            Err(e) if e.is_not_found() => Probe::Missing,
            Err(e) => Probe::Failed(e),
        }
    }

    /// Classify a read result where any not-found error is a miss.
    pub fn from_read(result: Result<T>) -> Self {
        Self::from_lookup(result.map(Some))
    }

    /// Log the outcome for `location` and collapse to an `Option`.
    pub fn settle(self, location: &Path, name: &str) -> Option<T> {
        match self {
            Probe::Found(value) => {
                trace!("{} found in {}", name, location.display());
                Some(value)
            }
            Probe::Missing => {
                trace!("{} not in {}", name, location.display());
                None
            }
            Probe::Failed(e) => {
                debug!("Skipping {} while looking for {}: {}", location.display(), name, e);
                None
            }
        }
    }
}
