//! On-disk catalog snapshot with mtime-based freshness logic

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{debug, info};

use crate::catalog::error::CacheError;
use crate::catalog::source::CatalogSource;

/// Trait for reading the current time, injectable for deterministic tests
pub trait Clock {
    fn now(&self) -> SystemTime;
}

/// Clock backed by the system wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Manages the local catalog snapshot file.
///
/// Guarantees a snapshot exists at `path` and is no older than `max_age`
/// before it is read. The snapshot's filesystem modification time is the
/// sole freshness signal; nothing inside the document is trusted for that.
pub struct CatalogCache<S, C = SystemClock> {
    path: PathBuf,
    max_age: Duration,
    source: S,
    clock: C,
}

impl<S: CatalogSource> CatalogCache<S, SystemClock> {
    pub fn new(path: PathBuf, max_age: Duration, source: S) -> Self {
        Self::with_clock(path, max_age, source, SystemClock)
    }
}

impl<S: CatalogSource, C: Clock> CatalogCache<S, C> {
    pub fn with_clock(path: PathBuf, max_age: Duration, source: S, clock: C) -> Self {
        Self {
            path,
            max_age,
            source,
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensures the snapshot file exists and is fresh enough, fetching the
    /// catalog when it is missing or older than `max_age`. A snapshot whose
    /// age is exactly `max_age` is still considered fresh.
    pub fn ensure_fresh(&self) -> Result<(), CacheError> {
        if self.path.is_dir() {
            return Err(CacheError::NotAFile(self.path.clone()));
        }

        match fs::metadata(&self.path) {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No snapshot at {:?}, fetching", self.path);
                self.refresh()?;
            }
            Err(err) => return Err(err.into()),
            Ok(metadata) => {
                let modified = metadata.modified()?;
                // A modification time in the future counts as age zero
                let age = self
                    .clock
                    .now()
                    .duration_since(modified)
                    .unwrap_or_default();

                if age > self.max_age {
                    info!("Snapshot is {}ms old, refetching", age.as_millis());
                    self.refresh()?;
                } else {
                    debug!("Snapshot is fresh ({}ms old)", age.as_millis());
                }
            }
        }

        Ok(())
    }

    /// Reads the raw snapshot bytes. Callers must have run [`ensure_fresh`]
    /// first; this performs no freshness check of its own.
    ///
    /// [`ensure_fresh`]: CatalogCache::ensure_fresh
    pub fn read(&self) -> Result<Vec<u8>, CacheError> {
        Ok(fs::read(&self.path)?)
    }

    /// Fetches the catalog and replaces the snapshot. The body is written
    /// to a sibling temp file and renamed into place, so a reader never
    /// observes a partially written snapshot and a failed fetch leaves the
    /// previous snapshot untouched.
    fn refresh(&self) -> Result<(), CacheError> {
        let body = self.source.fetch_catalog().map_err(CacheError::Fetch)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &body).map_err(|err| CacheError::Fetch(err.into()))?;
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CacheError::Fetch(err.into()));
        }

        info!("Wrote {} byte snapshot to {:?}", body.len(), self.path);
        Ok(())
    }
}
