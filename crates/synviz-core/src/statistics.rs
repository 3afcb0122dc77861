//! Timing statistics and their persisted file.
//!
//! The viewer reads the statistics file before its frame loop, records how
//! long each tracked operation takes, and writes the merged result back on
//! shutdown.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const STATISTICS_VERSION: u32 = 1;

/// Aggregated timings of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    pub count: u64,
    pub total_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl Default for TimingStats {
    fn default() -> Self {
        Self {
            count: 0,
            total_ms: 0.0,
            min_ms: f64::INFINITY,
            max_ms: 0.0,
        }
    }
}

impl TimingStats {
    /// Adds one measurement.
    pub fn record(&mut self, elapsed: Duration) {
        let ms = elapsed.as_secs_f64() * 1000.0;
        self.count += 1;
        self.total_ms += ms;
        self.min_ms = self.min_ms.min(ms);
        self.max_ms = self.max_ms.max(ms);
    }

    /// Folds another aggregate into this one.
    pub fn merge(&mut self, other: &TimingStats) {
        if other.count == 0 {
            return;
        }
        self.count += other.count;
        self.total_ms += other.total_ms;
        self.min_ms = self.min_ms.min(other.min_ms);
        self.max_ms = self.max_ms.max(other.max_ms);
    }

    /// Returns the mean duration in milliseconds, or 0 without measurements.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_ms / self.count as f64
        }
    }
}

/// Collects per-operation timings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceTracker {
    timings: BTreeMap<String, TimingStats>,
}

impl PerformanceTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one measurement for `name`.
    pub fn record(&mut self, name: &str, elapsed: Duration) {
        self.timings.entry(name.to_string()).or_default().record(elapsed);
    }

    /// Runs `f` and records how long it took under `name`.
    pub fn track<R>(&mut self, name: &str, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = f();
        self.record(name, start.elapsed());
        result
    }

    /// Folds all timings of `other` into this tracker.
    pub fn merge(&mut self, other: &PerformanceTracker) {
        for (name, stats) in other.timings.iter().filter(|(_, s)| s.count > 0) {
            self.timings.entry(name.clone()).or_default().merge(stats);
        }
    }

    /// Returns the timings of one operation.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TimingStats> {
        self.timings.get(name)
    }

    /// Iterates over all operations in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimingStats)> {
        self.timings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }

    /// Logs a one-line summary per operation.
    pub fn log_summary(&self) {
        for (name, stats) in self.iter() {
            log::info!(
                "{name}: {} calls, mean {:.3} ms, min {:.3} ms, max {:.3} ms",
                stats.count,
                stats.mean_ms(),
                stats.min_ms,
                stats.max_ms
            );
        }
    }
}

#[derive(Serialize, Deserialize)]
struct StatisticsDocument {
    version: u32,
    timings: BTreeMap<String, TimingStats>,
}

/// The persisted statistics file.
#[derive(Debug, Clone)]
pub struct StatisticsFile {
    path: PathBuf,
}

impl StatisticsFile {
    /// Creates a handle for the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the statistics. A missing file yields an empty tracker.
    pub fn read(&self) -> Result<PerformanceTracker> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no statistics at {}, starting fresh", self.path.display());
                return Ok(PerformanceTracker::new());
            }
            Err(e) => return Err(e.into()),
        };
        let document: StatisticsDocument = serde_json::from_str(&text)?;
        if document.version != STATISTICS_VERSION {
            log::warn!(
                "statistics file version {} differs from {STATISTICS_VERSION}",
                document.version
            );
        }
        Ok(PerformanceTracker {
            timings: document.timings,
        })
    }

    /// Writes the statistics, replacing the file.
    pub fn write(&self, tracker: &PerformanceTracker) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let document = StatisticsDocument {
            version: STATISTICS_VERSION,
            timings: tracker.timings.clone(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        log::info!("wrote statistics to {}", self.path.display());
        Ok(())
    }
}
