//! Territory metrics collection.
//!
//! Provides structured logging and counters for monitoring how much work
//! territory recomputation does.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counters for territory operations.
pub struct Metrics {
    placements: AtomicU64,
    removals: AtomicU64,
    changed_points: AtomicU64,
    recompute_nanos: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("placements", &self.placements())
            .field("removals", &self.removals())
            .field("changed_points", &self.changed_points())
            .finish()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            placements: AtomicU64::new(0),
            removals: AtomicU64::new(0),
            changed_points: AtomicU64::new(0),
            recompute_nanos: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a placement and how many owners it changed.
    pub fn record_placement(&self, changed: usize, duration: Duration) {
        self.placements.fetch_add(1, Ordering::Relaxed);
        self.record_recompute(changed, duration);
    }

    /// Records a removal and how many owners it changed.
    pub fn record_removal(&self, changed: usize, duration: Duration) {
        self.removals.fetch_add(1, Ordering::Relaxed);
        self.record_recompute(changed, duration);
    }

    fn record_recompute(&self, changed: usize, duration: Duration) {
        self.changed_points.fetch_add(changed as u64, Ordering::Relaxed);
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.recompute_nanos.fetch_add(nanos, Ordering::Relaxed);

        // Summary every 1000 territory events
        let total = self.placements() + self.removals();
        if total.is_multiple_of(1000) {
            tracing::info!(
                placements = self.placements(),
                removals = self.removals(),
                changed_points = self.changed_points(),
                recompute_ms = self.recompute_time().as_millis() as u64,
                "Territory summary"
            );
        }
    }

    #[must_use]
    pub fn placements(&self) -> u64 {
        self.placements.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn removals(&self) -> u64 {
        self.removals.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn changed_points(&self) -> u64 {
        self.changed_points.load(Ordering::Relaxed)
    }

    /// Total time spent inside the assignment engine.
    #[must_use]
    pub fn recompute_time(&self) -> Duration {
        Duration::from_nanos(self.recompute_nanos.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` wins over `default_level` when set. Safe to call more than once;
/// later calls are ignored.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.placements(), 0);
        assert_eq!(metrics.removals(), 0);
    }

    #[test]
    fn test_record_placement_and_removal() {
        let metrics = Metrics::new();
        metrics.record_placement(37, Duration::from_micros(40));
        metrics.record_removal(5, Duration::from_micros(10));
        assert_eq!(metrics.placements(), 1);
        assert_eq!(metrics.removals(), 1);
        assert_eq!(metrics.changed_points(), 42);
        assert_eq!(metrics.recompute_time(), Duration::from_micros(50));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging("debug");
        init_logging("info");
    }
}
