//! Engine metrics collection.
//!
//! Provides structured logging and counters for monitoring the console's
//! tick cadence and action throughput.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Global metrics collector for engine statistics.
pub struct Metrics {
    tick_count: AtomicU64,
    action_count: AtomicU64,
    notice_count: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            action_count: AtomicU64::new(0),
            notice_count: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed engine tick with its duration.
    pub fn record_tick(&self, duration: Duration, notices: usize) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.notice_count
            .fetch_add(notices as u64, Ordering::Relaxed);

        // Log at info level every 100 ticks
        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick % 100 == 0 {
            tracing::info!(
                tick = tick,
                notices = self.notice_count.load(Ordering::Relaxed),
                duration_us = duration.as_micros() as u64,
                "Engine tick"
            );
        }
    }

    /// Records a one-shot action, accepted or rejected.
    pub fn record_action(&self, panel: &str, accepted: bool) {
        self.action_count.fetch_add(1, Ordering::Relaxed);
        let key = if accepted {
            format!("{}.accepted", panel)
        } else {
            format!("{}.rejected", panel)
        };
        self.increment_counter(&key);
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Reads a named counter, zero if never incremented.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn action_count(&self) -> u64 {
        self.action_count.load(Ordering::Relaxed)
    }

    /// Elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
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
        assert_eq!(metrics.tick_count(), 0);
    }

    #[test]
    fn test_record_tick() {
        let metrics = Metrics::new();
        metrics.record_tick(Duration::from_millis(1), 4);
        assert_eq!(metrics.tick_count(), 1);
    }

    #[test]
    fn test_action_counters_split_by_outcome() {
        let metrics = Metrics::new();
        metrics.record_action("token", true);
        metrics.record_action("token", false);
        metrics.record_action("token", false);
        assert_eq!(metrics.counter("token.accepted"), 1);
        assert_eq!(metrics.counter("token.rejected"), 2);
        assert_eq!(metrics.action_count(), 3);
    }
}
