use metrics::counter;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Global search counters
pub static METRICS: OnceLock<SearchMetrics> = OnceLock::new();

/// Get the global metrics instance
pub fn get_metrics() -> &'static SearchMetrics {
    METRICS.get_or_init(SearchMetrics::new)
}

/// Initialize tracing subscriber; `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Filter used when no `RUST_LOG` is set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "hdworld_search=debug,hdworld_search_core=debug"
    } else {
        "hdworld_search=info,hdworld_search_core=info"
    }
}

/// Search counters, mirrored to the `metrics` facade.
#[derive(Debug)]
pub struct SearchMetrics {
    searches: AtomicU64,
    failures: AtomicU64,
    results: AtomicU64,
    start_time: Instant,
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self {
            searches: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            results: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_search(&self, results: usize, duration: Duration) {
        counter!("hdworld_searches_total").increment(1);
        counter!("hdworld_results_total").increment(results as u64);
        self.searches.fetch_add(1, Ordering::Relaxed);
        self.results.fetch_add(results as u64, Ordering::Relaxed);
        debug!(
            results,
            duration_ms = duration.as_millis() as u64,
            "Search recorded"
        );
    }

    pub fn record_failure(&self) {
        counter!("hdworld_searches_total").increment(1);
        counter!("hdworld_search_failures_total").increment(1);
        self.searches.fetch_add(1, Ordering::Relaxed);
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn searches(&self) -> u64 {
        self.searches.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn results(&self) -> u64 {
        self.results.load(Ordering::Relaxed)
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn log_summary(&self) {
        info!(
            uptime_seconds = self.uptime().as_secs(),
            searches = self.searches(),
            failures = self.failures(),
            results = self.results(),
            "Search metrics summary"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_recording() {
        let metrics = SearchMetrics::new();

        metrics.record_search(3, Duration::from_millis(100));
        metrics.record_failure();
        metrics.record_search(0, Duration::from_millis(20));

        assert_eq!(metrics.searches(), 3);
        assert_eq!(metrics.failures(), 1);
        assert_eq!(metrics.results(), 3);
    }

    #[test]
    fn debug_filter_is_more_verbose() {
        assert!(default_filter(true).contains("=debug"));
        assert!(default_filter(false).contains("=info"));
    }
}
