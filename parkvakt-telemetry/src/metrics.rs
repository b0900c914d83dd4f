//! ## parkvakt-telemetry::metrics
//! **Prometheus registry for the monitoring loop**
//!
//! ### Components:
//! - `metrics/`: Prometheus registry for poll and storage counters
//! - `logging/`: tracing subscriber setup plus lifecycle event emission
//!
//! ### Future:
//! - Per-park label dimension once cardinality is worth it

use prometheus::{Counter, Histogram, HistogramOpts, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: prometheus::Registry,
    pub polls_total: prometheus::Counter,
    pub fetch_failures: prometheus::Counter,
    pub observations_recorded: prometheus::Counter,
    pub parks_retired: prometheus::Counter,
    pub fetch_latency: prometheus::Histogram,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let polls_total =
            Counter::new("parkvakt_polls_total", "Total live-data polls attempted").unwrap();
        let fetch_failures = Counter::new(
            "parkvakt_fetch_failures_total",
            "Polls that failed in transport, status, or decoding",
        )
        .unwrap();
        let observations_recorded = Counter::new(
            "parkvakt_observations_total",
            "Wait-time rows appended to day-files",
        )
        .unwrap();
        let parks_retired = Counter::new(
            "parkvakt_parks_retired_total",
            "Parks retired for the day after their summary",
        )
        .unwrap();

        let fetch_latency = Histogram::with_opts(
            HistogramOpts::new(
                "parkvakt_fetch_latency_seconds",
                "Live-data fetch round-trip time",
            )
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
        )
        .unwrap();

        registry.register(Box::new(polls_total.clone())).unwrap();
        registry.register(Box::new(fetch_failures.clone())).unwrap();
        registry
            .register(Box::new(observations_recorded.clone()))
            .unwrap();
        registry.register(Box::new(parks_retired.clone())).unwrap();
        registry.register(Box::new(fetch_latency.clone())).unwrap();

        Self {
            registry,
            polls_total,
            fetch_failures,
            observations_recorded,
            parks_retired,
            fetch_latency,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    pub fn inc_polls(&self) {
        self.polls_total.inc();
    }

    pub fn inc_fetch_failures(&self) {
        self.fetch_failures.inc();
    }

    pub fn add_observations(&self, rows: usize) {
        self.observations_recorded.inc_by(rows as f64);
    }

    pub fn inc_parks_retired(&self) {
        self.parks_retired.inc();
    }

    pub fn observe_fetch_latency(&self, seconds: f64) {
        self.fetch_latency.observe(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_appear_in_gathered_text() {
        let metrics = MetricsRecorder::new();
        metrics.inc_polls();
        metrics.add_observations(12);

        let text = metrics.gather_metrics().unwrap();
        assert!(text.contains("parkvakt_polls_total 1"));
        assert!(text.contains("parkvakt_observations_total 12"));
    }
}
