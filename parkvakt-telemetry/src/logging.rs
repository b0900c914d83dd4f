//! ## parkvakt-telemetry::logging
//! **Structured logger with `tracing` integration**
//!
//! ### Expectations:
//! - Negligible overhead at one poll per park per tick
//! - Structured lifecycle events with OpenTelemetry metadata
//!
//! ### Components:
//! - `logging/`: tracing subscriber setup plus lifecycle event emission
//! - `metrics/`: Prometheus registry for poll and storage counters

use opentelemetry::KeyValue;
use tracing::{info_span, Instrument};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    pub fn init() {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_thread_names(true)
            .with_span_events(FmtSpan::ENTER)
            .init()
    }

    /// Emits one monitoring lifecycle event (poll outcome, retirement,
    /// completion) with structured metadata.
    pub async fn log_event(event_type: &str, metadata: Vec<KeyValue>) {
        let span = info_span!(
            "monitor_event",
            event_type = event_type,
            otel.kind = "INTERNAL"
        );

        async {
            tracing::info!(
                metadata = ?metadata,
                "Monitoring event occurred"
            );
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_logging() {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(EventLogger::log_event(
                "test",
                vec![KeyValue::new("park", "EPCOT")],
            ));
        assert!(logs_contain("Monitoring event occurred"));
    }
}
