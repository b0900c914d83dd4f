/*!
# Monitoring Runtime

The cooperative polling loop that drives every configured park through
its day: poll and append while the operating window is open, emit one
summary when it closes, and exit once every park has retired. Parks are
evaluated sequentially within a tick; the inter-tick sleep is the only
suspension point. This abstraction lets different frontends (continuous
service, cron-style single pass) share one implementation.
*/

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use opentelemetry::KeyValue;
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

use parkvakt_client::{extract_observations, LiveApiClient, LiveDataSource};
use parkvakt_config::{ParkConfig, ParkvaktConfig};
use parkvakt_core::scheduler::{ParkScheduleState, TickDecision};
use parkvakt_core::window::OperatingWindow;
use parkvakt_store::{DaySummary, RecordStore};
use parkvakt_telemetry::{logging::EventLogger, metrics::MetricsRecorder};

use super::EngineError;

/// Timestamp format of the first day-file column, park-local.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One monitored park with its resolved timezone and scheduling state.
struct ParkSlot {
    park: ParkConfig,
    tz: Tz,
    state: ParkScheduleState,
}

/// Owns the full monitoring state for one process run.
pub struct MonitorRuntime {
    slots: Vec<ParkSlot>,
    interval: Duration,
    source: Arc<dyn LiveDataSource>,
    store: RecordStore,
    metrics: MetricsRecorder,
}

impl MonitorRuntime {
    /// Builds the runtime, resolving every park's timezone up front so a
    /// bad zone fails at startup instead of mid-day.
    pub fn new(
        config: ParkvaktConfig,
        source: Arc<dyn LiveDataSource>,
        metrics: MetricsRecorder,
    ) -> Result<Self, EngineError> {
        let store = RecordStore::new(config.storage.data_dir.clone());
        let interval = Duration::from_secs(config.poll.interval_secs);

        let mut slots = Vec::with_capacity(config.parks.len());
        for park in config.parks {
            let tz = park.parsed_timezone()?;
            slots.push(ParkSlot {
                park,
                tz,
                state: ParkScheduleState::new(),
            });
        }

        Ok(Self {
            slots,
            interval,
            source,
            store,
            metrics,
        })
    }

    /// Runs monitoring passes until every park has retired for the day.
    #[instrument(skip(self))]
    pub async fn run(&mut self) {
        info!(
            parks = self.slots.len(),
            interval_secs = self.interval.as_secs(),
            "Monitoring started"
        );

        loop {
            if self.tick_all().await {
                break;
            }
            sleep(self.interval).await;
        }

        info!("All parks retired for the day; monitoring complete");
        EventLogger::log_event(
            "monitoring_complete",
            vec![KeyValue::new("parks", self.slots.len() as i64)],
        )
        .await;
    }

    /// One sequential pass over every park at the current wall-clock
    /// time. Returns true when all parks have retired.
    pub async fn tick_all(&mut self) -> bool {
        self.tick_all_at(Utc::now()).await
    }

    /// Tick at an explicit instant; each park evaluates it in its own
    /// timezone. Split out from [`Self::tick_all`] so tests can drive
    /// the whole day deterministically.
    pub async fn tick_all_at(&mut self, now_utc: DateTime<Utc>) -> bool {
        let Self {
            slots,
            source,
            store,
            metrics,
            ..
        } = self;

        for slot in slots.iter_mut() {
            Self::step_park(source.as_ref(), store, metrics, slot, now_utc).await;
        }
        slots.iter().all(|slot| slot.state.retired())
    }

    /// Whether every park has retired for the day.
    pub fn all_retired(&self) -> bool {
        self.slots.iter().all(|slot| slot.state.retired())
    }

    async fn step_park(
        source: &dyn LiveDataSource,
        store: &RecordStore,
        metrics: &MetricsRecorder,
        slot: &mut ParkSlot,
        now_utc: DateTime<Utc>,
    ) {
        let now = now_utc.with_timezone(&slot.tz);
        let window = OperatingWindow::new(slot.park.start_hour, slot.park.end_hour);
        let in_window = window.contains(now.hour() as u8);

        match slot.state.on_tick(in_window) {
            TickDecision::Idle => {}
            TickDecision::Poll => {
                let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
                Self::poll_park(
                    source,
                    store,
                    metrics,
                    &slot.park,
                    &timestamp,
                    now.date_naive(),
                )
                .await;
            }
            TickDecision::Summarize => {
                Self::summarize_park(store, metrics, &slot.park, now.date_naive()).await;
            }
        }
    }

    /// Fetch, extract, append. Every failure is reported and absorbed:
    /// the park stays active and the next tick retries.
    async fn poll_park(
        source: &dyn LiveDataSource,
        store: &RecordStore,
        metrics: &MetricsRecorder,
        park: &ParkConfig,
        timestamp: &str,
        date: NaiveDate,
    ) {
        metrics.inc_polls();
        let started = Instant::now();

        let response = match source.fetch_live(&park.url).await {
            Ok(response) => response,
            Err(e) => {
                metrics.inc_fetch_failures();
                warn!(park = %park.name, error = %e, "Live fetch failed; retrying next tick");
                return;
            }
        };
        metrics.observe_fetch_latency(started.elapsed().as_secs_f64());

        let observations = extract_observations(&response, timestamp);
        if observations.is_empty() {
            info!(park = %park.name, "No operating attractions right now");
            return;
        }

        match store.append(&park.name, date, &observations) {
            Ok(rows) => {
                metrics.add_observations(rows);
                info!(park = %park.name, rows, at = timestamp, "Recorded wait times");
            }
            Err(e) => {
                error!(park = %park.name, error = %e, "Day-file append failed; rows lost this tick");
            }
        }
    }

    /// Emit the daily summary (or the reason there is none) and retire
    /// the park. A read failure suppresses the summary but the park
    /// still retires; nothing here is allowed to stop the loop.
    async fn summarize_park(
        store: &RecordStore,
        metrics: &MetricsRecorder,
        park: &ParkConfig,
        date: NaiveDate,
    ) {
        match store.summarize(&park.name, date) {
            Ok(DaySummary::Report(report)) => {
                println!("\n{report}\n");
            }
            Ok(DaySummary::NoFile) => {
                println!("{}: no data recorded today, skipping summary", park.name);
            }
            Ok(DaySummary::EmptyFile) => {
                println!("{}: day-file has no rows, skipping summary", park.name);
            }
            Err(e) => {
                error!(park = %park.name, error = %e, "Could not read day-file; summary suppressed");
            }
        }

        metrics.inc_parks_retired();
        info!(park = %park.name, %date, "Park retired for the day");
        EventLogger::log_event(
            "park_retired",
            vec![
                KeyValue::new("park", park.name.clone()),
                KeyValue::new("date", date.to_string()),
            ],
        )
        .await;
    }
}

/// Runs the continuous monitoring loop against the live API.
#[instrument(level = "info", name = "run_monitor_mode", skip(config, metrics))]
pub async fn run_monitor_mode(
    config: ParkvaktConfig,
    metrics: MetricsRecorder,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = LiveApiClient::new()?;
    let mut runtime = MonitorRuntime::new(config, Arc::new(client), metrics)?;
    runtime.run().await;
    Ok(())
}

/// Runs exactly one pass over all parks, then returns. Suits cron-style
/// deployments where the scheduler lives outside the process.
#[instrument(level = "info", name = "run_single_pass_mode", skip(config, metrics))]
pub async fn run_single_pass_mode(
    config: ParkvaktConfig,
    metrics: MetricsRecorder,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = LiveApiClient::new()?;
    let mut runtime = MonitorRuntime::new(config, Arc::new(client), metrics)?;
    let all_retired = runtime.tick_all().await;
    info!(all_retired, "Single pass complete");
    Ok(())
}
