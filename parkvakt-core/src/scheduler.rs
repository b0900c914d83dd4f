//! Per-park scheduling state machine.
//!
//! The runtime drives each park once per tick; this module decides what
//! that tick does. A park polls while its window is open, emits its daily
//! summary on the first tick observed outside the window, and is then
//! retired for the remainder of the process run.

use serde::{Deserialize, Serialize};

/// What the runtime should do for a park on the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDecision {
    /// Inside the window: fetch live data and append observations.
    Poll,
    /// First tick outside the window: emit the daily summary, then stop.
    Summarize,
    /// Monitoring already ended for the day.
    Idle,
}

/// Mutable per-park scheduling flags, owned by the runtime's state table
/// and advanced exactly once per tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkScheduleState {
    summary_emitted: bool,
    retired: bool,
}

impl ParkScheduleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn retired(&self) -> bool {
        self.retired
    }

    pub fn summary_emitted(&self) -> bool {
        self.summary_emitted
    }

    /// Advances the state machine by one tick.
    ///
    /// Retirement is terminal for the process run: once a park has been
    /// observed outside its window it is never polled or summarized
    /// again, even if the clock later re-enters the window. Re-entering
    /// the window before retirement re-arms the summary, which keeps the
    /// state object correct for day schedules with gaps.
    pub fn on_tick(&mut self, in_window: bool) -> TickDecision {
        if self.retired {
            return TickDecision::Idle;
        }
        if in_window {
            self.summary_emitted = false;
            TickDecision::Poll
        } else {
            self.summary_emitted = true;
            self.retired = true;
            TickDecision::Summarize
        }
    }
}
