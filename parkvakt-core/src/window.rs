//! Operating-window membership.
//!
//! A park is polled only while the local hour falls inside its configured
//! window. Windows may wrap past midnight (`start >= end`), and a window
//! whose start equals its end covers the whole day.

use serde::{Deserialize, Serialize};

/// Hour range during which a park is actively monitored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingWindow {
    /// First hour inside the window (0-23).
    pub start_hour: u8,
    /// First hour outside the window (0-23).
    pub end_hour: u8,
}

impl OperatingWindow {
    /// Both hours must already be in 0-23; configuration validation
    /// guarantees this before a window is ever constructed.
    pub fn new(start_hour: u8, end_hour: u8) -> Self {
        debug_assert!(start_hour < 24 && end_hour < 24);
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Whether `hour` (0-23) falls inside the window.
    ///
    /// `start < end` is the plain daytime case, open on `[start, end)`.
    /// Otherwise the window wraps midnight: open from `start` through 23
    /// and again from 0 up to `end`. Equal hours mean a full-day window.
    #[inline]
    pub fn contains(&self, hour: u8) -> bool {
        if self.start_hour < self.end_hour {
            self.start_hour <= hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_daytime_window_bounds() {
        let window = OperatingWindow::new(9, 21);
        assert!(!window.contains(8));
        assert!(window.contains(9));
        assert!(window.contains(20));
        assert!(!window.contains(21));
        assert!(!window.contains(23));
    }

    #[test]
    fn test_wrapping_window_spans_midnight() {
        let window = OperatingWindow::new(22, 2);
        assert!(window.contains(22));
        assert!(window.contains(23));
        assert!(window.contains(0));
        assert!(window.contains(1));
        assert!(!window.contains(2));
        assert!(!window.contains(12));
    }

    #[test]
    fn test_equal_hours_is_full_day() {
        let window = OperatingWindow::new(7, 7);
        for hour in 0..24 {
            assert!(window.contains(hour), "hour {hour} should be inside");
        }
    }

    proptest! {
        #[test]
        fn prop_daytime_membership(start in 0u8..24, end in 0u8..24, hour in 0u8..24) {
            prop_assume!(start < end);
            let window = OperatingWindow::new(start, end);
            prop_assert_eq!(window.contains(hour), start <= hour && hour < end);
        }

        #[test]
        fn prop_wrapping_membership(start in 0u8..24, end in 0u8..24, hour in 0u8..24) {
            prop_assume!(start >= end);
            let window = OperatingWindow::new(start, end);
            prop_assert_eq!(window.contains(hour), hour >= start || hour < end);
        }
    }
}
