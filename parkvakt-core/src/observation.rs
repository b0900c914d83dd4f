//! Wait-time observations and their sentinel values.
//!
//! The sentinel strings are written into day-files and must stay
//! byte-identical across releases so that files produced by earlier
//! deployments remain readable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity type recorded for every in-scope observation.
pub const ENTITY_ATTRACTION: &str = "ATTRACTION";

/// Name recorded when the source omits an attraction's display name.
pub const UNKNOWN_NAME: &str = "Sin nombre";

/// Wait field recorded when the source reports no standby wait.
pub const NO_WAIT_DATA: &str = "Sin datos";

/// Standby wait reported by the live API, or the no-data sentinel when
/// the source omits the standby queue or its wait-time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitTime {
    Minutes(u32),
    NoData,
}

impl WaitTime {
    /// Parses the day-file field form: a non-negative integer is a wait
    /// in minutes, anything else is the no-data sentinel. Never fails,
    /// so a hand-edited or truncated field degrades to `NoData`.
    pub fn parse_field(field: &str) -> Self {
        match field.trim().parse::<u32>() {
            Ok(minutes) => WaitTime::Minutes(minutes),
            Err(_) => WaitTime::NoData,
        }
    }

    pub fn minutes(&self) -> Option<u32> {
        match self {
            WaitTime::Minutes(minutes) => Some(*minutes),
            WaitTime::NoData => None,
        }
    }
}

impl fmt::Display for WaitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitTime::Minutes(minutes) => write!(f, "{minutes}"),
            WaitTime::NoData => f.write_str(NO_WAIT_DATA),
        }
    }
}

/// One attraction wait-time sample at a given local minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Local wall-clock minute in the park's timezone, `YYYY-MM-DD HH:MM`.
    pub timestamp: String,
    /// Always [`ENTITY_ATTRACTION`] for records produced by extraction.
    pub entity_type: String,
    /// Attraction display name, or [`UNKNOWN_NAME`].
    pub name: String,
    pub wait: WaitTime,
}

impl Observation {
    /// Builds an attraction observation, substituting the name sentinel
    /// when the source had none.
    pub fn attraction(timestamp: &str, name: Option<&str>, wait: WaitTime) -> Self {
        Self {
            timestamp: timestamp.to_owned(),
            entity_type: ENTITY_ATTRACTION.to_owned(),
            name: name.unwrap_or(UNKNOWN_NAME).to_owned(),
            wait,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_field_round_trip() {
        assert_eq!(WaitTime::parse_field("25"), WaitTime::Minutes(25));
        assert_eq!(WaitTime::Minutes(25).to_string(), "25");
        assert_eq!(WaitTime::parse_field(NO_WAIT_DATA), WaitTime::NoData);
        assert_eq!(WaitTime::NoData.to_string(), NO_WAIT_DATA);
    }

    #[test]
    fn test_invalid_wait_fields_degrade_to_no_data() {
        assert_eq!(WaitTime::parse_field(""), WaitTime::NoData);
        assert_eq!(WaitTime::parse_field("-5"), WaitTime::NoData);
        assert_eq!(WaitTime::parse_field("10.5"), WaitTime::NoData);
        assert_eq!(WaitTime::parse_field("soon"), WaitTime::NoData);
    }

    #[test]
    fn test_missing_name_uses_sentinel() {
        let obs = Observation::attraction("2026-08-08 10:15", None, WaitTime::Minutes(5));
        assert_eq!(obs.name, UNKNOWN_NAME);
        assert_eq!(obs.entity_type, ENTITY_ATTRACTION);
    }
}
