//! Observation extraction from live payloads.
//!
//! Only currently-operating attractions are kept; everything else in the
//! document (shows, restaurants, closed rides) is discarded. Missing
//! fields inside a kept entry degrade to sentinels, never to a dropped
//! observation or a failed tick.

use serde_json::Value;

use parkvakt_core::observation::{Observation, WaitTime, ENTITY_ATTRACTION};

use crate::LiveResponse;

const STATUS_OPERATING: &str = "OPERATING";

/// Extracts one observation per operating attraction, stamped with the
/// park-local minute the poll ran at. Zero operating attractions yields
/// an empty vector, which is a valid outcome distinct from a fetch error.
pub fn extract_observations(response: &LiveResponse, timestamp: &str) -> Vec<Observation> {
    response
        .live_data
        .iter()
        .filter_map(|entry| extract_one(entry, timestamp))
        .collect()
}

fn extract_one(entry: &Value, timestamp: &str) -> Option<Observation> {
    if entry.get("entityType").and_then(Value::as_str) != Some(ENTITY_ATTRACTION) {
        return None;
    }
    if entry.get("status").and_then(Value::as_str) != Some(STATUS_OPERATING) {
        return None;
    }

    let name = entry.get("name").and_then(Value::as_str);
    let wait = entry
        .get("queue")
        .and_then(|queue| queue.get("STANDBY"))
        .and_then(|standby| standby.get("waitTime"))
        .and_then(Value::as_u64)
        .and_then(|minutes| u32::try_from(minutes).ok())
        .map_or(WaitTime::NoData, WaitTime::Minutes);

    Some(Observation::attraction(timestamp, name, wait))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkvakt_core::observation::UNKNOWN_NAME;
    use serde_json::json;

    const TS: &str = "2026-08-08 10:15";

    fn response(entries: Vec<Value>) -> LiveResponse {
        LiveResponse { live_data: entries }
    }

    #[test]
    fn test_operating_attraction_is_extracted() {
        let response = response(vec![json!({
            "entityType": "ATTRACTION",
            "status": "OPERATING",
            "name": "Space Mountain",
            "queue": { "STANDBY": { "waitTime": 25 } },
        })]);

        let observations = extract_observations(&response, TS);
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].name, "Space Mountain");
        assert_eq!(observations[0].wait, WaitTime::Minutes(25));
        assert_eq!(observations[0].timestamp, TS);
    }

    #[test]
    fn test_non_attractions_and_closed_rides_are_skipped() {
        let response = response(vec![
            json!({ "entityType": "SHOW", "status": "OPERATING", "name": "Parade" }),
            json!({ "entityType": "ATTRACTION", "status": "DOWN", "name": "Everest" }),
            json!({ "entityType": "ATTRACTION", "status": "REFURBISHMENT" }),
            json!({ "status": "OPERATING" }),
        ]);

        assert!(extract_observations(&response, TS).is_empty());
    }

    #[test]
    fn test_missing_name_becomes_sentinel() {
        let response = response(vec![json!({
            "entityType": "ATTRACTION",
            "status": "OPERATING",
            "queue": { "STANDBY": { "waitTime": 10 } },
        })]);

        let observations = extract_observations(&response, TS);
        assert_eq!(observations[0].name, UNKNOWN_NAME);
    }

    #[test]
    fn test_absent_or_invalid_standby_wait_becomes_no_data() {
        let no_queue = json!({
            "entityType": "ATTRACTION",
            "status": "OPERATING",
            "name": "A",
        });
        let no_standby = json!({
            "entityType": "ATTRACTION",
            "status": "OPERATING",
            "name": "B",
            "queue": { "SINGLE_RIDER": { "waitTime": 5 } },
        });
        let null_wait = json!({
            "entityType": "ATTRACTION",
            "status": "OPERATING",
            "name": "C",
            "queue": { "STANDBY": { "waitTime": null } },
        });
        let negative_wait = json!({
            "entityType": "ATTRACTION",
            "status": "OPERATING",
            "name": "D",
            "queue": { "STANDBY": { "waitTime": -3 } },
        });

        let observations = extract_observations(
            &response(vec![no_queue, no_standby, null_wait, negative_wait]),
            TS,
        );
        assert_eq!(observations.len(), 4);
        for obs in observations {
            assert_eq!(obs.wait, WaitTime::NoData, "{}", obs.name);
        }
    }

    #[test]
    fn test_empty_live_data_is_valid() {
        assert!(extract_observations(&response(vec![]), TS).is_empty());
        assert!(extract_observations(&LiveResponse::default(), TS).is_empty());
    }
}
