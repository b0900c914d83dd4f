//! Park descriptor configuration.
//!
//! Each monitored park is identified by name and carries its live-data
//! endpoint, operating window, and local timezone. The default table is
//! the Orlando deployment this service was built for.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;
use crate::ConfigError;

/// One monitored park.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ParkConfig {
    /// Unique park name; also the day-file name prefix.
    #[validate(custom(function = validation::validate_park_name))]
    pub name: String,

    /// Live-status endpoint for the park entity.
    #[validate(url)]
    pub url: String,

    /// First hour of the operating window (local time).
    #[validate(range(min = 0, max = 23))]
    pub start_hour: u8,

    /// First hour past the operating window (local time). May be lower
    /// than `start_hour` for windows that wrap past midnight.
    #[validate(range(min = 0, max = 23))]
    pub end_hour: u8,

    /// IANA timezone the window hours are expressed in.
    #[serde(default = "default_timezone")]
    #[validate(custom(function = validation::validate_timezone))]
    pub timezone: String,
}

fn default_timezone() -> String {
    "America/New_York".into()
}

impl ParkConfig {
    /// The park's timezone as a concrete zone. Validation accepts only
    /// parseable zones, so after a successful load this cannot fail.
    pub fn parsed_timezone(&self) -> Result<chrono_tz::Tz, ConfigError> {
        self.timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(self.timezone.clone()))
    }
}

/// The deployment this service was written for: the seven Orlando parks,
/// with the operating windows used by the on-site team.
pub fn default_parks() -> Vec<ParkConfig> {
    const ANIMAL_KINGDOM_RESORT: &str =
        "https://api.themeparks.wiki/v1/entity/89db5d43-c434-4097-b71f-f6869f495a22/live";
    const EPCOT_RESORT: &str =
        "https://api.themeparks.wiki/v1/entity/e957da41-3552-4cf6-b636-5babc5cbc4e5/live";

    let park = |name: &str, url: &str, start_hour: u8, end_hour: u8| ParkConfig {
        name: name.into(),
        url: url.into(),
        start_hour,
        end_hour,
        timezone: default_timezone(),
    };

    vec![
        park("AnimalKingdom", ANIMAL_KINGDOM_RESORT, 8, 18),
        park("EPCOT", EPCOT_RESORT, 9, 21),
        park("HollywoodStudios", EPCOT_RESORT, 9, 21),
        park("MagicKingdom", EPCOT_RESORT, 9, 22),
        park("UniversalStudios", ANIMAL_KINGDOM_RESORT, 9, 21),
        park("IslandAdventure", ANIMAL_KINGDOM_RESORT, 9, 22),
        park("EpicUniverse", ANIMAL_KINGDOM_RESORT, 9, 22),
    ]
}
