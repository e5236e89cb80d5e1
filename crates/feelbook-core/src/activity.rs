use serde::{Deserialize, Serialize};

/// Start time carried by a bookable activity when the schedule entry does not
/// request an exact instant.
pub const DEFAULT_START_TIME: &str = "0";

/// A user-declared intent to book some activity on a given weekday.
///
/// `day` may be a weekday name or a number 1-7. Several entries may share the
/// same name/day/time with different `start_time` values (e.g. three
/// half-hour slots on the same court).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredActivity {
    pub name: String,
    /// "HH:MM" fragment matched against the remote start timestamp.
    pub time: String,
    pub day: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

/// One activity instance from the remote catalog, flattened from the wire
/// envelope. Fetched fresh per run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteActivity {
    pub type_name: String,
    pub id: String,
    pub start: String,
}

/// The result of matching a desired activity against the remote catalog:
/// the concrete thing that gets a booking request submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookableActivity {
    pub url: String,
    pub name: String,
    pub start: String,
    pub start_time: String,
}

impl BookableActivity {
    pub fn new(url: String, name: String, start: String) -> Self {
        Self {
            url,
            name,
            start,
            start_time: DEFAULT_START_TIME.to_string(),
        }
    }

    pub fn with_start_time(url: String, name: String, start: String, start_time: String) -> Self {
        Self {
            url,
            name,
            start,
            start_time,
        }
    }
}

impl std::fmt::Display for BookableActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.name, self.start, self.start_time, self.url
        )
    }
}
