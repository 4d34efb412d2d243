use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const DESTINATION_KEY: &str = "название пункта назначения";
pub const TRAIN_NUMBER_KEY: &str = "номер поезда";
pub const DEPARTURE_TIME_KEY: &str = "время отправления";

/// Zero-padded 24 hour clock, e.g. "07:45".
pub const DEPARTURE_TIME_PATTERN: &str = r"^\d{2}:\d{2}$";

static DEPARTURE_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEPARTURE_TIME_PATTERN).expect("static pattern compiles"));

/// Checks a departure time against the "HH:MM" format used on disk.
/// Only the shape is checked, so "99:99" passes.
pub fn is_departure_time(s: &str) -> bool {
    DEPARTURE_TIME_RE.is_match(s)
}

/// One departure as stored in a roster file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct TrainRecord {
    #[serde(rename = "название пункта назначения")]
    destination: String,
    #[serde(rename = "номер поезда")]
    train_number: String,
    #[serde(rename = "время отправления")]
    departure_time: String,
}

impl TrainRecord {
    pub fn new(
        destination: impl Into<String>,
        train_number: impl Into<String>,
        departure_time: impl Into<String>,
    ) -> Self {
        TrainRecord {
            destination: destination.into(),
            train_number: train_number.into(),
            departure_time: departure_time.into(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn train_number(&self) -> &str {
        &self.train_number
    }

    pub fn departure_time(&self) -> &str {
        &self.departure_time
    }

    /// Departure times compare as plain strings, which is only meaningful for "HH:MM".
    pub fn departs_at_or_after(&self, time: &str) -> bool {
        self.departure_time.as_str() >= time
    }
}
