//! Wall-clock access and time rendering
//!
//! Reads the current instant and renders it both as an ISO-8601 timestamp
//! and as an en-US long-form sentence fragment.

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// en-US long form: weekday, month day, year, 12-hour time, zone abbreviation
const HUMAN_FORMAT: &str = "%A, %B %-d, %Y at %I:%M:%S %p %Z";

/// One reading of the clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TimeSnapshot {
    /// Human-readable current time
    pub current_time: String,

    /// ISO 8601 timestamp
    pub timestamp: String,
}

impl TimeSnapshot {
    /// Render a fixed instant, using `zone` for the human-readable form
    pub fn at(instant: DateTime<Utc>, zone: Tz) -> Self {
        Self {
            current_time: instant.with_timezone(&zone).format(HUMAN_FORMAT).to_string(),
            timestamp: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Source of time snapshots
pub trait TimeProvider: Send + Sync {
    fn now(&self) -> TimeSnapshot;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    zone: Tz,
}

impl SystemClock {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl TimeProvider for SystemClock {
    fn now(&self) -> TimeSnapshot {
        TimeSnapshot::at(Utc::now(), self.zone)
    }
}
