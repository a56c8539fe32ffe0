//! Date wrapper
//!
//! A date holds a time value in milliseconds since the Unix epoch, NaN for an
//! invalid date.

use chrono::{DateTime, Utc};

/// A date object
#[derive(Debug)]
pub struct JsDate {
    time_value: f64,
}

impl JsDate {
    /// Create a date from a millisecond time value
    pub fn new(time_value: f64) -> Self {
        Self { time_value }
    }

    /// Create a date from a chrono timestamp
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::new(dt.timestamp_millis() as f64)
    }

    /// Milliseconds since the epoch
    pub fn time_value(&self) -> f64 {
        self.time_value
    }

    /// Check if the date holds a finite time value
    pub fn is_valid(&self) -> bool {
        self.time_value.is_finite()
    }

    /// Convert to a chrono timestamp, `None` for invalid or out-of-range dates
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        DateTime::from_timestamp_millis(self.time_value as i64)
    }
}
