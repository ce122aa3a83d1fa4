//! Timestamp formatting and the injected time source
//!
//! The renderer asks a [`TimeSource`] for the already-formatted current
//! time. [`SystemClock`] formats `chrono::Utc::now()` with a
//! [`TimestampFormat`]; [`FixedClock`] returns a constant for tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, e.g. `"%H:%M:%S%.3f"`
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::DateTime => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                use std::fmt::Write;
                // chrono reports invalid specifiers as a fmt::Error at write time
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
                }
            }
        }
    }
}

/// Provider of the current, formatted time
pub trait TimeSource: Send + Sync {
    fn now(&self) -> String;
}

/// Wall clock in UTC
#[derive(Debug, Clone, Default)]
pub struct SystemClock {
    format: TimestampFormat,
}

impl SystemClock {
    pub fn new(format: TimestampFormat) -> Self {
        Self { format }
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> String {
        self.format.format(&Utc::now())
    }
}

/// Always reports the same timestamp
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl TimeSource for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
