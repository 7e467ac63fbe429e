//! Clock trait
//!
//! The only source of wall-clock time in the core. It stamps the audit
//! timestamp and never feeds scoring.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current instant as ISO-8601 with milliseconds, e.g.
    /// `2026-10-18T17:27:18.981Z`
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
