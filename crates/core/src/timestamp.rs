//! Timestamps
//!
//! A [`Timestamp`] is an instant with microsecond precision, stored as
//! microseconds since the Unix epoch. It serves both as business time (when a
//! fact became true) and as system time (when an audit record was produced).
//! Negative values are instants before the epoch, which backdated writes may
//! legitimately use.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::time::Duration;

/// Instant in microseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The Unix epoch
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Earliest representable instant
    pub const MIN: Timestamp = Timestamp(i64::MIN);

    /// Latest representable instant
    pub const MAX: Timestamp = Timestamp(i64::MAX);

    /// Current wall-clock time
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Create from microseconds since the epoch
    pub fn from_micros(micros: i64) -> Self {
        Timestamp(micros)
    }

    /// Create from milliseconds since the epoch
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis.saturating_mul(1_000))
    }

    /// Create from whole seconds since the epoch
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1_000_000))
    }

    /// Create from a chrono UTC datetime
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.timestamp_micros())
    }

    /// Microseconds since the epoch
    pub fn as_micros(&self) -> i64 {
        self.0
    }

    /// Milliseconds since the epoch (truncated toward negative infinity)
    pub fn as_millis(&self) -> i64 {
        self.0.div_euclid(1_000)
    }

    /// Convert to a chrono UTC datetime
    ///
    /// Returns `None` for instants outside chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_micros(self.0).single()
    }

    /// Add a duration, clamping at [`Timestamp::MAX`]
    pub fn saturating_add(self, d: Duration) -> Self {
        Timestamp(self.0.saturating_add(duration_micros(d)))
    }

    /// Subtract a duration, clamping at [`Timestamp::MIN`]
    pub fn saturating_sub(self, d: Duration) -> Self {
        Timestamp(self.0.saturating_sub(duration_micros(d)))
    }
}

fn duration_micros(d: Duration) -> i64 {
    i64::try_from(d.as_micros()).unwrap_or(i64::MAX)
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        self.saturating_add(rhs)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Timestamp;

    fn sub(self, rhs: Duration) -> Timestamp {
        self.saturating_sub(rhs)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)),
            None => write!(f, "{}us", self.0),
        }
    }
}
