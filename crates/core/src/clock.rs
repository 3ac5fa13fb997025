//! Clock access
//!
//! The store reads "now" through a [`Clock`] so a host can decide where time
//! comes from. [`SystemClock`] reads the wall clock; [`ManualClock`] only moves
//! when told to, which makes audit stamps and defaulted business times
//! reproducible.

use crate::Timestamp;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// Source of the current instant
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// The current instant
    fn now(&self) -> Timestamp;
}

/// Wall-clock time via chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock that only moves when set or advanced
#[derive(Debug, Default)]
pub struct ManualClock {
    micros: AtomicI64,
}

impl ManualClock {
    /// Create a clock reading `start`
    pub fn new(start: Timestamp) -> Self {
        Self {
            micros: AtomicI64::new(start.as_micros()),
        }
    }

    /// Jump to `to`
    pub fn set(&self, to: Timestamp) {
        self.micros.store(to.as_micros(), Ordering::SeqCst);
    }

    /// Move forward by `by` and return the new reading
    pub fn advance(&self, by: Duration) -> Timestamp {
        let delta = i64::try_from(by.as_micros()).unwrap_or(i64::MAX);
        let prev = self
            .micros
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |m| {
                Some(m.saturating_add(delta))
            })
            .unwrap_or_else(|m| m);
        Timestamp::from_micros(prev.saturating_add(delta))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_micros(self.micros.load(Ordering::SeqCst))
    }
}
