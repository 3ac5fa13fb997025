//! Service Comprehensive Test Suite
//!
//! End-to-end behaviour of TimeMapService: point-in-time reads, tombstones,
//! the audit trail, failure semantics and concurrent access.
//!
//! ## Key Verification Points
//!
//! 1. Reads select by business time, never by insertion order
//! 2. Every successful operation leaves exactly one audit record, in call order
//! 3. Storage failures leave no trace; audit failures never undo the write
//! 4. Readers never observe a write without its audit record
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test service_comprehensive
//!
//! # Run the property tests only
//! cargo test --test service_comprehensive properties::
//! ```

use std::sync::Arc;
use std::time::Duration;

use timemap::prelude::*;
use timemap::{AuditAction, AuditRecord, AuditTrail, EventRecord, InMemoryEventLog, StorageError};

pub mod scenarios;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Base of every test timeline
pub const T0_SECS: i64 = 1_700_000_000;

/// `T0 + secs`
pub fn at(secs: i64) -> Timestamp {
    Timestamp::from_secs(T0_SECS + secs)
}

/// Store reading a manual clock parked at `T0`
pub fn create_store() -> (TimeMapService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(at(0)));
    let store = TimeMapService::with_clock(clock.clone());
    (store, clock)
}

/// Store with explicit capacities on both logs
pub fn create_bounded_store(events: usize, audit: usize) -> (TimeMapService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(at(0)));
    let store = TimeMapService::builder()
        .event_capacity(events)
        .audit_capacity(audit)
        .clock(clock.clone())
        .build()
        .expect("valid configuration");
    (store, clock)
}

pub fn alice() -> User {
    User::new("Alice")
}

pub fn bob() -> User {
    User::new("Bob")
}

/// Actions in the audit trail, in order
pub fn audit_actions<L: timemap::EventLog>(store: &TimeMapService<L>) -> Vec<AuditAction> {
    store.audit_trail().records().iter().map(|r| r.action).collect()
}

/// Move the clock forward one second and return the new time
pub fn tick(clock: &ManualClock) -> Timestamp {
    clock.advance(Duration::from_secs(1))
}
