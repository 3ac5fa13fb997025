//! # TimeMap
//!
//! Embedded time-travel key-value store with an audit trail.
//!
//! Every write lands in an append-only event log tagged with a business
//! timestamp, so any key can be read as of any past moment. Every operation,
//! reads included, is recorded in an audit trail stamped with system time.
//!
//! ## Quick Start
//!
//! ```ignore
//! use timemap::prelude::*;
//!
//! let store = TimeMapService::new();
//! let alice = User::new("Alice");
//!
//! // Writes may be back-dated or post-dated
//! store.set(&alice, "price", 100, Some(Timestamp::from_secs(0)))?;
//! store.set(&alice, "price", 120, Some(Timestamp::from_secs(60)))?;
//!
//! // Point-in-time reads
//! assert_eq!(store.get(&alice, "price", Timestamp::from_secs(30))?, Lookup::Value(Value::Int(100)));
//!
//! // Logical deletion
//! store.tombstone(&alice, "price")?;
//! ```
//!
//! ## Outcomes
//!
//! A read returns a [`Lookup`]:
//!
//! 1. **Value** - the effective record carries a payload
//! 2. **Tombstone** - the effective record is a deletion marker
//! 3. **NotFound** - nothing was effective at that moment (not an error)
//!
//! ## Failures
//!
//! - [`Error::StorageWrite`] - nothing happened, nothing was audited
//! - [`Error::AuditWrite`] - the operation happened; replay the carried record
//!   with [`TimeMapService::replay_audit`]

#![warn(missing_docs)]

mod types;

pub mod prelude;

// Re-export main entry points
pub use timemap_engine::{ServiceBuilder, ServiceConfig, TimeMapService};
pub use timemap_core::{Error, Result};

// Re-export the log layers for custom backings and inspection
pub use timemap_audit::{AuditFilter, AuditSink, AuditTrail};
pub use timemap_storage::{select_effective, EventLog, InMemoryEventLog};

// Re-export types
pub use types::*;
