//! Storage layer for TimeMap
//!
//! This crate implements the versioned event log:
//! - [`EventLog`]: the append-only contract any backing satisfies
//! - [`InMemoryEventLog`]: RwLock-guarded in-process backing
//! - [`select_effective`]: the shared point-in-time selection rule

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod event_log;
pub mod selection;

pub use event_log::{EventLog, InMemoryEventLog};
pub use selection::{effectiveness, select_effective};
