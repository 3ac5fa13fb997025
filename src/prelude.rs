//! Convenient imports for TimeMap.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```ignore
//! use timemap::prelude::*;
//!
//! let store = TimeMapService::new();
//! store.set(&User::new("Alice"), "key", "value", None)?;
//! ```

// Main entry point
pub use crate::{ServiceBuilder, ServiceConfig, TimeMapService};

// Error handling
pub use crate::{Error, Result};

// Log contracts, so inspection methods resolve
pub use crate::{AuditFilter, AuditSink, EventLog};

// Core types
pub use crate::types::{Key, Lookup, SequenceId, StoredValue, Timestamp, User, Value};

// Time sources
pub use crate::types::{Clock, ManualClock, SystemClock};
