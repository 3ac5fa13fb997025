//! Public types for the TimeMap API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Values and read outcomes
pub use timemap_core::Value;
pub use timemap_core::StoredValue;
pub use timemap_core::Lookup;

// Identifiers
pub use timemap_core::Key;
pub use timemap_core::User;
pub use timemap_core::SequenceId;
pub use timemap_core::StoreId;

// Time
pub use timemap_core::Timestamp;
pub use timemap_core::{Clock, ManualClock, SystemClock};

// Records of the two logs
pub use timemap_core::{AuditAction, AuditRecord, EventRecord};

// Failure detail
pub use timemap_core::{AuditError, StorageError};
