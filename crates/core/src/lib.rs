//! Core types for TimeMap
//!
//! This crate defines the vocabulary shared by the event log, the audit trail
//! and the service facade:
//!
//! - [`Value`], [`StoredValue`], [`Lookup`]: payloads, tombstones, read outcomes
//! - [`Key`], [`User`], [`SequenceId`], [`StoreId`]: identifiers
//! - [`Timestamp`], [`Clock`]: business and system time
//! - [`EventRecord`], [`AuditRecord`]: the records of the two logs
//! - [`Error`], [`StorageError`], [`AuditError`]: the failure taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod error;
pub mod records;
pub mod timestamp;
pub mod types;
pub mod value;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{AuditError, AuditResult, Error, Result, StorageError, StorageResult};
pub use records::{AuditAction, AuditRecord, EventRecord};
pub use timestamp::Timestamp;
pub use types::{Key, SequenceId, StoreId, User};
pub use value::{Lookup, StoredValue, Value};
