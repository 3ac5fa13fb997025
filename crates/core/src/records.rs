//! Record types for the two append-only logs
//!
//! - [`EventRecord`]: a fact in the versioned event log
//! - [`AuditRecord`]: an observation in the audit trail
//!
//! Both are immutable once appended.

use crate::types::{Key, SequenceId, User};
use crate::value::StoredValue;
use crate::Timestamp;
use serde::{Deserialize, Serialize};

/// A fact in the event log
///
/// Each record includes:
/// - A sequence number assigned at append time (insertion order)
/// - The key it applies to
/// - A payload or a tombstone
/// - The business time at which the fact became true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Insertion-order position, never reused
    pub sequence: SequenceId,
    /// Key the fact applies to
    pub key: Key,
    /// Payload or tombstone
    pub value: StoredValue,
    /// When the fact became true
    pub business_time: Timestamp,
}

/// Kind of operation recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    /// A value was written
    Set,
    /// A value was read
    Get,
    /// A key was tombstoned
    Tombstone,
}

impl AuditAction {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Set => "set",
            AuditAction::Get => "get",
            AuditAction::Tombstone => "tombstone",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An observation in the audit trail
///
/// `value` is:
/// - for `Set`, the value written
/// - for `Get`, the value returned (`Some(Tombstone)` for a tombstoned key,
///   `None` when nothing was found)
/// - for `Tombstone`, always `None`
///
/// Audit records are derived data. Deleting or replaying them never affects
/// event log query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Who performed the operation
    pub user: User,
    /// What kind of operation it was
    pub action: AuditAction,
    /// Key the operation targeted
    pub key: Key,
    /// Value set or returned, if any
    pub value: Option<StoredValue>,
    /// Wall-clock time the record was produced
    pub system_time: Timestamp,
}

impl AuditRecord {
    /// Create an audit record
    pub fn new(
        user: User,
        action: AuditAction,
        key: Key,
        value: Option<StoredValue>,
        system_time: Timestamp,
    ) -> Self {
        Self {
            user,
            action,
            key,
            value,
            system_time,
        }
    }
}
