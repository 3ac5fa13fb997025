//! Core identifier types for the time-travel store
//!
//! This module defines the identifiers used throughout the system:
//! - [`StoreId`]: Unique identifier for a service instance
//! - [`Key`]: Opaque, comparable key under which facts are recorded
//! - [`User`]: Identity of the caller performing an operation
//! - [`SequenceId`]: Insertion-order position of an event record

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a store instance
///
/// Each `TimeMapService` owns exactly one event log and one audit trail; the
/// StoreId names that ownership unit in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(Uuid);

impl StoreId {
    /// Create a new random StoreId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use timemap_core::StoreId;
    ///
    /// let id1 = StoreId::new();
    /// let id2 = StoreId::new();
    /// assert_ne!(id1, id2);
    /// ```
    pub fn new() -> Self {
        StoreId(Uuid::new_v4())
    }

    /// Create StoreId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        StoreId(Uuid::from_bytes(bytes))
    }

    /// Get raw bytes representation
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for StoreId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key under which facts are recorded
///
/// Keys are opaque to the store: they are only compared for equality and
/// ordered for deterministic listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Key(String);

impl Key {
    /// Create a key
    pub fn new(key: impl Into<String>) -> Self {
        Key(key.into())
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key(s)
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a caller
///
/// Identity resolution belongs to the host; the store records the name it is
/// given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    name: String,
}

impl User {
    /// Create a user with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The user's name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Position of an event record in insertion order
///
/// Assigned at append time, strictly increasing from 0 and never reused.
/// Insertion order need not match business-time order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SequenceId(u64);

impl SequenceId {
    /// The first sequence assigned by an empty log
    pub const FIRST: SequenceId = SequenceId(0);

    /// Create from a raw sequence number
    pub fn new(seq: u64) -> Self {
        SequenceId(seq)
    }

    /// Get the raw sequence number
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The sequence that follows this one
    pub fn next(&self) -> SequenceId {
        SequenceId(self.0 + 1)
    }
}

impl std::fmt::Display for SequenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
