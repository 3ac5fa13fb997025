//! Payloads, tombstones and read outcomes
//!
//! - [`Value`]: what a caller writes under a key
//! - [`StoredValue`]: what an event record holds, a payload or a tombstone
//! - [`Lookup`]: the outcome of a point-in-time read
//!
//! Values are compared by representation: a record read back from the log is
//! always equal to the value that was written, floats included.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Caller payload
///
/// `Text("TOMBSTONED")` is an ordinary payload; clearing a key is expressed
/// with [`StoredValue::Tombstone`], so no payload can be mistaken for one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Boolean flag
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float, compared bit for bit
    Float(f64),
    /// UTF-8 text
    Text(String),
    /// Opaque bytes
    Bytes(Vec<u8>),
}

impl Value {
    /// The integer payload, if this is one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The text payload, if this is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            _ => false,
        }
    }
}

// Bitwise float comparison keeps this reflexive.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
            Value::Bytes(b) => b.hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

/// What an event record holds
///
/// A tombstone is a first-class stored value: it marks a key as cleared as of
/// a business time without removing any history. A later payload write
/// un-tombstones the key going forward.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoredValue {
    /// A caller-supplied payload
    Payload(Value),
    /// Explicit clear marker
    Tombstone,
}

impl StoredValue {
    /// Check if this is a tombstone
    pub fn is_tombstone(&self) -> bool {
        matches!(self, StoredValue::Tombstone)
    }

    /// Get the payload, if any
    pub fn payload(&self) -> Option<&Value> {
        match self {
            StoredValue::Payload(v) => Some(v),
            StoredValue::Tombstone => None,
        }
    }
}

impl From<Value> for StoredValue {
    fn from(v: Value) -> Self {
        StoredValue::Payload(v)
    }
}

/// Outcome of a point-in-time read
///
/// `NotFound` is a normal result, not an error: no record for the key was
/// effective at the requested time. It is distinct from both a payload and a
/// tombstone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lookup {
    /// The effective record holds a payload
    Value(Value),
    /// The effective record is a tombstone
    Tombstone,
    /// No record is effective at the requested time
    NotFound,
}

impl Lookup {
    /// Check if a payload was found
    pub fn is_value(&self) -> bool {
        matches!(self, Lookup::Value(_))
    }

    /// Check if the effective record is a tombstone
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Lookup::Tombstone)
    }

    /// Check if nothing was effective
    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound)
    }

    /// Get the payload, if any
    pub fn value(&self) -> Option<&Value> {
        match self {
            Lookup::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Consume and return the payload, if any
    pub fn into_value(self) -> Option<Value> {
        match self {
            Lookup::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The stored value this outcome was derived from
    ///
    /// `NotFound` has no stored value; this is what a Get audit record carries.
    pub fn to_stored(&self) -> Option<StoredValue> {
        match self {
            Lookup::Value(v) => Some(StoredValue::Payload(v.clone())),
            Lookup::Tombstone => Some(StoredValue::Tombstone),
            Lookup::NotFound => None,
        }
    }
}

impl From<Option<StoredValue>> for Lookup {
    fn from(stored: Option<StoredValue>) -> Self {
        match stored {
            Some(StoredValue::Payload(v)) => Lookup::Value(v),
            Some(StoredValue::Tombstone) => Lookup::Tombstone,
            None => Lookup::NotFound,
        }
    }
}
