//! EventLog: append-only versioned store of `(key, value, business_time)` facts
//!
//! ## Design
//!
//! - Append-only: no update or delete; a tombstone is a new record.
//! - Sequence numbers are assigned under the write lock, so they are strictly
//!   increasing and never reused.
//! - Records live in one insertion-ordered `Vec`; a per-key FxHashMap of
//!   positions keeps point-in-time queries proportional to the key's history
//!   rather than the whole log.
//! - Readers take the shared side of a `parking_lot::RwLock`, so a record is
//!   observed either whole or not at all.

use crate::selection::select_effective;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use timemap_core::{
    Clock, EventRecord, Key, SequenceId, StorageError, StorageResult, StoredValue, SystemClock,
    Timestamp,
};

/// Contract for any event log backing
///
/// Implementations must be append-only and must resolve point-in-time queries
/// with [`select_effective`] semantics: greatest business time not after
/// `as_of`, ties to the smallest sequence.
pub trait EventLog: Send + Sync {
    /// Append a fact and return its sequence
    ///
    /// `business_time` defaults to the log's notion of "now". Fails only when
    /// the backing cannot record the append.
    fn append(
        &self,
        key: Key,
        value: StoredValue,
        business_time: Option<Timestamp>,
    ) -> StorageResult<SequenceId>;

    /// The record for `key` effective at `as_of`, or `None`
    fn query(&self, key: &Key, as_of: Timestamp) -> Option<EventRecord>;

    /// Every record for `key` in insertion order
    ///
    /// With `as_of`, only records whose business time is not after it.
    fn history(&self, key: &Key, as_of: Option<Timestamp>) -> Vec<EventRecord>;

    /// Snapshot of the whole log in insertion order
    fn records(&self) -> Vec<EventRecord>;

    /// Number of records appended
    fn len(&self) -> usize;

    /// Check if nothing has been appended
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutable state guarded by the log's lock
#[derive(Debug, Default)]
struct LogState {
    /// All records, insertion order
    records: Vec<EventRecord>,
    /// Positions in `records` per key, ascending
    by_key: FxHashMap<Key, Vec<usize>>,
    /// Next sequence to assign
    next_sequence: u64,
    /// Record limit, if any
    capacity: Option<usize>,
}

impl LogState {
    fn key_records<'a>(&'a self, key: &Key) -> impl Iterator<Item = &'a EventRecord> + 'a {
        self.by_key
            .get(key)
            .into_iter()
            .flat_map(move |positions| positions.iter().map(move |&i| &self.records[i]))
    }
}

/// In-memory event log
///
/// # Thread Safety
///
/// All operations take `&self`:
/// - `append()` holds the write lock while assigning the sequence and
///   publishing the record
/// - `query()`, `history()` and `records()` share the read lock
///
/// # Example
///
/// ```ignore
/// use timemap_storage::{EventLog, InMemoryEventLog};
///
/// let log = InMemoryEventLog::new();
/// let seq = log.append("k".into(), StoredValue::Payload(1.into()), Some(t0))?;
/// let effective = log.query(&"k".into(), t0);
/// ```
#[derive(Debug)]
pub struct InMemoryEventLog {
    state: RwLock<LogState>,
    clock: Arc<dyn Clock>,
}

impl InMemoryEventLog {
    /// Create an unbounded log reading the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an unbounded log reading `clock` for defaulted business times
    ///
    /// Only appends made directly on the log read it; a `TimeMapService`
    /// always supplies the business time itself.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(LogState::default()),
            clock,
        }
    }

    /// Limit the number of records; appends beyond it fail
    pub fn with_capacity_limit(mut self, limit: usize) -> Self {
        self.state.get_mut().capacity = Some(limit);
        self
    }

    /// Replace the record limit on a live log
    ///
    /// Lowering it below the current length rejects further appends but keeps
    /// every record.
    pub fn set_capacity_limit(&self, limit: Option<usize>) {
        self.state.write().capacity = limit;
    }

    /// Configured record limit, if any
    pub fn capacity(&self) -> Option<usize> {
        self.state.read().capacity
    }

    /// Number of distinct keys ever written
    pub fn key_count(&self) -> usize {
        self.state.read().by_key.len()
    }
}

impl Default for InMemoryEventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog for InMemoryEventLog {
    fn append(
        &self,
        key: Key,
        value: StoredValue,
        business_time: Option<Timestamp>,
    ) -> StorageResult<SequenceId> {
        let business_time = business_time.unwrap_or_else(|| self.clock.now());

        let mut state = self.state.write();
        if let Some(limit) = state.capacity {
            if state.records.len() >= limit {
                return Err(StorageError::CapacityExceeded { limit });
            }
        }

        let sequence = SequenceId::new(state.next_sequence);
        state.next_sequence += 1;

        let position = state.records.len();
        state.by_key.entry(key.clone()).or_default().push(position);
        state.records.push(EventRecord {
            sequence,
            key,
            value,
            business_time,
        });

        tracing::trace!(sequence = sequence.as_u64(), %business_time, "event appended");
        Ok(sequence)
    }

    fn query(&self, key: &Key, as_of: Timestamp) -> Option<EventRecord> {
        let state = self.state.read();
        select_effective(state.key_records(key), key, as_of).cloned()
    }

    fn history(&self, key: &Key, as_of: Option<Timestamp>) -> Vec<EventRecord> {
        let state = self.state.read();
        state
            .key_records(key)
            .filter(|r| as_of.map_or(true, |t| r.business_time <= t))
            .cloned()
            .collect()
    }

    fn records(&self) -> Vec<EventRecord> {
        self.state.read().records.clone()
    }

    fn len(&self) -> usize {
        self.state.read().records.len()
    }
}
