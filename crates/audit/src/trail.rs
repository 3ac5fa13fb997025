//! AuditTrail: append-only sink of who did what, to which key, with what result
//!
//! The trail is write-only from the store's point of view: no business query
//! ever consults it. Hosts may read it back for inspection or export.

use crate::filter::AuditFilter;
use parking_lot::Mutex;
use std::sync::Arc;
use timemap_core::{
    AuditAction, AuditError, AuditRecord, AuditResult, Clock, Key, StoredValue, SystemClock, User,
};

/// Contract for any audit sink
///
/// `append` receives records already stamped with their system time, so a
/// caller holding a record whose append failed can hand the same record back
/// later.
pub trait AuditSink: Send + Sync {
    /// Append a stamped record
    fn append(&self, record: AuditRecord) -> AuditResult<()>;

    /// Snapshot of every record in append order
    fn records(&self) -> Vec<AuditRecord>;

    /// Number of records appended
    fn len(&self) -> usize;

    /// Check if nothing has been appended
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory audit trail
///
/// # Thread Safety
///
/// Appends serialize on a `parking_lot::Mutex`; concurrent readers of the
/// service each get their own record, in the order their appends acquired the
/// lock.
#[derive(Debug)]
pub struct AuditTrail {
    records: Mutex<Vec<AuditRecord>>,
    capacity: Option<usize>,
    clock: Arc<dyn Clock>,
}

impl AuditTrail {
    /// Create an unbounded trail stamping with the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an unbounded trail stamping with `clock`
    ///
    /// The clock stamps records made through [`record`](Self::record). Records
    /// handed to [`AuditSink::append`], as a `TimeMapService` does, keep the
    /// stamp they arrive with.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            capacity: None,
            clock,
        }
    }

    /// Limit the number of records; appends beyond it fail
    pub fn with_capacity_limit(mut self, limit: usize) -> Self {
        self.capacity = Some(limit);
        self
    }

    /// Configured record limit, if any
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Stamp a record with the current system time and append it
    ///
    /// Returns the record that was appended.
    pub fn record(
        &self,
        user: &User,
        action: AuditAction,
        key: &Key,
        value: Option<StoredValue>,
    ) -> AuditResult<AuditRecord> {
        let record = AuditRecord::new(user.clone(), action, key.clone(), value, self.clock.now());
        self.append(record.clone())?;
        Ok(record)
    }

    /// Records matching `filter`, in append order
    pub fn query(&self, filter: &AuditFilter) -> Vec<AuditRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditSink for AuditTrail {
    fn append(&self, record: AuditRecord) -> AuditResult<()> {
        let mut records = self.records.lock();
        if let Some(limit) = self.capacity {
            if records.len() >= limit {
                return Err(AuditError::CapacityExceeded { limit });
            }
        }

        tracing::trace!(
            user = record.user.name(),
            action = record.action.as_str(),
            key = record.key.as_str(),
            "audit record appended"
        );
        records.push(record);
        Ok(())
    }

    fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().clone()
    }

    fn len(&self) -> usize {
        self.records.lock().len()
    }
}
