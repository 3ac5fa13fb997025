//! TimeMapService: the facade over the event log and the audit trail
//!
//! Every public operation performs exactly one event log operation followed by
//! exactly one audit append describing its outcome.
//!
//! ## Operation Sequence
//!
//! ```text
//! set / tombstone                      get
//! 1. acquire gate (exclusive)          1. acquire gate (shared)
//! 2. EventLog::append                  2. EventLog::query
//!    fail -> StorageWrite, no audit    3. AuditSink::append(outcome)
//! 3. AuditSink::append                    fail -> AuditWrite
//!    fail -> AuditWrite, write stands  4. return Lookup
//! 4. return SequenceId
//! ```
//!
//! The gate makes each write and its audit record one unit as seen by readers:
//! a `get` observes all of a write or none of it, and its own audit record is
//! appended after the audit record of every write it can observe.

use crate::config::ServiceConfig;
use parking_lot::RwLock;
use std::sync::Arc;
use timemap_audit::{AuditSink, AuditTrail};
use timemap_core::{
    AuditAction, AuditRecord, Clock, Error, Key, Lookup, Result, SequenceId, StoreId, StoredValue,
    SystemClock, Timestamp, User, Value,
};
use timemap_storage::{EventLog, InMemoryEventLog};

/// Time-travel key-value store with an audit trail
///
/// Create with [`TimeMapService::new`] or [`TimeMapService::builder`]. Each
/// instance exclusively owns its event log and audit trail; share an instance
/// across threads with `Arc`.
///
/// # Example
///
/// ```ignore
/// use timemap::prelude::*;
///
/// let store = TimeMapService::new();
/// let alice = User::new("Alice");
///
/// store.set(&alice, "k", 1, Some(t0))?;
/// assert_eq!(store.get(&alice, "k", t0)?, Lookup::Value(Value::Int(1)));
///
/// store.tombstone(&alice, "k")?;
/// assert!(store.get(&alice, "k", Timestamp::now())?.is_tombstone());
/// ```
pub struct TimeMapService<L = InMemoryEventLog, A = AuditTrail> {
    id: StoreId,
    events: L,
    audit: A,
    clock: Arc<dyn Clock>,
    /// Exclusive for write + audit pairs, shared for read + audit pairs
    gate: RwLock<()>,
}

impl TimeMapService {
    /// Create an unbounded store reading the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an unbounded store reading `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_backends(
            InMemoryEventLog::with_clock(Arc::clone(&clock)),
            AuditTrail::with_clock(Arc::clone(&clock)),
            clock,
        )
    }

    /// Create a builder for store configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = TimeMapService::builder()
    ///     .event_capacity(1_000_000)
    ///     .clock(Arc::new(ManualClock::new(t0)))
    ///     .build()?;
    /// ```
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::new()
    }
}

impl Default for TimeMapService {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: EventLog, A: AuditSink> TimeMapService<L, A> {
    /// Compose a store from any event log and audit sink
    ///
    /// `clock` is the store's only time source: it resolves defaulted business
    /// times before they reach the log and stamps every audit record before it
    /// reaches the sink. Clocks held by the backings are never consulted
    /// through the service.
    pub fn with_backends(events: L, audit: A, clock: Arc<dyn Clock>) -> Self {
        let id = StoreId::new();
        tracing::info!(store = %id, "time map store created");
        Self {
            id,
            events,
            audit,
            clock,
            gate: RwLock::new(()),
        }
    }

    /// This store's identity
    pub fn store_id(&self) -> StoreId {
        self.id
    }

    /// The event log, for inspection
    ///
    /// Reads made directly on the log are not audited.
    pub fn event_log(&self) -> &L {
        &self.events
    }

    /// The audit trail, for inspection
    pub fn audit_trail(&self) -> &A {
        &self.audit
    }

    /// The clock stamping this store's records
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Write `value` for `key` as of `business_time` (default: now)
    ///
    /// # Errors
    ///
    /// - [`Error::StorageWrite`]: nothing was written and nothing audited
    /// - [`Error::AuditWrite`]: the value IS written; only the audit record is
    ///   missing. Retry it with [`replay_audit`](Self::replay_audit), never
    ///   by calling `set` again.
    pub fn set(
        &self,
        user: &User,
        key: impl Into<Key>,
        value: impl Into<Value>,
        business_time: Option<Timestamp>,
    ) -> Result<SequenceId> {
        let key = key.into();
        let value = StoredValue::Payload(value.into());

        let _guard = self.gate.write();
        let sequence = self.append_event(user, &key, value.clone(), business_time)?;
        self.write_audit(user, AuditAction::Set, key, Some(value))?;
        Ok(sequence)
    }

    /// Mark `key` as cleared from now on
    ///
    /// Same as `set` with a tombstone at the current time, except the audit
    /// record carries no value. Errors as for [`set`](Self::set).
    pub fn tombstone(&self, user: &User, key: impl Into<Key>) -> Result<SequenceId> {
        let key = key.into();

        let _guard = self.gate.write();
        let sequence = self.append_event(user, &key, StoredValue::Tombstone, None)?;
        self.write_audit(user, AuditAction::Tombstone, key, None)?;
        Ok(sequence)
    }

    /// The value of `key` as of `as_of`
    ///
    /// The outcome, including [`Lookup::NotFound`], is what gets audited.
    ///
    /// # Errors
    ///
    /// - [`Error::AuditWrite`]: the read happened but was not audited; the
    ///   pending record's `value` holds the outcome.
    pub fn get(&self, user: &User, key: impl Into<Key>, as_of: Timestamp) -> Result<Lookup> {
        let key = key.into();

        let _guard = self.gate.read();
        let lookup = Lookup::from(self.events.query(&key, as_of).map(|r| r.value));
        tracing::debug!(
            store = %self.id,
            user = user.name(),
            key = key.as_str(),
            %as_of,
            outcome = outcome_name(&lookup),
            "get"
        );
        self.write_audit(user, AuditAction::Get, key, lookup.to_stored())?;
        Ok(lookup)
    }

    /// Append an audit record whose original append failed
    ///
    /// Only the audit trail is touched; the business operation is not
    /// repeated. The record keeps its original system time.
    pub fn replay_audit(&self, record: AuditRecord) -> Result<()> {
        let _guard = self.gate.write();
        match self.audit.append(record.clone()) {
            Ok(()) => {
                tracing::info!(
                    store = %self.id,
                    user = record.user.name(),
                    action = record.action.as_str(),
                    key = record.key.as_str(),
                    "pending audit record replayed"
                );
                Ok(())
            }
            Err(e) => Err(Error::audit(e, record)),
        }
    }

    fn append_event(
        &self,
        user: &User,
        key: &Key,
        value: StoredValue,
        business_time: Option<Timestamp>,
    ) -> Result<SequenceId> {
        let business_time = business_time.unwrap_or_else(|| self.clock.now());
        match self.events.append(key.clone(), value, Some(business_time)) {
            Ok(sequence) => {
                tracing::debug!(
                    store = %self.id,
                    user = user.name(),
                    key = key.as_str(),
                    sequence = sequence.as_u64(),
                    %business_time,
                    "event committed"
                );
                Ok(sequence)
            }
            Err(e) => {
                tracing::warn!(
                    store = %self.id,
                    user = user.name(),
                    key = key.as_str(),
                    error = %e,
                    "event log rejected write; nothing committed"
                );
                Err(Error::StorageWrite(e))
            }
        }
    }

    fn write_audit(
        &self,
        user: &User,
        action: AuditAction,
        key: Key,
        value: Option<StoredValue>,
    ) -> Result<()> {
        let record = AuditRecord::new(user.clone(), action, key, value, self.clock.now());
        if let Err(e) = self.audit.append(record.clone()) {
            // Business effect stands; the caller owns the retry
            tracing::error!(
                store = %self.id,
                user = user.name(),
                action = action.as_str(),
                key = record.key.as_str(),
                error = %e,
                "audit append failed after operation completed"
            );
            return Err(Error::audit(e, record));
        }
        Ok(())
    }
}

fn outcome_name(lookup: &Lookup) -> &'static str {
    match lookup {
        Lookup::Value(_) => "value",
        Lookup::Tombstone => "tombstone",
        Lookup::NotFound => "not_found",
    }
}

impl<L: EventLog, A: AuditSink> std::fmt::Debug for TimeMapService<L, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeMapService")
            .field("id", &self.id)
            .field("events", &self.events.len())
            .field("audit_records", &self.audit.len())
            .finish()
    }
}

/// Builder for store configuration.
///
/// # Example
///
/// ```ignore
/// // From code
/// let store = TimeMapService::builder()
///     .event_capacity(10_000)
///     .audit_capacity(50_000)
///     .build()?;
///
/// // From a TOML document
/// let store = TimeMapService::builder()
///     .config(ServiceConfig::from_toml_str(text)?)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    config: ServiceConfig,
    clock: Option<Arc<dyn Clock>>,
}

impl ServiceBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all limits with `config`
    pub fn config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit the number of event records
    pub fn event_capacity(mut self, limit: usize) -> Self {
        self.config.event_capacity = Some(limit);
        self
    }

    /// Limit the number of audit records
    pub fn audit_capacity(mut self, limit: usize) -> Self {
        self.config.audit_capacity = Some(limit);
        self
    }

    /// Read time from `clock` instead of the system clock
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Validate the configuration and create the store.
    pub fn build(self) -> Result<TimeMapService> {
        self.config.validate()?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let mut events = InMemoryEventLog::with_clock(Arc::clone(&clock));
        if let Some(limit) = self.config.event_capacity {
            events = events.with_capacity_limit(limit);
        }
        let mut audit = AuditTrail::with_clock(Arc::clone(&clock));
        if let Some(limit) = self.config.audit_capacity {
            audit = audit.with_capacity_limit(limit);
        }

        tracing::debug!(
            event_capacity = ?self.config.event_capacity,
            audit_capacity = ?self.config.audit_capacity,
            "building time map store"
        );
        Ok(TimeMapService::with_backends(events, audit, clock))
    }
}
