//! Audit trail queries

use timemap_core::{AuditAction, AuditRecord, Key, Timestamp};

/// Criteria for selecting audit records
///
/// Every set criterion must match; an empty filter matches everything.
///
/// ```ignore
/// let bobs_reads = AuditFilter::new().user("Bob").action(AuditAction::Get);
/// let records = trail.query(&bobs_reads);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditFilter {
    user: Option<String>,
    action: Option<AuditAction>,
    key: Option<Key>,
    since: Option<Timestamp>,
}

impl AuditFilter {
    /// A filter matching every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Only records by the user with this name
    pub fn user(mut self, name: impl Into<String>) -> Self {
        self.user = Some(name.into());
        self
    }

    /// Only records of this action
    pub fn action(mut self, action: AuditAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Only records for this key
    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Only records produced at or after this system time
    pub fn since(mut self, since: Timestamp) -> Self {
        self.since = Some(since);
        self
    }

    /// Check a record against every set criterion
    pub fn matches(&self, record: &AuditRecord) -> bool {
        self.user.as_deref().map_or(true, |u| record.user.name() == u)
            && self.action.map_or(true, |a| record.action == a)
            && self.key.as_ref().map_or(true, |k| &record.key == k)
            && self.since.map_or(true, |t| record.system_time >= t)
    }
}
