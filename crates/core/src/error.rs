//! Error types for TimeMap
//!
//! Two backend error types describe what went wrong inside a log, and one
//! service-level [`Error`] tells the caller what that means for their
//! operation:
//!
//! | Error | Business effect | Audit record |
//! |-------|-----------------|--------------|
//! | [`Error::StorageWrite`] | did not happen | not written |
//! | [`Error::AuditWrite`] | committed (if the operation writes) | pending, carried in the error |
//! | [`Error::Config`] | no operation ran | none |
//!
//! A key with no effective record is not an error; reads return
//! [`Lookup::NotFound`](crate::Lookup::NotFound).

use crate::records::AuditRecord;
use thiserror::Error;

/// Failure inside an event log backing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The log holds as many records as it is allowed to
    #[error("event log capacity exceeded: limit is {limit} records")]
    CapacityExceeded {
        /// Configured maximum number of records
        limit: usize,
    },

    /// The backing medium rejected the write
    #[error("event log backend failure: {0}")]
    Backend(String),
}

/// Failure inside an audit sink
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    /// The trail holds as many records as it is allowed to
    #[error("audit trail capacity exceeded: limit is {limit} records")]
    CapacityExceeded {
        /// Configured maximum number of records
        limit: usize,
    },

    /// The sink rejected the write
    #[error("audit sink failure: {0}")]
    Backend(String),
}

/// All TimeMap service errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The event log could not record the write; nothing happened
    #[error("storage write failed: {0}")]
    StorageWrite(#[from] StorageError),

    /// The business effect stands but its audit record was not written
    ///
    /// Retry the audit write alone with the pending record. Never re-apply the
    /// business write.
    #[error("audit write failed: {source}")]
    AuditWrite {
        /// Why the sink failed
        #[source]
        source: AuditError,
        /// The record that should have been appended
        pending: Box<AuditRecord>,
    },

    /// The service configuration is invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for TimeMap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for event log backends.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Result type for audit sinks.
pub type AuditResult<T> = std::result::Result<T, AuditError>;

impl Error {
    /// Build an audit failure carrying the record that was not written
    pub fn audit(source: AuditError, pending: AuditRecord) -> Self {
        Error::AuditWrite {
            source,
            pending: Box::new(pending),
        }
    }

    /// Canonical code for hosts translating errors to their own format
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::StorageWrite(_) => "StorageWriteFailure",
            Error::AuditWrite { .. } => "AuditWriteFailure",
            Error::Config(_) => "InvalidConfiguration",
        }
    }

    /// Check if the event log rejected the write.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Error::StorageWrite(_))
    }

    /// Check if the audit sink rejected the record.
    pub fn is_audit_failure(&self) -> bool {
        matches!(self, Error::AuditWrite { .. })
    }

    /// Check if the operation's business effect took place despite the error.
    ///
    /// True only for audit failures: those are reported after the event log
    /// append (or read) has completed.
    pub fn business_committed(&self) -> bool {
        self.is_audit_failure()
    }

    /// Check if retrying something may help.
    ///
    /// Only the audit write is retryable, via the pending record.
    pub fn is_retryable(&self) -> bool {
        self.is_audit_failure()
    }

    /// The audit record that was not written, if this is an audit failure
    pub fn pending_audit(&self) -> Option<&AuditRecord> {
        match self {
            Error::AuditWrite { pending, .. } => Some(pending),
            _ => None,
        }
    }

    /// Consume the error and take the pending audit record
    pub fn into_pending_audit(self) -> Option<AuditRecord> {
        match self {
            Error::AuditWrite { pending, .. } => Some(*pending),
            _ => None,
        }
    }
}
