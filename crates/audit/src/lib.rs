//! Audit layer for TimeMap
//!
//! This crate implements the audit trail:
//! - [`AuditSink`]: the append-only contract any sink satisfies
//! - [`AuditTrail`]: Mutex-guarded in-process sink with clock stamping
//! - [`AuditFilter`]: record selection by user, action, key and time

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod trail;

pub use filter::AuditFilter;
pub use trail::{AuditSink, AuditTrail};
