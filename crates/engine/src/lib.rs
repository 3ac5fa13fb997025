//! Service layer for TimeMap
//!
//! This crate composes the event log and the audit trail into the public
//! facade:
//! - [`TimeMapService`]: set, get and tombstone, each audited
//! - [`ServiceBuilder`]: capacities and clock selection
//! - [`ServiceConfig`]: TOML-loadable limits
//!
//! # Concurrency
//!
//! Writes are exclusive over the event log and audit trail together; reads
//! run concurrently against a snapshot that excludes half-finished writes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod service;

pub use config::ServiceConfig;
pub use service::{ServiceBuilder, TimeMapService};
