//! Service configuration
//!
//! Configuration can be assembled in code through
//! [`ServiceBuilder`](crate::ServiceBuilder) or loaded from TOML:
//!
//! ```toml
//! event_capacity = 1000000
//! audit_capacity = 5000000
//! ```
//!
//! Omitted fields mean "unbounded".

use serde::{Deserialize, Serialize};
use timemap_core::{Error, Result};

/// Limits applied to a service's two logs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Maximum number of event records; appends beyond it fail
    pub event_capacity: Option<usize>,
    /// Maximum number of audit records; appends beyond it fail
    pub audit_capacity: Option<usize>,
}

impl ServiceConfig {
    /// Unbounded configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ServiceConfig =
            toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject limits that would make every write fail
    pub fn validate(&self) -> Result<()> {
        if self.event_capacity == Some(0) {
            return Err(Error::Config("event_capacity must be positive".into()));
        }
        if self.audit_capacity == Some(0) {
            return Err(Error::Config("audit_capacity must be positive".into()));
        }
        Ok(())
    }
}
