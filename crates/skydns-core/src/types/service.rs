use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory entry describing one reachable service instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    /// Unique instance ID
    #[serde(rename = "UUID", default)]
    pub uuid: String,

    /// Service name (e.g., "web", "db")
    #[serde(default)]
    pub name: String,

    /// Service version
    #[serde(default)]
    pub version: String,

    /// Deployment environment (e.g., "production")
    #[serde(default)]
    pub environment: String,

    /// Region the instance runs in
    #[serde(default)]
    pub region: String,

    /// Host name or address
    #[serde(default)]
    pub host: String,

    /// Port the service listens on
    #[serde(default)]
    pub port: u16,

    /// Time to live in seconds
    #[serde(rename = "TTL", default)]
    pub ttl: u32,

    /// When the registration lapses unless refreshed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
}

impl Service {
    /// Create a service record for the given name and endpoint
    #[must_use]
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Set the UUID
    #[must_use]
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    /// Set the version
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the environment
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Set the region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the time to live in seconds
    #[must_use]
    pub const fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns true if the record carries an expiry at or before `now`
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|expires| expires <= now)
    }
}

/// Body of a TTL refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtlUpdate {
    /// New time to live in seconds
    #[serde(rename = "TTL")]
    pub ttl: u32,
}
