use serde::{Deserialize, Serialize};

/// One SRV answer from the directory's DNS interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvRecord {
    /// Lower is preferred
    pub priority: u16,
    /// Relative weight among records of equal priority
    pub weight: u16,
    /// Service port
    pub port: u16,
    /// Fully-qualified target name
    pub target: String,
}
