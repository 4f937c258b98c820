use serde::{Deserialize, Serialize};

/// A notification hook attached to a registered service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Callback {
    /// ID of the callback
    #[serde(rename = "UUID", default)]
    pub uuid: String,

    /// Name of the watched service
    #[serde(default)]
    pub name: String,

    /// Version of the watched service
    #[serde(default)]
    pub version: String,

    /// Environment of the watched service
    #[serde(default)]
    pub environment: String,

    /// Region of the watched service
    #[serde(default)]
    pub region: String,

    /// Host to notify
    #[serde(default)]
    pub host: String,

    /// Reply identifier passed back on notification
    #[serde(default)]
    pub reply: String,

    /// Port to notify
    #[serde(default)]
    pub port: u16,
}

impl Callback {
    /// Create a callback that notifies `host:port` about changes to `name`
    #[must_use]
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Set the reply identifier
    #[must_use]
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = reply.into();
        self
    }
}
