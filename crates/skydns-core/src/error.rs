use thiserror::Error;

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, SkydnsError>;

/// Errors that can occur when talking to the directory
#[derive(Error, Debug)]
pub enum SkydnsError {
    /// The client was constructed without a control-plane address
    #[error("no HTTP address specified")]
    NoAddress,

    /// The control-plane address could not be turned into a host
    #[error("invalid HTTP address: {0}")]
    InvalidAddress(String),

    /// A service UUID that cannot name a single record
    #[error("invalid service UUID: {0:?}")]
    InvalidUuid(String),

    /// The server answered with a status the operation does not expect
    #[error("invalid HTTP response")]
    InvalidResponse,

    /// The service (or the service a callback targets) does not exist
    #[error("service not found")]
    ServiceNotFound,

    /// A service with the same UUID is already registered
    #[error("conflicting UUID")]
    ConflictingUuid,

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// DNS transport failure or an unusable DNS response
    #[error("DNS exchange failed: {0}")]
    Dns(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The client could not be configured
    #[error("configuration error: {0}")]
    Config(String),
}

impl SkydnsError {
    /// Returns true for the payload-free protocol outcomes
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        matches!(
            self,
            Self::NoAddress | Self::InvalidResponse | Self::ServiceNotFound | Self::ConflictingUuid
        )
    }

    /// Returns true if the error came from the HTTP or DNS transport
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Dns(_))
    }

    /// Returns the HTTP status code implied by the error, if any
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ServiceNotFound => Some(404),
            Self::ConflictingUuid => Some(409),
            _ => None,
        }
    }
}
