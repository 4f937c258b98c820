//! Command implementations.

pub mod callback;
pub mod config;
pub mod directory;
pub mod services;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory base URL
    pub url: Option<String>,

    /// Shared secret
    pub secret: Option<String>,

    /// Directory domain
    pub domain: String,

    /// DNS port (0 = 53)
    pub dns_port: u16,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Get the directory URL, returning an error if not set.
    pub fn require_url(&self) -> anyhow::Result<&str> {
        self.url.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Directory URL required.\n\n\
                 Set it with one of:\n  \
                 1. --url <URL>\n  \
                 2. SKYDNS_URL environment variable\n  \
                 3. skydnsctl config set url <URL>"
            )
        })
    }

    /// Create a directory client from the resolved settings.
    pub fn client(&self) -> anyhow::Result<skydns::SkydnsClient> {
        let url = self.require_url()?;
        Ok(skydns::SkydnsClient::new(
            url,
            self.secret.clone(),
            self.domain.as_str(),
            self.dns_port,
        )?)
    }
}
