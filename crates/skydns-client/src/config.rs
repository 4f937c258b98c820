//! Client configuration types.

use reqwest::header::HeaderValue;
use skydns_core::{Result, SkydnsError};
use url::{Host, Url};

/// Port the directory's DNS interface listens on unless told otherwise
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Domain the directory serves by default
pub const DEFAULT_DOMAIN: &str = "skydns.local";

/// Immutable settings shared by every operation of a client handle
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    secret: Option<HeaderValue>,
    dns_address: String,
    domain: String,
}

impl ClientConfig {
    /// Derive a configuration from the construction parameters.
    ///
    /// `dns_port` of 0 selects [`DEFAULT_DNS_PORT`]. An empty `secret` is the
    /// same as none.
    pub fn new(base_url: &str, secret: Option<&str>, domain: &str, dns_port: u16) -> Result<Self> {
        if base_url.is_empty() {
            return Err(SkydnsError::NoAddress);
        }

        let port = if dns_port == 0 { DEFAULT_DNS_PORT } else { dns_port };
        let dns_address = dns_address(base_url, port)?;

        let secret = match secret.filter(|s| !s.is_empty()) {
            Some(secret) => {
                let mut value = HeaderValue::from_str(secret).map_err(|_| {
                    SkydnsError::Config("secret is not a valid header value".to_string())
                })?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret,
            dns_address,
            domain: domain_suffix(domain),
        })
    }

    /// Control-plane base address, without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `host:port` of the directory's DNS interface
    #[must_use]
    pub fn dns_address(&self) -> &str {
        &self.dns_address
    }

    /// Domain suffix, e.g. `.skydns.local.`
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns true if requests carry an `Authorization` header
    #[must_use]
    pub const fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    pub(crate) const fn secret(&self) -> Option<&HeaderValue> {
        self.secret.as_ref()
    }
}

/// Make `name` fully qualified by appending the root label if missing.
#[must_use]
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Normalize a directory domain into a suffix that can be appended to an
/// unqualified name.
fn domain_suffix(domain: &str) -> String {
    let domain = domain.trim_start_matches('.');
    if domain.is_empty() {
        return ".".to_string();
    }
    format!(".{}", fqdn(domain))
}

/// Pair the host of the control-plane URL with the DNS port.
fn dns_address(base_url: &str, port: u16) -> Result<String> {
    let url = Url::parse(base_url)
        .map_err(|e| SkydnsError::InvalidAddress(format!("{base_url}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SkydnsError::InvalidAddress(format!(
            "{base_url}: unsupported scheme {}",
            url.scheme()
        )));
    }

    let host = match url.host() {
        Some(Host::Ipv6(addr)) => format!("[{addr}]"),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Domain(name)) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(SkydnsError::InvalidAddress(format!("{base_url}: missing host")));
        }
    };

    Ok(format!("{host}:{port}"))
}
