//! Main directory client implementation.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_DOMAIN};
use crate::transport::DnsTransport;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use skydns_core::{Result, SkydnsError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default time to wait for a DNS response
const DEFAULT_DNS_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle on one directory, over both its HTTP and DNS interfaces
#[derive(Clone)]
pub struct SkydnsClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    dns: DnsTransport,
    config: ClientConfig,
}

impl SkydnsClient {
    /// Create a client for the directory at `base_url`.
    ///
    /// A `dns_port` of 0 selects port 53. Fails with
    /// [`SkydnsError::NoAddress`] when `base_url` is empty.
    pub fn new(
        base_url: impl Into<String>,
        secret: Option<String>,
        domain: impl Into<String>,
        dns_port: u16,
    ) -> Result<Self> {
        let mut builder = SkydnsClientBuilder::new(base_url)
            .domain(domain)
            .dns_port(dns_port);
        if let Some(secret) = secret {
            builder = builder.secret(secret);
        }
        builder.build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> SkydnsClientBuilder {
        SkydnsClientBuilder::new(base_url)
    }

    /// The configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Access service registration endpoints
    #[must_use]
    pub fn services(&self) -> ServicesApi<'_> {
        ServicesApi::new(self)
    }

    /// Access callback endpoints
    #[must_use]
    pub fn callbacks(&self) -> CallbacksApi<'_> {
        CallbacksApi::new(self)
    }

    /// Access the aggregate region/environment endpoints
    #[must_use]
    pub fn directory(&self) -> DirectoryApi<'_> {
        DirectoryApi::new(self)
    }

    /// Access the DNS interface
    #[must_use]
    pub fn dns(&self) -> DnsApi<'_> {
        DnsApi::new(self)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.config.base_url(), path)
    }

    /// URL of the record `uuid` under `collection`, with the UUID
    /// percent-encoded as a single path segment
    pub(crate) fn record_url(&self, collection: &str, uuid: &str) -> Result<String> {
        if matches!(uuid, "" | "." | "..") {
            return Err(SkydnsError::InvalidUuid(uuid.to_string()));
        }

        let mut url = Url::parse(&self.url(collection))
            .map_err(|e| SkydnsError::InvalidAddress(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| SkydnsError::InvalidAddress(self.url(collection)))?
            .pop_if_empty()
            .push(uuid);
        Ok(url.into())
    }

    pub(crate) fn dns_transport(&self) -> &DnsTransport {
        &self.inner.dns
    }

    /// Encode a record as a JSON request body
    pub(crate) fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>> {
        serde_json::to_vec(body).map_err(SkydnsError::Json)
    }

    /// Build a request, attaching the shared secret when one is configured
    pub(crate) fn new_request(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> reqwest::RequestBuilder {
        let mut request = self.inner.http.request(method, url);

        if let Some(secret) = self.inner.config.secret() {
            request = request.header(AUTHORIZATION, secret.clone());
        }

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        request
    }

    /// Build and dispatch a request
    pub(crate) async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Response> {
        debug!(method = %method, url = %url, "HTTP request");

        self.new_request(method, url, body)
            .send()
            .await
            .map_err(|e| SkydnsError::Http(e.to_string()))
    }

    /// Decode a JSON response body
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response
            .bytes()
            .await
            .map_err(|e| SkydnsError::Http(e.to_string()))?;
        serde_json::from_slice(&body).map_err(SkydnsError::Json)
    }
}

/// Log a status the operation does not accept and hand back its error
pub(crate) fn rejected(
    method: &Method,
    url: &str,
    status: StatusCode,
    error: SkydnsError,
) -> SkydnsError {
    warn!(method = %method, url = %url, status = status.as_u16(), error = %error, "request rejected");
    error
}

/// Builder for configuring a [`SkydnsClient`]
pub struct SkydnsClientBuilder {
    base_url: String,
    secret: Option<String>,
    domain: String,
    dns_port: u16,
    timeout: Option<Duration>,
    dns_timeout: Duration,
    user_agent: String,
}

impl SkydnsClientBuilder {
    /// Create a new builder for the directory at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            secret: None,
            domain: DEFAULT_DOMAIN.to_string(),
            dns_port: 0,
            timeout: None,
            dns_timeout: DEFAULT_DNS_TIMEOUT,
            user_agent: format!("skydns-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the shared secret sent as the `Authorization` header
    #[must_use]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set the directory domain
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the DNS port (0 = 53)
    #[must_use]
    pub const fn dns_port(mut self, port: u16) -> Self {
        self.dns_port = port;
        self
    }

    /// Set an overall HTTP request timeout (none by default)
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set how long to wait for a DNS response
    #[must_use]
    pub const fn dns_timeout(mut self, timeout: Duration) -> Self {
        self.dns_timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client. No network I/O happens here.
    pub fn build(self) -> Result<SkydnsClient> {
        let config = ClientConfig::new(
            &self.base_url,
            self.secret.as_deref(),
            &self.domain,
            self.dns_port,
        )?;

        let mut http = HttpClient::builder().user_agent(&self.user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| SkydnsError::Config(format!("failed to build HTTP client: {e}")))?;

        let dns = DnsTransport::new(config.dns_address().to_string(), self.dns_timeout);

        Ok(SkydnsClient {
            inner: Arc::new(ClientInner { http, dns, config }),
        })
    }
}
