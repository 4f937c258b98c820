//! Service registration endpoints.

use crate::client::rejected;
use crate::SkydnsClient;
use reqwest::{Method, StatusCode};
use skydns_core::{Result, Service, SkydnsError, TtlUpdate};

const SERVICES: &str = "/skydns/services/";

/// Service registration endpoints
pub struct ServicesApi<'a> {
    client: &'a SkydnsClient,
}

impl<'a> ServicesApi<'a> {
    pub(crate) fn new(client: &'a SkydnsClient) -> Self {
        Self { client }
    }

    fn service_url(&self, uuid: &str) -> Result<String> {
        self.client.record_url(SERVICES, uuid)
    }

    /// Register a service under `uuid`.
    ///
    /// Registration is not idempotent: a second call with the same UUID
    /// fails with [`SkydnsError::ConflictingUuid`].
    pub async fn add(&self, uuid: &str, service: &Service) -> Result<()> {
        let url = self.service_url(uuid)?;
        let body = SkydnsClient::encode(service)?;
        let response = self.client.send(Method::PUT, &url, Some(body)).await?;

        match response.status() {
            StatusCode::CREATED => Ok(()),
            status @ StatusCode::CONFLICT => Err(rejected(
                &Method::PUT,
                &url,
                status,
                SkydnsError::ConflictingUuid,
            )),
            status => Err(rejected(
                &Method::PUT,
                &url,
                status,
                SkydnsError::InvalidResponse,
            )),
        }
    }

    /// Fetch the service registered under `uuid`
    pub async fn get(&self, uuid: &str) -> Result<Service> {
        let url = self.service_url(uuid)?;
        let response = self.client.send(Method::GET, &url, None).await?;

        match response.status() {
            StatusCode::OK => SkydnsClient::decode(response).await,
            status @ StatusCode::NOT_FOUND => Err(rejected(
                &Method::GET,
                &url,
                status,
                SkydnsError::ServiceNotFound,
            )),
            status => Err(rejected(
                &Method::GET,
                &url,
                status,
                SkydnsError::InvalidResponse,
            )),
        }
    }

    /// Remove the service registered under `uuid`
    pub async fn delete(&self, uuid: &str) -> Result<()> {
        let url = self.service_url(uuid)?;
        let response = self.client.send(Method::DELETE, &url, None).await?;
        mutation_status(&Method::DELETE, &url, response.status())
    }

    /// Refresh the time to live of the service registered under `uuid`
    pub async fn update_ttl(&self, uuid: &str, ttl: u32) -> Result<()> {
        let url = self.service_url(uuid)?;
        let body = SkydnsClient::encode(&TtlUpdate { ttl })?;
        let response = self.client.send(Method::PATCH, &url, Some(body)).await?;
        mutation_status(&Method::PATCH, &url, response.status())
    }

    /// List every registered service, in server order
    pub async fn list(&self) -> Result<Vec<Service>> {
        let url = self.client.url(SERVICES);
        let response = self.client.send(Method::GET, &url, None).await?;

        match response.status() {
            StatusCode::OK => {
                let services: Option<Vec<Service>> = SkydnsClient::decode(response).await?;
                Ok(services.unwrap_or_default())
            }
            status => Err(rejected(
                &Method::GET,
                &url,
                status,
                SkydnsError::InvalidResponse,
            )),
        }
    }
}

/// Status mapping shared by delete and TTL refresh
fn mutation_status(method: &Method, url: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::NOT_FOUND {
        Err(rejected(method, url, status, SkydnsError::ServiceNotFound))
    } else {
        Err(rejected(method, url, status, SkydnsError::InvalidResponse))
    }
}
