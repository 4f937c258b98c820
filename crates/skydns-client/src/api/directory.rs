//! Aggregate region and environment endpoints.

use crate::client::rejected;
use crate::SkydnsClient;
use reqwest::{Method, StatusCode};
use skydns_core::{NameCount, Result, SkydnsError};

/// Aggregate region and environment endpoints
pub struct DirectoryApi<'a> {
    client: &'a SkydnsClient,
}

impl<'a> DirectoryApi<'a> {
    pub(crate) fn new(client: &'a SkydnsClient) -> Self {
        Self { client }
    }

    /// Number of registered services per region
    pub async fn regions(&self) -> Result<NameCount> {
        self.name_count("/skydns/regions/").await
    }

    /// Number of registered services per environment
    pub async fn environments(&self) -> Result<NameCount> {
        self.name_count("/skydns/environments/").await
    }

    async fn name_count(&self, path: &str) -> Result<NameCount> {
        let url = self.client.url(path);
        let response = self.client.send(Method::GET, &url, None).await?;

        match response.status() {
            StatusCode::OK => {
                let counts: Option<NameCount> = SkydnsClient::decode(response).await?;
                Ok(counts.unwrap_or_default())
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn regions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/skydns/regions/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "east": 3, "west": 1 })))
            .mount(&server)
            .await;

        let client = SkydnsClient::builder(server.uri()).build().unwrap();
        let regions = client.directory().regions().await.unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions["east"], 3);
        assert_eq!(regions["west"], 1);
    }

    #[tokio::test]
    async fn environments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/skydns/environments/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "production": 7 })))
            .mount(&server)
            .await;

        let client = SkydnsClient::builder(server.uri()).build().unwrap();
        let environments = client.directory().environments().await.unwrap();
        assert_eq!(environments.get("production"), Some(&7));
    }

    #[tokio::test]
    async fn null_body_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let client = SkydnsClient::builder(server.uri()).build().unwrap();
        assert!(client.directory().regions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn error_status_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = SkydnsClient::builder(server.uri()).build().unwrap();
        let err = client.directory().environments().await.unwrap_err();
        assert!(matches!(err, SkydnsError::InvalidResponse));
    }

    #[tokio::test]
    async fn malformed_counts_are_decode_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "east": "many" })))
            .mount(&server)
            .await;

        let client = SkydnsClient::builder(server.uri()).build().unwrap();
        let err = client.directory().regions().await.unwrap_err();
        assert!(matches!(err, SkydnsError::Json(_)));
    }
}
