//! Callback registration endpoints.

use crate::client::rejected;
use crate::SkydnsClient;
use reqwest::{Method, StatusCode};
use skydns_core::{Callback, Result, SkydnsError};

/// Callback registration endpoints
pub struct CallbacksApi<'a> {
    client: &'a SkydnsClient,
}

impl<'a> CallbacksApi<'a> {
    pub(crate) fn new(client: &'a SkydnsClient) -> Self {
        Self { client }
    }

    /// Attach a callback to the service registered under `uuid`.
    ///
    /// Fails with [`SkydnsError::ServiceNotFound`] if no such service exists.
    /// `uuid` is sent as a single percent-encoded path segment.
    pub async fn add(&self, uuid: &str, callback: &Callback) -> Result<()> {
        let url = self.client.record_url("/skydns/callbacks/", uuid)?;
        let body = SkydnsClient::encode(callback)?;
        let response = self.client.send(Method::PUT, &url, Some(body)).await?;

        match response.status() {
            StatusCode::CREATED => Ok(()),
            status @ StatusCode::NOT_FOUND => Err(rejected(
                &Method::PUT,
                &url,
                status,
                SkydnsError::ServiceNotFound,
            )),
            status => Err(rejected(
                &Method::PUT,
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
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn hook() -> Callback {
        Callback::new("web", "10.0.0.9", 9000).with_reply("reply-1")
    }

    #[tokio::test]
    async fn add_created() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/skydns/callbacks/1234"))
            .and(header("Authorization", "s3cret"))
            .and(body_json(&hook()))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = SkydnsClient::builder(server.uri())
            .secret("s3cret")
            .build()
            .unwrap();
        client.callbacks().add("1234", &hook()).await.unwrap();
    }

    #[tokio::test]
    async fn add_to_missing_service() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/skydns/callbacks/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = SkydnsClient::builder(server.uri()).build().unwrap();
        let err = client.callbacks().add("nope", &hook()).await.unwrap_err();
        assert!(matches!(err, SkydnsError::ServiceNotFound));
    }

    #[tokio::test]
    async fn add_conflict_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let client = SkydnsClient::builder(server.uri()).build().unwrap();
        let err = client.callbacks().add("1234", &hook()).await.unwrap_err();
        assert!(matches!(err, SkydnsError::InvalidResponse));
    }

    #[tokio::test]
    async fn add_server_error_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/skydns/callbacks/1234"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = SkydnsClient::builder(server.uri()).build().unwrap();
        let err = client.callbacks().add("1234", &hook()).await.unwrap_err();
        assert!(matches!(err, SkydnsError::InvalidResponse));
    }

    #[tokio::test]
    async fn add_encodes_uuid() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/skydns/callbacks/a%2Fb"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = SkydnsClient::builder(server.uri()).build().unwrap();
        client.callbacks().add("a/b", &hook()).await.unwrap();
    }
}
