use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;

use crate::forwarder::config::ForwarderConfig;
use crate::forwarder::error::{internal_error, network_error, ForwardResult};

/// Status line of a completed collection request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
}

/// HTTP capability used to deliver the payload.
///
/// Implementations send a single `POST` with `Content-Type: application/json` and report the
/// response status. Any failure to obtain a response is returned as a network error carrying the
/// failure message; no retries happen at this layer.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> ForwardResult<HttpResponse>;
}

/// Default transport backed by a `reqwest` client.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ForwarderConfig) -> ForwardResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| internal_error(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client })
    }

    /// Wraps an existing client, keeping its connection pool and settings.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> ForwardResult<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| network_error(err.without_url().to_string()))?;

        Ok(HttpResponse {
            status: response.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::start_mock_server;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test(flavor = "current_thread")]
    async fn posts_json_body_with_content_type() {
        let server = start_mock_server().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/mp/collect")
                    .header("content-type", "application/json")
                    .json_body(json!({ "client_id": "1.2" }));
                then.status(204);
            })
            .await;

        let transport = ReqwestTransport::new(&ForwarderConfig::new()).unwrap();
        let response = transport
            .post_json(&server.url("/mp/collect"), &json!({ "client_id": "1.2" }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response, HttpResponse { status: 204 });
    }

    #[tokio::test(flavor = "current_thread")]
    async fn non_success_status_is_reported_not_raised() {
        let server = start_mock_server().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/mp/collect");
                then.status(503);
            })
            .await;

        let transport = ReqwestTransport::new(&ForwarderConfig::new()).unwrap();
        let response = transport
            .post_json(&server.url("/mp/collect"), &json!({}))
            .await
            .unwrap();

        assert_eq!(response.status, 503);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn wraps_an_existing_client() {
        let server = start_mock_server().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/mp/collect");
                then.status(200);
            })
            .await;

        let transport = ReqwestTransport::from_client(Client::new());
        let response = transport
            .post_json(&server.url("/mp/collect"), &json!({}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn connection_errors_leave_the_url_out() {
        let transport = ReqwestTransport::new(&ForwarderConfig::new()).unwrap();
        let err = transport
            .post_json(
                "http://127.0.0.1:1/mp/collect?measurement_id=G-ABC&api_secret=TOPSECRET",
                &json!({}),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code_str(), "forwarder/network");
        assert!(!err.message().contains("api_secret="));
        assert!(!err.message().contains("TOPSECRET"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn malformed_url_is_a_network_error() {
        let transport = ReqwestTransport::new(&ForwarderConfig::new()).unwrap();
        let err = transport
            .post_json("not a url", &json!({}))
            .await
            .unwrap_err();

        assert_eq!(err.code_str(), "forwarder/network");
        assert!(!err.message().is_empty());
    }
}
