//! REST client for the Conversa backend.
//!
//! All endpoints live under one base path (`/api/v1` by default). The wire
//! speaks snake_case; typed records are camelCase, so every request and
//! response body passes through [`crate::wire`] key normalization. Non-2xx
//! responses map to [`ApiError::Http`] without inspecting the body.

mod conversations;
mod people;

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::types::Config;
use crate::wire;

/// HTTP client for the backend REST API.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with a per-request timeout. Timeouts surface as
    /// [`ApiError::Network`], like any other transport failure.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::Network {
                operation: "initialize http client",
                source,
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Send a request and decode the JSON response into `T`, converting
    /// keys camelCase→snake_case outbound and snake_case→camelCase inbound.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        operation: &'static str,
    ) -> Result<T, ApiError> {
        let value = self.send(method, path, body, operation).await?;
        serde_json::from_value(wire::camel_case_keys(value))
            .map_err(|source| ApiError::Decode { operation, source })
    }

    /// Send a request where only the status matters (DELETE).
    pub(crate) async fn request_no_content(
        &self,
        method: Method,
        path: &str,
        operation: &'static str,
    ) -> Result<(), ApiError> {
        let resp = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                operation,
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    pub(crate) fn to_body(
        payload: &impl Serialize,
        operation: &'static str,
    ) -> Result<Value, ApiError> {
        serde_json::to_value(payload).map_err(|source| ApiError::Decode { operation, source })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        operation: &'static str,
    ) -> Result<Value, ApiError> {
        let mut req = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(body) = body {
            req = req.json(&wire::snake_case_keys(body));
        }

        let resp = req
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                operation,
                status: status.as_u16(),
            });
        }

        let text = resp
            .text()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;
        serde_json::from_str(&text).map_err(|source| ApiError::Decode { operation, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/api/v1/", Duration::from_secs(5))
            .unwrap();
        assert_eq!(client.base_url, "http://localhost:8000/api/v1");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_network_error() {
        // Nothing listens on port 1.
        let client = ApiClient::new("http://127.0.0.1:1/api/v1", Duration::from_secs(2)).unwrap();
        let err = client.list_people().await.unwrap_err();
        assert!(err.is_network(), "expected network error, got {err}");
    }
}
