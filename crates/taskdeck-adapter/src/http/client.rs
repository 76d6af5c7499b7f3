/*
[INPUT]:  Base URL, timeouts and an optional bearer token
[OUTPUT]: WorkflowClient with shared request building and response decoding
[POS]:    HTTP layer - client core
[UPDATE]: When adding connection options or auth schemes
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::error::{Result, WorkflowError};

/// Default backend location for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:7000/v1.0";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the workflow backend.
///
/// All endpoint methods funnel through [`api_request`](Self::api_request)
/// and [`send_json`](Self::send_json), so auth headers and error mapping
/// live in one place.
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: Url,
    pub(crate) api_token: Option<String>,
}

impl WorkflowClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        if base_url.trim().is_empty() {
            return Err(WorkflowError::Config("base URL is empty".to_string()));
        }
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            api_token: None,
        })
    }

    pub fn set_api_token(&mut self, token: impl Into<String>) {
        self.api_token = Some(token.into());
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL, keeping any path prefix the
    /// base carries (`Url::join` would drop `/v1.0` for absolute paths).
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let mut raw = self.base_url.as_str().trim_end_matches('/').to_string();
        raw.push_str(endpoint);
        Ok(Url::parse(&raw)?)
    }

    /// Start a request against an API endpoint, attaching the bearer token
    /// when one is configured.
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        let mut builder = self.http_client.request(method, url);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// Send a request and decode the JSON body, mapping non-2xx answers to
    /// [`WorkflowError::Api`].
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "API request failed");
            return Err(Self::error_from_body(status, &body));
        }
        Ok(response.json::<T>().await?)
    }

    /// Pull the server's own message out of an error body when it has one.
    fn error_from_body(status: StatusCode, body: &str) -> WorkflowError {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            });
        WorkflowError::api_error(status.as_u16(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn client_creation_with_default_base_url() {
        let client = WorkflowClient::new().expect("client should build");
        assert_eq!(client.base_url().as_str(), "http://localhost:7000/v1.0");
        assert!(client.api_token().is_none());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let result = WorkflowClient::with_config_and_base_url(ClientConfig::default(), "  ");
        assert!(matches!(result, Err(WorkflowError::Config(_))));
    }

    #[test]
    fn endpoint_url_keeps_base_path_prefix() {
        let client = WorkflowClient::with_config_and_base_url(
            ClientConfig::default(),
            "https://workflow.example.org/v1.0",
        )
        .expect("client should build");

        let url = client
            .endpoint_url("/tasks/42/abc")
            .expect("url should parse");
        assert_eq!(
            url.as_str(),
            "https://workflow.example.org/v1.0/tasks/42/abc"
        );
    }

    #[test]
    fn set_api_token_stores_token() {
        let mut client = WorkflowClient::new().expect("client should build");
        client.set_api_token("secret");
        assert_eq!(client.api_token(), Some("secret"));
    }

    #[test]
    fn error_from_body_prefers_server_message() {
        let err = WorkflowClient::error_from_body(
            StatusCode::BAD_REQUEST,
            r#"{"error_code": "task_invalid", "message": "missing field"}"#,
        );
        assert_eq!(err.to_string(), "API error (status 400): missing field");
    }

    #[test]
    fn error_from_body_falls_back_to_raw_body_then_status() {
        let raw = WorkflowClient::error_from_body(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(raw.to_string(), "API error (status 502): upstream down");

        let empty = WorkflowClient::error_from_body(StatusCode::BAD_GATEWAY, "");
        assert_eq!(empty.to_string(), "API error (status 502): Bad Gateway");
    }
}
