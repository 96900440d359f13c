//! HTTP client for Spacelift API communication.
//!
//! This module provides the [`HttpClient`] type, which posts JSON documents
//! to the configured GraphQL endpoint.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::SpaceliftConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the single Spacelift GraphQL endpoint.
///
/// The client handles:
/// - Default headers including User-Agent
/// - Bearer authorization when a token is supplied
/// - JSON body parsing, including non-JSON error bodies
///
/// It never retries; a failed request is reported once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the endpoint in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS backend initialization failure).
    pub fn new(config: &SpaceliftConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Spacelift API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.base_url().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the endpoint every request is posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Posts `body` as JSON to the endpoint.
    ///
    /// When `bearer` is given it is sent as `Authorization: Bearer <token>`.
    /// The response is returned whatever its status; see
    /// [`error_for_status`](Self::error_for_status) to turn non-2xx codes into
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request could not be sent or the
    /// body could not be read.
    pub async fn post_json<B>(&self, body: &B, bearer: Option<&str>) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(token) = bearer {
            req_builder = req_builder.bearer_auth(token);
        }

        let res = req_builder.json(body).send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        tracing::debug!(status = code, endpoint = %self.endpoint, "Spacelift responded");

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Converts a non-2xx response into [`HttpError::Response`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] when `response.is_ok()` is false.
    pub fn error_for_status(response: HttpResponse) -> Result<HttpResponse, HttpError> {
        if response.is_ok() {
            return Ok(response);
        }
        Err(HttpError::Response(HttpResponseError {
            code: response.code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn serialize_error(response: &HttpResponse) -> String {
        if let Some(raw) = response.body.get("raw_body").and_then(|v| v.as_str()) {
            return raw.to_string();
        }

        let mut error_body = serde_json::Map::new();
        for key in ["errors", "error", "message"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }
        if error_body.is_empty() {
            return response.body.to_string();
        }
        serde_json::Value::Object(error_body).to_string()
    }
}
