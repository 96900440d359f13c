//! HTTP-specific error types for the Spacelift API client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the endpoint
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! No retries are attempted at this layer; every failure is returned as-is.

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// `message` holds the response body, or the serialized `errors`/`error`
/// members of it when the body is JSON.
#[derive(Debug, Error)]
#[error("{code} response from Spacelift: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Error message extracted from the response body.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use spacelift::clients::HttpError;
///
/// match http_client.post_json(&body, None).await {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => eprintln!("status {}", e.code),
///     Err(HttpError::Network(e)) => eprintln!("network: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error (DNS, refused connection, timeout, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(_) => None,
        }
    }
}
