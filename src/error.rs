//! Error types for the Spacelift API client.
//!
//! [`ConfigError`] covers configuration and validation failures.
//! [`SpaceliftError`] is the error returned by every [`Spacelift`](crate::Spacelift)
//! operation, and wraps the lower layer errors into the four kinds a caller
//! needs to tell apart: configuration, authentication, GraphQL and transport.
//!
//! # Example
//!
//! ```rust
//! use spacelift::{KeyId, ConfigError};
//!
//! let result = KeyId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyKeyId)));
//! ```

use thiserror::Error;

use crate::auth::AuthError;
use crate::clients::graphql::{GraphqlError, GraphqlErrorMessage};
use crate::clients::HttpError;

/// Errors that can occur while building a [`SpaceliftConfig`](crate::SpaceliftConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Key id cannot be empty.
    #[error("Spacelift key id cannot be empty. Please provide a valid API key id.")]
    EmptyKeyId,

    /// Key secret cannot be empty.
    #[error("Spacelift key secret cannot be empty. Please provide a valid API key secret.")]
    EmptyKeySecret,

    /// Base URL is invalid.
    #[error("Invalid Spacelift base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://example.app.spacelift.io/graphql').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// One or more connection parameters were found neither in the explicit
    /// settings nor in the environment.
    #[error("Invalid spacelift params: {params:?}. Set them explicitly or via the SPACELIFT_BASE_URL, SPACELIFT_KEY_ID and SPACELIFT_KEY_SECRET environment variables.")]
    MissingParams {
        /// Names of every missing parameter, in declaration order.
        params: Vec<&'static str>,
    },
}

/// Error returned by [`Spacelift`](crate::Spacelift) operations.
///
/// # Example
///
/// ```rust,ignore
/// use spacelift::SpaceliftError;
///
/// match client.get_stacks(None).await {
///     Ok(stacks) => println!("{} stacks", stacks.len()),
///     Err(SpaceliftError::Graphql { errors }) => {
///         for e in errors {
///             eprintln!("server said: {}", e.message);
///         }
///     }
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum SpaceliftError {
    /// Connection parameters are missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API key could not be exchanged for a session token.
    #[error(transparent)]
    Authentication(#[from] AuthError),

    /// The server answered with a non-empty `errors` list.
    #[error("GraphQL error(s): {}", join_messages(.errors))]
    Graphql {
        /// Errors exactly as reported by the server.
        errors: Vec<GraphqlErrorMessage>,
    },

    /// Network failure or non-2xx HTTP status.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response decoded, but not into the expected shape.
    #[error("Unexpected response from Spacelift: {reason}")]
    UnexpectedResponse {
        /// What was wrong with the response.
        reason: String,
    },
}

impl SpaceliftError {
    /// Returns the server-provided messages when this is a GraphQL error.
    #[must_use]
    pub fn graphql_messages(&self) -> Option<Vec<&str>> {
        match self {
            Self::Graphql { errors } => Some(errors.iter().map(|e| e.message.as_str()).collect()),
            _ => None,
        }
    }
}

impl From<GraphqlError> for SpaceliftError {
    fn from(error: GraphqlError) -> Self {
        match error {
            GraphqlError::Http(e) => Self::Transport(e),
            GraphqlError::Server { errors } => Self::Graphql { errors },
            GraphqlError::MissingData => Self::UnexpectedResponse {
                reason: "response carried neither data nor errors".to_string(),
            },
            GraphqlError::Decode(e) => Self::UnexpectedResponse {
                reason: e.to_string(),
            },
        }
    }
}

pub(crate) fn join_messages(errors: &[GraphqlErrorMessage]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigError>();
    assert_send_sync::<SpaceliftError>();
};
