//! Authentication error types for the Spacelift API client.
//!
//! # Error Types
//!
//! - [`AuthError::InvalidKeyId`]: the server did not recognise the key pair
//! - [`AuthError::Rejected`]: the exchange mutation returned GraphQL errors
//! - [`AuthError::Http`]: transport failure during the exchange
//! - [`AuthError::MalformedResponse`]: the exchange answered with an unexpected shape
//!
//! # Example
//!
//! ```rust
//! use spacelift::auth::AuthError;
//!
//! let error = AuthError::InvalidKeyId { key_id: "01HXYZ".to_string() };
//! assert_eq!(error.to_string(), "Invalid spacelift keyId: 01HXYZ");
//! ```

use crate::clients::graphql::GraphqlErrorMessage;
use crate::clients::HttpError;
use crate::error::join_messages;
use thiserror::Error;

/// Errors that can occur while exchanging an API key for a session token.
///
/// No partial state survives any of these: the client stays unauthenticated.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The exchange succeeded at the GraphQL level but returned no user,
    /// meaning the key id/secret pair was not accepted.
    #[error("Invalid spacelift keyId: {key_id}")]
    InvalidKeyId {
        /// The key id that was rejected.
        key_id: String,
    },

    /// The exchange mutation returned a non-empty `errors` list.
    #[error("Spacelift rejected the API key exchange: {}", join_messages(.errors))]
    Rejected {
        /// Errors exactly as reported by the server.
        errors: Vec<GraphqlErrorMessage>,
    },

    /// Network error or non-2xx response during the exchange.
    #[error("API key exchange failed: {0}")]
    Http(#[from] HttpError),

    /// The exchange returned data in an unexpected shape.
    #[error("Malformed API key exchange response: {reason}")]
    MalformedResponse {
        /// What was wrong with the response.
        reason: String,
    },
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
