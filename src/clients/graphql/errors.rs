//! GraphQL-specific error types for the Spacelift API client.
//!
//! Unlike a plain HTTP client, the GraphQL layer inspects the response
//! envelope: a non-empty top-level `errors` list is always an error, even
//! when the HTTP status is 200 and `data` is partially populated.

use crate::clients::graphql::GraphqlErrorMessage;
use crate::clients::HttpError;
use crate::error::join_messages;
use thiserror::Error;

/// Error type for GraphQL operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred (network error or non-2xx status without
    /// a GraphQL error list).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server returned a non-empty `errors` list.
    /// This is guaranteed to always have at least one error.
    #[error("GraphQL error(s): {}", join_messages(.errors))]
    Server {
        /// Errors exactly as reported by the server.
        errors: Vec<GraphqlErrorMessage>,
    },

    /// The response contained no errors, but null or absent data.
    #[error("Missing response data")]
    MissingData,

    /// The response body was not a GraphQL envelope.
    #[error("Malformed GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),
}
