//! HTTP and GraphQL client layers for Spacelift API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: posts JSON to the single GraphQL endpoint
//! - [`HttpResponse`]: a parsed response from the endpoint
//! - [`HttpError`]: network failures and non-2xx responses
//! - [`graphql::GraphqlClient`]: decodes the GraphQL `data`/`errors` envelope
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//!
//! # Retry Behavior
//!
//! None. Every request is sent exactly once and any failure is returned to
//! the caller unchanged.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlErrorMessage};
