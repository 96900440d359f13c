//! GraphQL layer of the Spacelift API client.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: posts a document with variables and decodes the
//!   `data`/`errors` envelope
//! - [`GraphqlError`]: error type for GraphQL operations
//! - [`GraphqlErrorMessage`]: one server-reported error, kept verbatim
//!
//! # Response Structure
//!
//! GraphQL responses contain these fields in the body:
//!
//! - `data`: The query result data
//! - `errors`: Any GraphQL errors (usually with HTTP 200)
//!
//! A non-empty `errors` list always fails the call; partial `data` is
//! discarded in that case.

mod client;
mod errors;
mod response;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use response::{ErrorLocation, GraphqlErrorMessage, GraphqlRequest, GraphqlResponse};
