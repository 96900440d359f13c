//! GraphQL client implementation for the Spacelift API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! documents against the configured endpoint.

use crate::clients::graphql::response::{GraphqlRequest, GraphqlResponse};
use crate::clients::graphql::{GraphqlError, GraphqlErrorMessage};
use crate::clients::{HttpClient, HttpResponse};
use crate::config::SpaceliftConfig;

/// GraphQL client for the Spacelift endpoint.
///
/// This type knows nothing about authentication state: callers pass the
/// bearer token (if any) with every call. Token management lives in
/// [`Spacelift`](crate::Spacelift).
///
/// # Example
///
/// ```rust,ignore
/// use spacelift::clients::graphql::GraphqlClient;
/// use serde_json::json;
///
/// let client = GraphqlClient::new(&config)?;
///
/// let data = client
///     .execute(
///         "query Stack($id: ID!) { stack(id: $id) { id name } }",
///         Some(&json!({ "id": "my-stack" })),
///         Some(token),
///     )
///     .await?;
/// println!("{}", data["stack"]["name"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the endpoint in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &SpaceliftConfig) -> Result<Self, GraphqlError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Executes a GraphQL document and returns its `data` payload.
    ///
    /// # Arguments
    ///
    /// * `query` - The GraphQL document (query or mutation)
    /// * `variables` - Optional variables for the document
    /// * `bearer` - Optional bearer token for the `Authorization` header
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Server`] if the response carries a non-empty `errors`
    ///   list, whatever the HTTP status and even if `data` is present
    /// - [`GraphqlError::Http`] for network errors and non-2xx responses
    ///   without a GraphQL error list
    /// - [`GraphqlError::MissingData`] if `data` is null or absent
    /// - [`GraphqlError::Decode`] if the body is not a GraphQL envelope
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<&serde_json::Value>,
        bearer: Option<&str>,
    ) -> Result<serde_json::Value, GraphqlError> {
        let request = GraphqlRequest { query, variables };
        let response = self.http_client.post_json(&request, bearer).await?;
        Self::decode(response)
    }

    /// Turns a raw HTTP response into the `data` payload.
    fn decode(response: HttpResponse) -> Result<serde_json::Value, GraphqlError> {
        if !response.is_ok() {
            // Some servers report query validation failures with a 4xx status
            if let Some(errors) = Self::error_list(&response.body) {
                return Err(GraphqlError::Server { errors });
            }
        }
        let response = HttpClient::error_for_status(response)?;

        let envelope: GraphqlResponse = serde_json::from_value(response.body)?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                tracing::warn!(
                    count = errors.len(),
                    first = %errors[0].message,
                    "Spacelift returned GraphQL errors"
                );
                return Err(GraphqlError::Server { errors });
            }
        }

        match envelope.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(GraphqlError::MissingData),
        }
    }

    fn error_list(body: &serde_json::Value) -> Option<Vec<GraphqlErrorMessage>> {
        body.get("errors")
            .cloned()
            .and_then(|errors| serde_json::from_value::<Vec<GraphqlErrorMessage>>(errors).ok())
            .filter(|errors| !errors.is_empty())
    }
}
