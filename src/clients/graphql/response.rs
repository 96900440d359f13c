//! The standard GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};

/// Request body posted to the endpoint.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    /// The GraphQL document (query or mutation).
    pub query: &'a str,
    /// Variables referenced by the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a serde_json::Value>,
}

/// A single entry of the top-level `errors` list.
///
/// Kept as close to the server payload as possible so callers see exactly
/// what the server reported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorMessage {
    /// Human readable message.
    pub message: String,
    /// Path of the field that failed, e.g. `["contextCreateV2"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
    /// Source locations in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ErrorLocation>>,
    /// Server specific extra data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

/// Line/column position inside a GraphQL document.
///
/// Both parts are optional so a partial location never hides the message it
/// belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

/// The `{ data, errors }` envelope returned by every GraphQL endpoint.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorMessage>>,
}
