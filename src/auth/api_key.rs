//! API key exchange for Spacelift.
//!
//! Spacelift authenticates API clients with a long-lived key pair (key id +
//! key secret). The pair is exchanged, through the `apiKeyUser` mutation, for
//! a short-lived JWT that is then sent as a bearer token on every other
//! request.
//!
//! The exchange itself is sent without an `Authorization` header.
//!
//! # Expiry
//!
//! The mutation asks for `validUntil` (Unix seconds). When the server omits
//! it, the expiry is read from the JWT `exp` claim instead; see
//! [`SessionToken::from_jwt`].

use chrono::{TimeZone, Utc};
use serde::Deserialize;

use crate::auth::{AuthError, SessionToken};
use crate::clients::graphql::{GraphqlClient, GraphqlError};
use crate::config::{KeyId, KeySecret};

/// The token exchange mutation.
pub const GET_SPACELIFT_TOKEN_MUTATION: &str = "mutation GetSpaceliftToken($keyId: ID!, $keySecret: String!) { apiKeyUser(id: $keyId, secret: $keySecret) { id jwt validUntil } }";

#[derive(Debug, Deserialize)]
struct ApiKeyUserData {
    #[serde(rename = "apiKeyUser")]
    api_key_user: Option<ApiKeyUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiKeyUser {
    #[serde(default)]
    id: Option<String>,
    jwt: String,
    #[serde(default)]
    valid_until: Option<i64>,
}

/// Exchanges a key id/secret pair for a [`SessionToken`].
///
/// # Errors
///
/// - [`AuthError::Rejected`] if the server returned GraphQL errors
/// - [`AuthError::InvalidKeyId`] if `apiKeyUser` came back null
/// - [`AuthError::Http`] on network failures or non-2xx responses
/// - [`AuthError::MalformedResponse`] if the payload is not the expected shape
///
/// # Example
///
/// ```rust,ignore
/// use spacelift::auth::exchange_api_key;
///
/// let token = exchange_api_key(&graphql, config.key_id(), config.key_secret()).await?;
/// println!("token valid until {:?}", token.valid_until());
/// ```
pub async fn exchange_api_key(
    client: &GraphqlClient,
    key_id: &KeyId,
    key_secret: &KeySecret,
) -> Result<SessionToken, AuthError> {
    tracing::debug!(key_id = %key_id, "Exchanging Spacelift API key for a session token");

    let variables = serde_json::json!({
        "keyId": key_id.as_ref(),
        "keySecret": key_secret.as_ref(),
    });

    let data = client
        .execute(GET_SPACELIFT_TOKEN_MUTATION, Some(&variables), None)
        .await
        .map_err(|e| match e {
            GraphqlError::Http(e) => AuthError::Http(e),
            GraphqlError::Server { errors } => AuthError::Rejected { errors },
            GraphqlError::MissingData => AuthError::InvalidKeyId {
                key_id: key_id.to_string(),
            },
            GraphqlError::Decode(e) => AuthError::MalformedResponse {
                reason: e.to_string(),
            },
        })?;

    let data: ApiKeyUserData =
        serde_json::from_value(data).map_err(|e| AuthError::MalformedResponse {
            reason: e.to_string(),
        })?;

    let user = data.api_key_user.ok_or_else(|| AuthError::InvalidKeyId {
        key_id: key_id.to_string(),
    })?;

    if user.jwt.is_empty() {
        return Err(AuthError::MalformedResponse {
            reason: "apiKeyUser.jwt is empty".to_string(),
        });
    }

    let token = match user
        .valid_until
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    {
        Some(valid_until) => SessionToken::new(user.jwt, Some(valid_until)),
        None => SessionToken::from_jwt(user.jwt),
    };

    tracing::debug!(
        user_id = user.id.as_deref().unwrap_or("<unknown>"),
        valid_until = ?token.valid_until(),
        "Obtained Spacelift session token"
    );

    Ok(token)
}
