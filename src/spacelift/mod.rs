//! The Spacelift API client.
//!
//! [`Spacelift`] owns the connection settings, the GraphQL client and the
//! token state. Every operation goes through the same two steps:
//!
//! 1. ensure a usable bearer token (exchanging the API key if there is none,
//!    or if the held one is about to expire);
//! 2. post the GraphQL document with `Authorization: Bearer <token>` and
//!    decode the `data` payload.
//!
//! Convenience methods for stacks, spaces and contexts live in the
//! submodules; [`Spacelift::execute`] is the escape hatch for everything else.
//!
//! # Concurrency
//!
//! The token lock is never held across the exchange. Two tasks that find no
//! usable token at the same time will both exchange the key, and the later
//! result wins.

mod contexts;
mod query;
mod spaces;
mod stacks;

pub use contexts::{ConfigVariable, ContextInput};
pub use query::{DEFAULT_CONTEXT_FIELDS, DEFAULT_SPACE_FIELDS, DEFAULT_STACK_FIELDS};
pub use spaces::SpaceInput;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::auth::{exchange_api_key, TokenState};
use crate::clients::graphql::GraphqlClient;
use crate::config::SpaceliftConfig;
use crate::error::SpaceliftError;

/// One returned object: field name to value, shaped by the requested fields.
pub type Record = serde_json::Map<String, Value>;

/// Client for the Spacelift GraphQL API.
///
/// # Thread Safety
///
/// `Spacelift` is `Send + Sync`; wrap it in an `Arc` to share it between
/// tasks. Each instance owns its own token; instances never share one.
///
/// # Example
///
/// ```rust,ignore
/// use spacelift::{Spacelift, SpaceliftConfig};
///
/// let config = SpaceliftConfig::builder()
///     .base_url("https://acme.app.spacelift.io/graphql")
///     .key_id("01HXYZKEYID")
///     .key_secret("secret")
///     .build()?;
/// let client = Spacelift::new(config)?;
///
/// for stack in client.get_stacks(Some(&["id", "name", "state"])).await? {
///     println!("{} is {}", stack["name"], stack["state"]);
/// }
/// ```
#[derive(Debug)]
pub struct Spacelift {
    config: SpaceliftConfig,
    graphql: GraphqlClient,
    token: RwLock<TokenState>,
}

// Verify Spacelift is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Spacelift>();
};

impl Spacelift {
    /// Creates a client from a resolved configuration.
    ///
    /// No request is made until the first operation.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceliftError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: SpaceliftConfig) -> Result<Self, SpaceliftError> {
        let graphql = GraphqlClient::new(&config)?;
        Ok(Self {
            config,
            graphql,
            token: RwLock::new(TokenState::Absent),
        })
    }

    /// Creates a client configured from `SPACELIFT_BASE_URL`,
    /// `SPACELIFT_KEY_ID` and `SPACELIFT_KEY_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceliftError::Config`] if any variable is unset or empty.
    pub fn from_env() -> Result<Self, SpaceliftError> {
        Self::new(SpaceliftConfig::from_env()?)
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &SpaceliftConfig {
        &self.config
    }

    /// Executes a raw GraphQL document and returns the `data` payload.
    ///
    /// Use this for operations not covered by the convenience methods. The
    /// document is sent as-is; malformed documents are rejected by the server.
    ///
    /// # Errors
    ///
    /// - [`SpaceliftError::Authentication`] if a token was needed and could not be obtained
    /// - [`SpaceliftError::Graphql`] if the server returned a non-empty `errors` list
    /// - [`SpaceliftError::Transport`] on network failures and non-2xx responses
    /// - [`SpaceliftError::UnexpectedResponse`] if `data` was null or absent
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde_json::json;
    ///
    /// let data = client
    ///     .execute(
    ///         "mutation Trigger($stack: ID!) { runTrigger(stack: $stack) { id } }",
    ///         Some(json!({ "stack": "my-stack" })),
    ///     )
    ///     .await?;
    /// ```
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<Value, SpaceliftError> {
        self.execute_with(query, variables.as_ref()).await
    }

    /// Exchanges the API key again, replacing any held token on success.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceliftError::Authentication`] if the exchange fails; any
    /// previously held token is kept in that case.
    pub async fn reauthenticate(&self) -> Result<(), SpaceliftError> {
        self.authenticate().await.map(|_| ())
    }

    /// Drops the held token; the next operation will authenticate again.
    pub async fn invalidate_token(&self) {
        *self.token.write().await = TokenState::Absent;
    }

    /// Returns `true` if a token is held and not about to expire.
    pub async fn has_valid_token(&self) -> bool {
        self.token.read().await.usable().is_some()
    }

    pub(crate) async fn execute_with(
        &self,
        query: &str,
        variables: Option<&Value>,
    ) -> Result<Value, SpaceliftError> {
        let bearer = self.bearer().await?;
        tracing::debug!(query, "Executing Spacelift GraphQL operation");
        Ok(self
            .graphql
            .execute(query, variables, Some(bearer.as_str()))
            .await?)
    }

    /// Returns a usable token, authenticating first if needed.
    async fn bearer(&self) -> Result<String, SpaceliftError> {
        if let Some(token) = self.token.read().await.usable() {
            tracing::debug!("Reusing held Spacelift session token");
            return Ok(token.as_str().to_owned());
        }
        self.authenticate().await
    }

    /// Exchanges the API key and stores the new token.
    ///
    /// On failure the token state is left untouched, including a token
    /// stored by a concurrent task in the meantime.
    async fn authenticate(&self) -> Result<String, SpaceliftError> {
        let token = exchange_api_key(
            &self.graphql,
            self.config.key_id(),
            self.config.key_secret(),
        )
        .await?;

        let bearer = token.as_str().to_owned();
        *self.token.write().await = TokenState::Present(token);
        Ok(bearer)
    }
}
