//! Configuration types for the Spacelift API client.
//!
//! # Overview
//!
//! - [`SpaceliftConfig`]: the resolved, immutable connection settings
//! - [`SpaceliftConfigBuilder`]: collects explicit values and resolves the rest
//!   from the environment
//! - [`BaseUrl`], [`KeyId`], [`KeySecret`]: validated newtypes
//!
//! # Resolution
//!
//! The three connection parameters can be given explicitly or left to the
//! environment ([`ENV_BASE_URL`], [`ENV_KEY_ID`], [`ENV_KEY_SECRET`]). An
//! explicit, non-empty value always wins. Empty strings count as missing in
//! both sources.
//!
//! Resolution is an explicit step: [`SpaceliftConfigBuilder::build`] uses only
//! explicit values, [`SpaceliftConfigBuilder::build_with_env`] consults the
//! process environment, and [`SpaceliftConfigBuilder::build_with_lookup`]
//! accepts any lookup function (handy in tests).
//!
//! # Example
//!
//! ```rust
//! use spacelift::SpaceliftConfig;
//!
//! let config = SpaceliftConfig::builder()
//!     .base_url("https://acme.app.spacelift.io/graphql")
//!     .key_id("01HXYZKEYID")
//!     .key_secret("secret")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.key_id().as_ref(), "01HXYZKEYID");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, KeyId, KeySecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the GraphQL endpoint URL.
pub const ENV_BASE_URL: &str = "SPACELIFT_BASE_URL";

/// Environment variable holding the API key id.
pub const ENV_KEY_ID: &str = "SPACELIFT_KEY_ID";

/// Environment variable holding the API key secret.
pub const ENV_KEY_SECRET: &str = "SPACELIFT_KEY_SECRET";

/// Default timeout applied to every HTTP request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved connection settings for a [`Spacelift`](crate::Spacelift) client.
///
/// All three connection parameters are guaranteed non-empty.
#[derive(Clone, Debug)]
pub struct SpaceliftConfig {
    base_url: BaseUrl,
    key_id: KeyId,
    key_secret: KeySecret,
    user_agent_prefix: Option<String>,
    timeout: Duration,
}

impl SpaceliftConfig {
    /// Creates a new builder for constructing a `SpaceliftConfig`.
    #[must_use]
    pub fn builder() -> SpaceliftConfigBuilder {
        SpaceliftConfigBuilder::new()
    }

    /// Resolves a configuration entirely from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParams`] if any of the three variables is
    /// unset or empty, or a validation error if a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        SpaceliftConfigBuilder::new().build_with_env()
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API key id.
    #[must_use]
    pub const fn key_id(&self) -> &KeyId {
        &self.key_id
    }

    /// Returns the API key secret.
    #[must_use]
    pub const fn key_secret(&self) -> &KeySecret {
        &self.key_secret
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Verify SpaceliftConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SpaceliftConfig>();
};

/// Builder for [`SpaceliftConfig`].
///
/// # Defaults
///
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
#[derive(Default)]
pub struct SpaceliftConfigBuilder {
    base_url: Option<String>,
    key_id: Option<String>,
    key_secret: Option<String>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for SpaceliftConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceliftConfigBuilder")
            .field("base_url", &self.base_url)
            .field("key_id", &self.key_id)
            .field("key_secret", &self.key_secret.as_ref().map(|_| "*****"))
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SpaceliftConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API key id.
    #[must_use]
    pub fn key_id(mut self, id: impl Into<String>) -> Self {
        self.key_id = Some(id.into());
        self
    }

    /// Sets the API key secret.
    #[must_use]
    pub fn key_secret(mut self, secret: impl Into<String>) -> Self {
        self.key_secret = Some(secret.into());
        self
    }

    /// Sets a prefix for the `User-Agent` header, e.g. `"MyTool/1.0"`.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration from explicit values only.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParams`] naming every parameter that was
    /// not set, or a validation error for a malformed value.
    pub fn build(self) -> Result<SpaceliftConfig, ConfigError> {
        self.build_with_lookup(|_| None)
    }

    /// Builds the configuration, filling unset values from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`build_with_lookup`](Self::build_with_lookup).
    pub fn build_with_env(self) -> Result<SpaceliftConfig, ConfigError> {
        self.build_with_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration, filling unset values through `lookup`.
    ///
    /// `lookup` receives the environment variable name ([`ENV_BASE_URL`],
    /// [`ENV_KEY_ID`] or [`ENV_KEY_SECRET`]). Explicit values win; empty
    /// strings from either source are treated as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParams`] listing all parameters missing
    /// from both sources, [`ConfigError::InvalidBaseUrl`] for a malformed URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spacelift::SpaceliftConfig;
    ///
    /// let config = SpaceliftConfig::builder()
    ///     .key_secret("explicit-secret")
    ///     .build_with_lookup(|name| match name {
    ///         "SPACELIFT_BASE_URL" => Some("https://acme.app.spacelift.io/graphql".into()),
    ///         "SPACELIFT_KEY_ID" => Some("env-key".into()),
    ///         _ => Some("env-secret".into()),
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(config.key_id().as_ref(), "env-key");
    /// assert_eq!(config.key_secret().as_ref(), "explicit-secret");
    /// ```
    pub fn build_with_lookup<F>(self, lookup: F) -> Result<SpaceliftConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |explicit: Option<String>, var: &str| {
            explicit
                .filter(|v| !v.is_empty())
                .or_else(|| lookup(var).filter(|v| !v.is_empty()))
        };

        let base_url = resolve(self.base_url, ENV_BASE_URL);
        let key_id = resolve(self.key_id, ENV_KEY_ID);
        let key_secret = resolve(self.key_secret, ENV_KEY_SECRET);

        let missing: Vec<&'static str> = [
            ("base_url", base_url.is_none()),
            ("key_id", key_id.is_none()),
            ("key_secret", key_secret.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, is_missing)| is_missing.then_some(name))
        .collect();

        match (base_url, key_id, key_secret) {
            (Some(base_url), Some(key_id), Some(key_secret)) => Ok(SpaceliftConfig {
                base_url: BaseUrl::new(base_url)?,
                key_id: KeyId::new(key_id)?,
                key_secret: KeySecret::new(key_secret)?,
                user_agent_prefix: self.user_agent_prefix,
                timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            }),
            _ => Err(ConfigError::MissingParams { params: missing }),
        }
    }
}
