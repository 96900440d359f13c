//! # Spacelift API Rust Client
//!
//! A small async client for the Spacelift GraphQL API: API key
//! authentication, raw GraphQL execution, and convenience operations for
//! stacks, spaces and contexts.
//!
//! ## Overview
//!
//! This crate provides:
//! - Configuration via [`SpaceliftConfig`] and [`SpaceliftConfigBuilder`], from
//!   explicit values or the `SPACELIFT_*` environment variables
//! - Validated newtypes for the connection parameters
//! - API key exchange with lazy, expiry-aware token refresh via [`auth`]
//! - The [`Spacelift`] client: [`Spacelift::execute`] for any document, plus
//!   [`Spacelift::get_stacks`] and friends
//! - One error type, [`SpaceliftError`], distinguishing configuration,
//!   authentication, GraphQL and transport failures
//!
//! ## Quick Start
//!
//! ```rust
//! use spacelift::{Spacelift, SpaceliftConfig};
//!
//! let config = SpaceliftConfig::builder()
//!     .base_url("https://acme.app.spacelift.io/graphql")
//!     .key_id("01HXYZKEYID")
//!     .key_secret("secret")
//!     .build()
//!     .unwrap();
//!
//! // No request is made until the first operation.
//! let client = Spacelift::new(config).unwrap();
//! assert!(client.config().base_url().as_ref().ends_with("/graphql"));
//! ```
//!
//! ## Configuration From the Environment
//!
//! ```rust,ignore
//! use spacelift::Spacelift;
//!
//! // Reads SPACELIFT_BASE_URL, SPACELIFT_KEY_ID and SPACELIFT_KEY_SECRET
//! let client = Spacelift::from_env()?;
//! ```
//!
//! ## Querying
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! // Default projection: id and space
//! let stacks = client.get_stacks(None).await?;
//!
//! // Custom projection, nested selections included
//! let stacks = client
//!     .get_stacks(Some(&["id", "name", "labels", "vcsIntegration { id }"]))
//!     .await?;
//!
//! // Anything else
//! let data = client
//!     .execute("query { viewer { id name } }", None)
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: each client owns its configuration and token
//! - **Fail-fast validation**: configuration is checked before any request
//! - **Thread-safe**: [`Spacelift`] is `Send + Sync` and can be shared via `Arc`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
mod spacelift;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, KeyId, KeySecret, SpaceliftConfig, SpaceliftConfigBuilder};
pub use error::{ConfigError, SpaceliftError};

pub use spacelift::{
    ConfigVariable, ContextInput, Record, SpaceInput, Spacelift, DEFAULT_CONTEXT_FIELDS,
    DEFAULT_SPACE_FIELDS, DEFAULT_STACK_FIELDS,
};
