//! Authentication for the Spacelift API.
//!
//! # Overview
//!
//! - [`exchange_api_key`]: exchanges a key id/secret pair for a bearer token
//! - [`SessionToken`]: the bearer token and its expiry
//! - [`TokenState`]: the `Absent | Present` state each client owns
//! - [`AuthError`]: everything that can go wrong during the exchange
//!
//! # Refresh Policy
//!
//! Tokens are refreshed proactively: once a held token is within
//! [`TOKEN_EXPIRY_LEEWAY_SECS`] of its expiry, the next request performs a new
//! exchange first. A request rejected by the server does not trigger a
//! re-exchange on its own; use
//! [`Spacelift::reauthenticate`](crate::Spacelift::reauthenticate) for that.

mod api_key;
mod error;
mod token;

pub use api_key::{exchange_api_key, GET_SPACELIFT_TOKEN_MUTATION};
pub use error::AuthError;
pub use token::{SessionToken, TokenState, TOKEN_EXPIRY_LEEWAY_SECS};
