//! Session tokens and the per-client token state.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;

/// How long before its expiry a token is already treated as expired.
///
/// Covers clock skew and the time a request spends in flight.
pub const TOKEN_EXPIRY_LEEWAY_SECS: i64 = 60;

/// A bearer token obtained from the API key exchange.
///
/// The `Debug` implementation masks the token value.
///
/// # Example
///
/// ```rust
/// use spacelift::auth::SessionToken;
/// use chrono::{Duration, Utc};
///
/// let token = SessionToken::new("opaque", Some(Utc::now() + Duration::hours(1)));
/// assert!(!token.expired());
///
/// let stale = SessionToken::new("opaque", Some(Utc::now() + Duration::seconds(30)));
/// assert!(stale.expired()); // inside the refresh leeway
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    jwt: String,
    valid_until: Option<DateTime<Utc>>,
}

impl SessionToken {
    /// Creates a token with an explicit expiry. `None` means the token is
    /// used until it is invalidated.
    #[must_use]
    pub fn new(jwt: impl Into<String>, valid_until: Option<DateTime<Utc>>) -> Self {
        Self {
            jwt: jwt.into(),
            valid_until,
        }
    }

    /// Creates a token whose expiry is read from the JWT `exp` claim.
    ///
    /// The signature is not verified: the token is only ever sent back to
    /// the server that issued it. Tokens that are not JWTs, or carry no
    /// `exp`, get no expiry.
    #[must_use]
    pub fn from_jwt(jwt: impl Into<String>) -> Self {
        let jwt = jwt.into();
        let valid_until = jwt_expiry(&jwt);
        Self { jwt, valid_until }
    }

    /// Returns the raw token for the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.jwt
    }

    /// Returns when the token expires, if known.
    #[must_use]
    pub const fn valid_until(&self) -> Option<DateTime<Utc>> {
        self.valid_until
    }

    /// Returns `true` once the token is within [`TOKEN_EXPIRY_LEEWAY_SECS`]
    /// of its expiry.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expired_at(Utc::now())
    }

    /// Same as [`expired`](Self::expired), against a given instant.
    #[must_use]
    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_until.is_some_and(|valid_until| {
            now + Duration::seconds(TOKEN_EXPIRY_LEEWAY_SECS) >= valid_until
        })
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("jwt", &"*****")
            .field("valid_until", &self.valid_until)
            .finish()
    }
}

/// Authentication state owned by a single client.
///
/// `Absent → Present → (expired) → Absent`; the only transitions happen
/// around the API key exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TokenState {
    /// No token has been obtained, or it was invalidated.
    #[default]
    Absent,
    /// A token is held; it may have expired since.
    Present(SessionToken),
}

impl TokenState {
    /// Returns the held token if it is still usable.
    #[must_use]
    pub fn usable(&self) -> Option<&SessionToken> {
        match self {
            Self::Present(token) if !token.expired() => Some(token),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ExpiryClaim {
    exp: Option<i64>,
}

fn jwt_expiry(jwt: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<ExpiryClaim>(jwt, &DecodingKey::from_secret(&[]), &validation).ok()?;
    Utc.timestamp_opt(data.claims.exp?, 0).single()
}
