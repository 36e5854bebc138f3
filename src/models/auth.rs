//! Token claims and authentication request/response bodies.

use serde::{Deserialize, Serialize};

/// Claims carried inside a signed bearer token.
///
/// Tokens are never stored server-side; everything needed to authenticate
/// a request lives here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID the token was issued for
    pub sub: String,

    /// Account name at issuance
    pub name: String,

    /// Issuer string, checked on verification
    pub iss: String,

    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,

    /// Expires-at, seconds since the Unix epoch
    pub exp: i64,
}

/// Request body for registration and login.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "alice",
///   "password": "p1"
/// }
/// ```
///
/// Missing fields deserialize as empty strings and are rejected by validation.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub password: String,
}

/// Response body for registration and login.
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
