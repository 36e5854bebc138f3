//! Token service - issues and verifies signed bearer tokens.
//!
//! Tokens are HS256 JWTs binding an account ID to its name. Nothing is
//! stored server-side: a token is valid while its signature checks out
//! against the configured secret and its expiry lies in the future.

use crate::{error::AppError, models::auth::Claims};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

/// Longest accepted token lifetime (ten years).
pub const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Issues and verifies bearer tokens.
pub trait TokenService: Send + Sync {
    /// Sign a token for `subject` carrying `name`, valid for the configured TTL.
    fn issue(&self, subject: Uuid, name: &str) -> Result<String, AppError>;

    /// Check signature, algorithm, issuer and expiry and return the claims.
    ///
    /// Every failure is reported as `Unauthenticated`.
    fn verify(&self, token: &str) -> Result<Claims, AppError>;
}

/// HMAC-SHA256 JWT implementation of [`TokenService`].
///
/// The secret is handed in once at startup and never changes afterwards,
/// so the service can be shared across requests without locking.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    ttl: Duration,
}

impl JwtTokenService {
    /// # Errors
    ///
    /// Returns an error if the secret is empty or the TTL is zero or out of range.
    pub fn new(secret: &[u8], issuer: &str, ttl_secs: u64) -> anyhow::Result<Self> {
        if secret.is_empty() {
            anyhow::bail!("token secret must not be empty");
        }
        if ttl_secs == 0 || ttl_secs > MAX_TOKEN_TTL_SECS {
            anyhow::bail!("token TTL must be between 1 and {MAX_TOKEN_TTL_SECS} seconds");
        }
        let ttl = Duration::try_seconds(i64::try_from(ttl_secs)?)
            .ok_or_else(|| anyhow::anyhow!("token TTL out of range"))?;

        // Only HS256 is accepted, whatever the token header claims
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_issuer(&[issuer]);
        // iat is not checked by the library; deserializing into Claims requires it
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer: issuer.to_string(),
            ttl,
        })
    }

    /// Lifetime of every issued token.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn issue_at(&self, subject: Uuid, name: &str, now: DateTime<Utc>) -> Result<String, AppError> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::Internal("token expiry out of range".to_string()))?;

        let claims = Claims {
            sub: subject.to_string(),
            name: name.to_string(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| AppError::Internal(format!("failed to sign token: {e}")))
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, subject: Uuid, name: &str) -> Result<String, AppError> {
        self.issue_at(subject, name, Utc::now())
    }

    fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "token rejected");
                AppError::Unauthenticated
            })?;

        // The library accepts exp == now; a token is only valid strictly before expiry
        if Utc::now().timestamp() >= data.claims.exp {
            tracing::debug!(sub = %data.claims.sub, "token rejected: expired");
            return Err(AppError::Unauthenticated);
        }

        Ok(data.claims)
    }
}
