//! User account model.
//!
//! A user is created once at registration and never updated or deleted.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table with columns:
/// - `id`: Unique identifier (UUID), also the subject of issued tokens
/// - `name`: Unique, non-empty login name
/// - `password`: Stored credential, compared byte-for-byte
/// - `created_at`: When the account was registered
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Login name, unique across all users
    pub name: String,

    /// Opaque stored credential.
    ///
    /// Currently the plaintext password. Only `password_matches` compares it,
    /// so a salted hash can replace it without touching callers.
    pub password: String,

    /// Timestamp when the account was registered
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Compare a candidate password against the stored credential.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_bytes() == candidate.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(password: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "alice".to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn password_match_is_exact() {
        let user = user("p1");
        assert!(user.password_matches("p1"));
        assert!(!user.password_matches("P1"));
        assert!(!user.password_matches("p1 "));
        assert!(!user.password_matches(""));
    }
}
