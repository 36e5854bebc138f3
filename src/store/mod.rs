//! Credential storage.
//!
//! `CredentialStore` is the persistence contract the account use cases rely
//! on. `PgCredentialStore` is the production adapter; tests run against the
//! in-memory implementation.

use crate::{
    error::AppError,
    models::{stats::Stats, user::User},
};
use async_trait::async_trait;
use uuid::Uuid;

/// Postgres-backed store
pub mod postgres;

/// In-memory store for tests
#[cfg(test)]
pub mod memory;

pub use postgres::PgCredentialStore;

/// Persists user identities and their balances.
///
/// Implementations must be safe to share between concurrent requests and
/// must persist every mutation before returning success.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Create a user and its stats record (money = 100) as one atomic unit.
    ///
    /// Fails with `Conflict` if the name is already taken.
    async fn create_account(&self, name: &str, password: &str) -> Result<Uuid, AppError>;

    /// Look up a user by exact name and password.
    ///
    /// An unknown name and a wrong password both yield `NotFound`.
    async fn find_by_credentials(&self, name: &str, password: &str) -> Result<User, AppError>;

    /// Look up a user by name only.
    async fn find_by_name(&self, name: &str) -> Result<User, AppError>;

    /// Look up a user by account ID.
    async fn find_by_id(&self, id: Uuid) -> Result<User, AppError>;

    /// Look up the stats record belonging to an account.
    async fn find_stats(&self, id: Uuid) -> Result<Stats, AppError>;

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Release storage resources. Safe to call more than once.
    async fn close(&self);
}
