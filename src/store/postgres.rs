//! PostgreSQL implementation of [`CredentialStore`].
//!
//! # Atomicity Guarantees
//!
//! `create_account` writes the `users` row and its `stats` row inside one
//! database transaction; a user without stats is never visible.

use super::CredentialStore;
use crate::{
    db::DbPool,
    error::AppError,
    models::{
        stats::{STARTING_MONEY, Stats},
        user::User,
    },
};
use async_trait::async_trait;
use uuid::Uuid;

/// Credential store backed by the `users` and `stats` tables.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: DbPool,
}

impl PgCredentialStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// True when the error is a unique-constraint violation (duplicate name).
fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    /// # Process
    ///
    /// 1. Start database transaction
    /// 2. Insert the user (unique index on `name` rejects duplicates)
    /// 3. Insert the stats row with the starting balance
    /// 4. Commit (dropping the transaction on error rolls it back)
    async fn create_account(&self, name: &str, password: &str) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();

        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query("INSERT INTO users (id, name, password) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(name)
            .bind(password)
            .execute(&mut *tx)
            .await;

        // A concurrent registration may have claimed the name after the caller's check
        if let Err(err) = inserted {
            let outcome = if is_unique_violation(&err) {
                AppError::Conflict
            } else {
                AppError::Database(err)
            };
            // The insert's outcome is what the caller sees, even if rollback fails
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback after failed user insert failed");
            }
            return Err(outcome);
        }

        sqlx::query("INSERT INTO stats (id, money) VALUES ($1, $2)")
            .bind(id)
            .bind(STARTING_MONEY)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(id)
    }

    async fn find_by_credentials(&self, name: &str, password: &str) -> Result<User, AppError> {
        let user = self.find_by_name(name).await?;

        if !user.password_matches(password) {
            return Err(AppError::NotFound);
        }

        Ok(user)
    }

    async fn find_by_name(&self, name: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, password, created_at FROM users WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("SELECT id, name, password, created_at FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn find_stats(&self, id: Uuid) -> Result<Stats, AppError> {
        sqlx::query_as::<_, Stats>("SELECT id, money FROM stats WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        // PgPool::close is a no-op once the pool is already closed
        self.pool.close().await;
    }
}
