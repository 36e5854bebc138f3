//! In-memory [`CredentialStore`] used by unit and router tests.

use super::CredentialStore;
use crate::{
    error::AppError,
    models::{
        stats::{STARTING_MONEY, Stats},
        user::User,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    stats: HashMap<Uuid, Stats>,
}

#[derive(Default)]
pub struct InMemoryCredentialStore {
    tables: RwLock<Tables>,
    closed: AtomicBool,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn stats_count(&self) -> usize {
        self.tables.read().await.stats.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> Result<(), AppError> {
        if self.is_closed() {
            return Err(AppError::Internal("store is closed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create_account(&self, name: &str, password: &str) -> Result<Uuid, AppError> {
        self.ensure_open()?;

        // Both inserts happen under one write lock
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|user| user.name == name) {
            return Err(AppError::Conflict);
        }

        let id = Uuid::new_v4();
        tables.users.insert(
            id,
            User {
                id,
                name: name.to_string(),
                password: password.to_string(),
                created_at: Utc::now(),
            },
        );
        tables.stats.insert(
            id,
            Stats {
                id,
                money: STARTING_MONEY,
            },
        );

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
        self.ensure_open()?;
        self.tables
            .read()
            .await
            .users
            .values()
            .find(|user| user.name == name)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<User, AppError> {
        self.ensure_open()?;
        self.tables
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn find_stats(&self, id: Uuid) -> Result<Stats, AppError> {
        self.ensure_open()?;
        self.tables
            .read()
            .await
            .stats
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.ensure_open()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_account_writes_user_and_stats() {
        let store = InMemoryCredentialStore::new();
        let id = store.create_account("alice", "p1").await.unwrap();

        let user = store.find_by_id(id).await.unwrap();
        assert_eq!(user.name, "alice");

        let stats = store.find_stats(id).await.unwrap();
        assert_eq!(stats.money, 100);
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict_without_extra_stats() {
        let store = InMemoryCredentialStore::new();
        store.create_account("alice", "p1").await.unwrap();

        let second = store.create_account("alice", "p2").await;
        assert!(matches!(second, Err(AppError::Conflict)));
        assert_eq!(store.user_count().await, 1);
        assert_eq!(store.stats_count().await, 1);
    }

    #[tokio::test]
    async fn wrong_password_is_not_found() {
        let store = InMemoryCredentialStore::new();
        store.create_account("alice", "p1").await.unwrap();

        assert!(matches!(
            store.find_by_credentials("alice", "wrong").await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            store.find_by_credentials("bob", "p1").await,
            Err(AppError::NotFound)
        ));
        assert!(store.find_by_credentials("alice", "p1").await.is_ok());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = InMemoryCredentialStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(store.find_by_id(id).await, Err(AppError::NotFound)));
        assert!(matches!(store.find_stats(id).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn close_is_idempotent() {
        let store = InMemoryCredentialStore::new();
        store.close().await;
        store.close().await;
        assert!(store.is_closed());
        assert!(store.ping().await.is_err());
    }
}
