//! Account service - the register, login and balance use cases.
//!
//! Each use case validates its input before touching the store, then
//! composes the [`CredentialStore`] with the [`TokenService`]. Tokens are
//! minted fresh on every successful register or login.

use crate::{
    error::AppError,
    models::stats::Stats,
    services::token_service::TokenService,
    store::CredentialStore,
};
use std::sync::Arc;
use uuid::Uuid;

/// Orchestrates account use cases over a store and a token service.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn CredentialStore>,
    tokens: Arc<dyn TokenService>,
}

/// Both fields must be non-empty.
fn validate_credentials(name: &str, password: &str) -> Result<(), AppError> {
    if name.is_empty() || password.is_empty() {
        return Err(AppError::InvalidInput(
            "Missing name or password".to_string(),
        ));
    }
    Ok(())
}

impl AccountService {
    pub fn new(store: Arc<dyn CredentialStore>, tokens: Arc<dyn TokenService>) -> Self {
        Self { store, tokens }
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Register a new account and return a token for it.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: name or password is empty
    /// - `Conflict`: the name is taken (including a lost race with a concurrent registration)
    pub async fn register(&self, name: &str, password: &str) -> Result<String, AppError> {
        validate_credentials(name, password)?;

        match self.store.find_by_name(name).await {
            Ok(_) => {
                tracing::info!(user = %name, "registration rejected: name taken");
                return Err(AppError::Conflict);
            }
            Err(AppError::NotFound) => {}
            Err(e) => return Err(e),
        }

        let account_id = self.store.create_account(name, password).await?;
        tracing::info!(%account_id, user = %name, "account registered");

        self.tokens.issue(account_id, name)
    }

    /// Authenticate with name and password and return a fresh token.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: name or password is empty
    /// - `NotFound`: unknown name or wrong password (indistinguishable)
    pub async fn login(&self, name: &str, password: &str) -> Result<String, AppError> {
        validate_credentials(name, password)?;

        let user = self.store.find_by_credentials(name, password).await?;
        tracing::info!(account_id = %user.id, "login succeeded");

        self.tokens.issue(user.id, &user.name)
    }

    /// Resolve a token to its account's balance.
    ///
    /// # Errors
    ///
    /// - `Unauthenticated`: token invalid, expired, or its subject is not an account ID
    /// - `NotFound`: the account or its stats record no longer exists
    pub async fn get_balance(&self, token: &str) -> Result<Stats, AppError> {
        let claims = self.tokens.verify(token)?;

        let account_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            tracing::warn!(sub = %claims.sub, "token subject is not an account id");
            AppError::Unauthenticated
        })?;

        let user = self.store.find_by_id(account_id).await?;
        self.store.find_stats(user.id).await
    }
}
