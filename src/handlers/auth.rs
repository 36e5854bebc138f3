//! Registration and login HTTP handlers.
//!
//! This module implements the credential endpoints:
//! - POST /api/v1/auth/register - Create an account and return a token
//! - POST /api/v1/auth/login - Exchange name and password for a token

use crate::{
    error::AppError,
    models::auth::{CredentialsRequest, TokenResponse},
    services::account_service::AccountService,
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// Turn a body rejection into a 400 instead of axum's default 415/422.
fn credentials(
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<CredentialsRequest, AppError> {
    payload
        .map(|Json(request)| request)
        .map_err(|rejection| AppError::InvalidInput(format!("Invalid request payload: {rejection}")))
}

/// Register a new account.
///
/// # Endpoint
///
/// `POST /api/v1/auth/register`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "alice",
///   "password": "p1"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"token": "..."}`, bound to the new account
/// - **Error (400)**: Malformed body, or empty name or password
/// - **Error (409)**: Name already taken
/// - **Error (500)**: Storage or signing failure
pub async fn register(
    State(accounts): State<AccountService>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let request = credentials(payload)?;
    let token = accounts.register(&request.name, &request.password).await?;

    Ok(Json(TokenResponse { token }))
}

/// Log in to an existing account.
///
/// # Endpoint
///
/// `POST /api/v1/auth/login`
///
/// # Response
///
/// - **Success (200 OK)**: `{"token": "..."}`, a freshly minted token
/// - **Error (400)**: Malformed body, or empty name or password
/// - **Error (404)**: Unknown name or wrong password
pub async fn login(
    State(accounts): State<AccountService>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let request = credentials(payload)?;
    let token = accounts.login(&request.name, &request.password).await?;

    Ok(Json(TokenResponse { token }))
}
