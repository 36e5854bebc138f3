//! Balance lookup handler.

use crate::{
    error::AppError,
    middleware::auth::BearerToken,
    models::stats::StatsResponse,
    services::account_service::AccountService,
};
use axum::{Extension, Json, extract::State};

/// Return the balance of the account the bearer token belongs to.
///
/// # Endpoint
///
/// `GET` or `POST /api/v1/stats`
///
/// # Authentication
///
/// Requires `Authorization: Bearer <token>` or `?token=<token>`.
///
/// # Response
///
/// - **Success (200 OK)**: `{"money": 100}`
/// - **Error (401)**: Missing, invalid or expired token
/// - **Error (404)**: Account has no stats record
pub async fn get_stats(
    State(accounts): State<AccountService>,
    Extension(BearerToken(token)): Extension<BearerToken>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = accounts.get_balance(&token).await?;

    Ok(Json(stats.into()))
}
