//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, bearer token)
//! 2. Delegates to the account service
//! 3. Returns HTTP response (JSON, status code)

use crate::{middleware, services::account_service::AccountService};
use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Registration and login endpoints
pub mod auth;
/// Service health endpoint
pub mod health;
/// Balance endpoint
pub mod stats;

/// Build the application router.
pub fn router(accounts: AccountService) -> Router {
    // Routes that need a bearer token
    let protected_routes = Router::new()
        .route(
            "/api/v1/stats",
            get(stats::get_stats).post(stats::get_stats),
        )
        .route_layer(axum_middleware::from_fn(
            middleware::auth::bearer_token_middleware,
        ));

    Router::new()
        // Public routes (no authentication required)
        .route("/health", get(health::health_check))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .merge(protected_routes)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share the account service with all handlers via State extraction
        .with_state(accounts)
}
