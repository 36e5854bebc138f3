//! Account Service - Main Application Entry Point
//!
//! A small REST API for registering users, logging in and reading a
//! per-user balance. Successful registration and login return a signed
//! bearer token; the balance endpoint accepts that token.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: HS256 JWT bearer tokens with a 24 hour default TTL
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build the credential store, token service and account service
//! 5. Start server on configured port, close the store on shutdown

use std::sync::Arc;

use account_service::{
    config, db, handlers,
    services::{account_service::AccountService, token_service::JwtTokenService},
    store::{CredentialStore, PgCredentialStore},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    config.validate()?;
    tracing::info!(?config, "Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let store: Arc<dyn CredentialStore> = Arc::new(PgCredentialStore::new(pool));
    let tokens = Arc::new(JwtTokenService::new(
        config.jwt_secret.as_bytes(),
        &config.token_issuer,
        config.token_ttl_secs,
    )?);
    tracing::info!(ttl_secs = tokens.ttl().num_seconds(), "Token service ready");
    let accounts = AccountService::new(store.clone(), tokens);

    let app = handlers::router(accounts);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Store closed, shutting down");

    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        // Never resolve; the server keeps running without graceful shutdown
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
