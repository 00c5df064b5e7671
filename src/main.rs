//! Guild settings dashboard backend.
//!
//! HTTP API for reading and updating per-guild bot configuration. Axum
//! serves the API, SeaORM persists settings in SQLite, and Serenity's HTTP
//! client resolves guilds and members for authorization.
//!
//! # Architecture
//!
//! The backend follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity conversion
//! - **Settings Core** (`settings/`) - Merge engine, change tracking, and the settings schema
//! - **Model Layer** (`model/`) - Domain models and DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the authentication guard

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod settings;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use tower_http::cors::CorsLayer;

use crate::{
    config::Config, error::AppError, service::discord::DiscordDirectory, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let discord_http = startup::setup_discord_http(&config);

    let directory = Arc::new(DiscordDirectory::new(discord_http));
    let state = AppState::new(db, directory);

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {}", e);
    }
}
