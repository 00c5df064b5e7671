//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into structured HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every error surfaces to the caller as a JSON body with a stable machine
//! code, a human message, and optional diagnostic details. Server-side detail
//! is logged via `tracing`; client-facing messages stay generic for anything
//! that is not a validation problem.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, internal::InternalError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and
/// provides automatic conversion to HTTP responses. Most variants use `#[from]`
/// for automatic error conversion. Auth errors handle their own response
/// mapping (401 vs 403), while the remaining variants map onto the fixed
/// taxonomy: validation (400), upstream Discord failure (500 with details),
/// persistence failure (500), and generic internal failure (500).
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Surfaces as a 500 with the underlying
    /// message attached as diagnostic details.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal invariant failures (ID parsing and the like).
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into structured HTTP responses.
///
/// # Returns
/// - 400 Bad Request (`validation_error`) - For `BadRequest`
/// - 401/403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 (`upstream_error`) - For `DiscordErr`, with the underlying message
///   attached as `details` rather than used as the client message
/// - 500 (`persistence_error`) - For `DbErr` / `SqlxErr`
/// - 500 (`internal_error`) - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("validation_error", msg)),
            )
                .into_response(),
            Self::DiscordErr(err) => {
                tracing::error!("Discord API error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(
                        ErrorDto::new("upstream_error", "Discord API request failed")
                            .with_details(serde_json::json!(err.to_string())),
                    ),
                )
                    .into_response()
            }
            Self::DbErr(_) | Self::SqlxErr(_) => {
                tracing::error!("Persistence error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("persistence_error", "Settings storage failed")),
                )
                    .into_response()
            }
            err => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("internal_error", "Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod test;
