use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session.
    ///
    /// The caller either never logged in or their session expired.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The acting member failed the guild ability check.
    ///
    /// The member is not the guild owner, holds none of the configured admin
    /// roles, and lacks the Manage Guild permission. Results in a 403
    /// Forbidden response.
    #[error("User {user_id} may not manage guild {guild_id}")]
    AccessDenied { user_id: u64, guild_id: u64 },
}

/// Converts authentication errors into HTTP responses.
///
/// Denials are logged at debug level with the acting user and guild for
/// diagnostics while the client-facing message stays generic.
///
/// # Returns
/// - 401 Unauthorized (`unauthenticated`) - For missing session identity
/// - 403 Forbidden (`forbidden`) - For failed ability checks
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("unauthenticated", "You are not logged in")),
            )
                .into_response(),
            Self::AccessDenied { user_id, guild_id } => {
                tracing::debug!(
                    "Denied settings access for user {} on guild {}",
                    user_id,
                    guild_id
                );
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        "forbidden",
                        "You do not have permission to manage this server",
                    )),
                )
                    .into_response()
            }
        }
    }
}
