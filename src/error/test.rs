use axum::{http::StatusCode, response::IntoResponse};

use super::{auth::AuthError, AppError};

/// Tests that validation failures map to 400 Bad Request.
///
/// Expected: 400 status
#[test]
fn bad_request_maps_to_400() {
    let response = AppError::BadRequest("data must not be empty".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests that a missing session identity maps to 401 Unauthorized.
///
/// Expected: 401 status
#[test]
fn missing_session_maps_to_401() {
    let response = AppError::from(AuthError::UserNotInSession).into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that a failed ability check maps to 403 Forbidden.
///
/// Expected: 403 status
#[test]
fn access_denied_maps_to_403() {
    let response = AppError::from(AuthError::AccessDenied {
        user_id: 1,
        guild_id: 2,
    })
    .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Tests that persistence failures map to 500 Internal Server Error.
///
/// Expected: 500 status
#[test]
fn db_error_maps_to_500() {
    let response =
        AppError::from(sea_orm::DbErr::Custom("connection lost".to_string())).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
