use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        settings::{GetSettingsQuery, UpdateSettingsDto},
    },
    service::settings::GuildSettingsService,
    state::AppState,
};

pub const SETTINGS_TAG: &str = "settings";

/// Fetches a guild's settings.
///
/// The acting user defaults to the session user; the `userId` query
/// parameter evaluates the ability check on behalf of another user instead
/// (the caller still has to be logged in).
///
/// Deliberately stricter than the dashboard's original contract, which let
/// an absent `userId` fall back to the guild owner and thereby let any
/// caller read settings as the owner. Here every read requires a session
/// and the ability check always runs against a concrete acting user.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/settings",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("shouldSerialize" = Option<String>, Query, description = "Fill schema defaults unless set to 'false'"),
        ("userId" = Option<String>, Query, description = "Evaluate access for this user instead of the session user")
    ),
    responses(
        (status = 200, description = "Guild settings", body = Object),
        (status = 400, description = "Malformed userId parameter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not manage this guild", body = ErrorDto),
        (status = 500, description = "Discord lookup or storage failure", body = ErrorDto)
    ),
)]
pub async fn get_guild_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<GetSettingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let session_user = AuthGuard::new(&session).require_user().await?;
    let acting_user = resolve_acting_user(session_user, params.user_id.as_deref())?;

    let service = GuildSettingsService::new(&state.db, state.directory.as_ref());
    let settings = service
        .get(guild_id, acting_user, params.wants_serialized())
        .await?;

    Ok(Json(Value::Object(settings)))
}

/// Applies a batch of settings edits to a guild.
///
/// The whole batch commits in one transaction; the response is the
/// serialized canonical settings after the write.
#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/settings",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Serialized settings after the write", body = Object),
        (status = 400, description = "Empty batch or unknown settings key", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not manage this guild", body = ErrorDto),
        (status = 500, description = "Discord lookup or storage failure", body = ErrorDto)
    ),
)]
pub async fn update_guild_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<UpdateSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let session_user = AuthGuard::new(&session).require_user().await?;

    let service = GuildSettingsService::new(&state.db, state.directory.as_ref());
    let settings = service.update(guild_id, session_user, payload.data).await?;

    Ok(Json(Value::Object(settings)))
}

/// Picks the user the ability check runs against.
///
/// A malformed `userId` is a client error, not an internal one, so it maps
/// to 400 rather than going through the internal ID parse path.
fn resolve_acting_user(session_user: u64, requested: Option<&str>) -> Result<u64, AppError> {
    let Some(requested) = requested else {
        return Ok(session_user);
    };

    requested
        .parse::<u64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid userId parameter: {requested}")))
}
