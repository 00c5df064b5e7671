use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        auth::{get_user, logout},
        settings::{get_guild_settings, update_guild_settings},
    },
    model::{api, settings},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controller::auth::get_user,
        crate::controller::auth::logout,
        crate::controller::settings::get_guild_settings,
        crate::controller::settings::update_guild_settings,
    ),
    components(schemas(api::ErrorDto, api::SessionUserDto, settings::UpdateSettingsDto))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/user", get(get_user))
        .route("/api/auth/logout", get(logout))
        .route(
            "/api/guilds/{guild_id}/settings",
            get(get_guild_settings).patch(update_guild_settings),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
