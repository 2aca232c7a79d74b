// src/handlers/settings.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::settings::{ThemePreference, ThemeSettings},
    store::THEME_KEY,
};

// Preferência de tema, persistida na chave de tema do KV.
// O padrão do produto é o tema escuro.
#[utoipa::path(
    get,
    path = "/api/settings/theme",
    tag = "Settings",
    responses((status = 200, description = "Tema atual", body = ThemeSettings)),
    security(("api_jwt" = []))
)]
pub async fn get_theme(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> impl IntoResponse {
    let theme = app_state
        .kv
        .get(THEME_KEY)
        .and_then(|raw| ThemePreference::parse(&raw))
        .unwrap_or(ThemePreference::Dark);

    (StatusCode::OK, Json(ThemeSettings { theme }))
}

#[utoipa::path(
    put,
    path = "/api/settings/theme",
    tag = "Settings",
    request_body = ThemeSettings,
    responses((status = 200, description = "Tema gravado", body = ThemeSettings)),
    security(("api_jwt" = []))
)]
pub async fn update_theme(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Json(payload): Json<ThemeSettings>,
) -> impl IntoResponse {
    app_state.kv.set(THEME_KEY, payload.theme.as_str());
    (StatusCode::OK, Json(payload))
}
