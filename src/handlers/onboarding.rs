// src/handlers/onboarding.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::auth::User,
    models::onboarding::{IndustryTemplate, SelectIndustryPayload},
};

#[utoipa::path(
    get,
    path = "/api/onboarding/templates",
    tag = "Onboarding",
    responses((status = 200, description = "Modelos de segmento disponíveis", body = Vec<IndustryTemplate>)),
    security(("api_jwt" = []))
)]
pub async fn list_templates(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.onboarding_service.templates()))
}

// Consumo único do modelo: o catálogo inteiro é substituído pela semente
// do segmento e a sessão sai carimbada com o rótulo.
#[utoipa::path(
    post,
    path = "/api/onboarding/select",
    tag = "Onboarding",
    request_body = SelectIndustryPayload,
    responses(
        (status = 200, description = "Segmento aplicado; sessão atualizada", body = User),
        (status = 404, description = "Modelo não encontrado"),
        (status = 422, description = "Segmento já escolhido")
    ),
    security(("api_jwt" = []))
)]
pub async fn select_industry(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    Json(payload): Json<SelectIndustryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = app_state
        .onboarding_service
        .select_industry(&user.0, &payload.template_id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(updated)))
}
