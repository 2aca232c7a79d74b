// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::auth::{AuthResponse, LoginPayload, UpdateProfilePayload, User},
    models::rbac::PermissionSet,
    store::seed,
};

// Handler de login (demonstração: o cargo é escolhido na tela)
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Sessão criada, token emitido", body = AuthResponse),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let (token, user) = app_state
        .auth_service
        .login(payload)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(AuthResponse { token, user })))
}

// Handler de logout. Além de derrubar a sessão, o catálogo volta para a
// semente padrão da aplicação e o carrinho em andamento é descartado.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses((status = 204, description = "Sessão encerrada")),
    security(("api_jwt" = []))
)]
pub async fn logout(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> impl IntoResponse {
    app_state.checkout_service.clear_cart(user.0.id);
    app_state.catalog.replace_all(seed::default_products());
    app_state.auth_service.clear_session();

    tracing::info!("👋 Sessão encerrada para {}", user.0.email);
    StatusCode::NO_CONTENT
}

// Handler da rota protegida /me
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    responses((status = 200, description = "Usuário da sessão", body = User)),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}

// As capacidades do cargo atual: é com isso que o cliente decide quais
// telas e botões exibir. Só conveniência de UI; cada operação mutante
// revalida a permissão no motor.
#[utoipa::path(
    get,
    path = "/api/users/me/permissions",
    tag = "Users",
    responses((status = 200, description = "Capacidades derivadas do cargo", body = PermissionSet)),
    security(("api_jwt" = []))
)]
pub async fn my_permissions(user: AuthenticatedUser) -> Json<PermissionSet> {
    Json(user.permissions())
}

// Edição de perfil (regrava a chave de sessão)
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "Users",
    request_body = UpdateProfilePayload,
    responses(
        (status = 200, description = "Perfil atualizado", body = User),
        (status = 400, description = "Payload inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_profile(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let updated = app_state
        .auth_service
        .update_profile(&user.0, payload)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(updated)))
}
