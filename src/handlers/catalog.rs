// src/handlers/catalog.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        i18n::Locale,
        rbac::{PermInventoryWrite, RequirePermission},
    },
    models::catalog::{CreateProductPayload, Product, ScannedDraft, UpdateProductPayload},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListProductsQuery {
    // Filtro por nome ou SKU, como na busca da tela de estoque
    pub search: Option<String>,
}

// ---
// Handler: listagem do catálogo
// ---
#[utoipa::path(
    get,
    path = "/api/inventory/products",
    tag = "Inventory",
    params(ListProductsQuery),
    responses((status = 200, description = "Produtos do catálogo", body = Vec<Product>)),
    security(("api_jwt" = []))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<ListProductsQuery>,
) -> impl IntoResponse {
    let products = app_state.catalog_service.list(query.search.as_deref());
    (StatusCode::OK, Json(products))
}

// ---
// Handler: cadastro de produto
// ---
pub async fn create_product(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    _guard: RequirePermission<PermInventoryWrite>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let product = app_state
        .catalog_service
        .add(&user.permissions(), payload)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(product)))
}

// ---
// Handler: atualização (substituição integral)
// ---
pub async fn update_product(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    _guard: RequirePermission<PermInventoryWrite>,
    Path(product_id): Path<Uuid>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let product = app_state
        .catalog_service
        .update(&user.permissions(), product_id, payload)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(product)))
}

// ---
// Handler: leitor de código de barras simulado
// ---
#[utoipa::path(
    post,
    path = "/api/inventory/scan",
    tag = "Inventory",
    responses(
        (status = 200, description = "Rascunho de produto 'escaneado'", body = ScannedDraft),
        (status = 403, description = "Cargo sem acesso ao estoque")
    ),
    security(("api_jwt" = []))
)]
pub async fn scan_product(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    _guard: RequirePermission<PermInventoryWrite>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = app_state
        .catalog_service
        .scan(&user.permissions())
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(draft)))
}
