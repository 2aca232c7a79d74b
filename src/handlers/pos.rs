// src/handlers/pos.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        i18n::Locale,
        rbac::{PermSell, RequirePermission},
    },
    models::sales::{AddCartItemPayload, AdjustQuantityPayload, CartView, CheckoutPayload, Sale},
};

// Todas as rotas do PDV exigem o cargo com `pos:sell`, o equivalente
// da tela inteira de PDV ficar bloqueada para quem não vende.

#[utoipa::path(
    get,
    path = "/api/pos/cart",
    tag = "POS",
    responses((status = 200, description = "Carrinho em andamento com totais", body = CartView)),
    security(("api_jwt" = []))
)]
pub async fn get_cart(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    _guard: RequirePermission<PermSell>,
) -> impl IntoResponse {
    let view = app_state.checkout_service.cart_view(user.0.id);
    (StatusCode::OK, Json(view))
}

#[utoipa::path(
    post,
    path = "/api/pos/cart/items",
    tag = "POS",
    request_body = AddCartItemPayload,
    responses(
        (status = 200, description = "Produto adicionado (ou linha incrementada)", body = CartView),
        (status = 404, description = "Produto não existe no catálogo"),
        (status = 422, description = "Produto sem estoque")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_cart_item(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    _guard: RequirePermission<PermSell>,
    Json(payload): Json<AddCartItemPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let view = app_state
        .checkout_service
        .add_to_cart(&user.permissions(), user.0.id, payload.product_id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(view)))
}

#[utoipa::path(
    patch,
    path = "/api/pos/cart/items/{productId}",
    tag = "POS",
    request_body = AdjustQuantityPayload,
    responses(
        (status = 200, description = "Quantidade ajustada (piso de 1)", body = CartView),
        (status = 404, description = "Item não está no carrinho")
    ),
    security(("api_jwt" = []))
)]
pub async fn adjust_cart_item(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    _guard: RequirePermission<PermSell>,
    Path(product_id): Path<Uuid>,
    Json(payload): Json<AdjustQuantityPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let view = app_state
        .checkout_service
        .adjust_quantity(&user.permissions(), user.0.id, product_id, payload.delta)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(view)))
}

#[utoipa::path(
    delete,
    path = "/api/pos/cart/items/{productId}",
    tag = "POS",
    responses(
        (status = 200, description = "Linha removida", body = CartView),
        (status = 404, description = "Item não está no carrinho")
    ),
    security(("api_jwt" = []))
)]
pub async fn remove_cart_item(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    _guard: RequirePermission<PermSell>,
    Path(product_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let view = app_state
        .checkout_service
        .remove_line(&user.permissions(), user.0.id, product_id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(view)))
}

#[utoipa::path(
    post,
    path = "/api/pos/checkout",
    tag = "POS",
    request_body = CheckoutPayload,
    responses(
        (status = 201, description = "Venda fechada e registrada no ledger", body = Sale),
        (status = 422, description = "Carrinho vazio")
    ),
    security(("api_jwt" = []))
)]
pub async fn checkout(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    _guard: RequirePermission<PermSell>,
    Json(payload): Json<CheckoutPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let sale = app_state
        .checkout_service
        .checkout(&user.permissions(), user.0.id, payload.payment_method)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(sale)))
}
