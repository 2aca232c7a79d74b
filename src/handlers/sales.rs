// src/handlers/sales.rs

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        i18n::Locale,
        rbac::{PermFinancialsRead, PermSell, RequirePermission},
    },
    models::sales::Sale,
};

// Histórico de vendas: dado financeiro, então só para quem enxerga
// o financeiro.
#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sales",
    responses((status = 200, description = "Ledger de vendas, mais recente primeiro", body = Vec<Sale>)),
    security(("api_jwt" = []))
)]
pub async fn list_sales(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    _guard: RequirePermission<PermFinancialsRead>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.ledger.all()))
}

// Recibo em PDF de uma venda fechada (quem vende, emite recibo)
#[utoipa::path(
    get,
    path = "/api/sales/{saleId}/receipt",
    tag = "Sales",
    responses(
        (status = 200, description = "Recibo em PDF", content_type = "application/pdf"),
        (status = 404, description = "Venda não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn sale_receipt(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    _guard: RequirePermission<PermSell>,
    Path(sale_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let sale = app_state
        .ledger
        .get(sale_id)
        .ok_or_else(|| AppError::SaleNotFound.to_api_error(&locale, &app_state.i18n_store))?;

    let pdf = app_state
        .receipt_service
        .render_receipt(&sale, user.0.company_name.as_deref())
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/pdf")],
        pdf,
    ))
}
