// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    config::AppState,
    middleware::auth::AuthenticatedUser,
    // Importamos os models para referenciar no Swagger
    models::dashboard::{DashboardSummary, DashboardTip, SalesTrendEntry, TopProductEntry},
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo operacional do dia (faturamento só para quem enxerga o financeiro)", body = DashboardSummary),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> impl IntoResponse {
    let summary = app_state.dashboard_service.summary(&user.permissions());
    (StatusCode::OK, Json(summary))
}

// GET /api/dashboard/top-products
#[utoipa::path(
    get,
    path = "/api/dashboard/top-products",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Curva ABC: os 5 produtos mais vendidos", body = Vec<TopProductEntry>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_top_products(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.dashboard_service.top_products()))
}

// GET /api/dashboard/sales-trend
#[utoipa::path(
    get,
    path = "/api/dashboard/sales-trend",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Vendas por dia (últimos 7 dias)", body = Vec<SalesTrendEntry>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_sales_trend(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.dashboard_service.sales_trend()))
}

// GET /api/dashboard/tips
#[utoipa::path(
    get,
    path = "/api/dashboard/tips",
    tag = "Dashboard",
    responses((status = 200, description = "Dicas fixas de gestão", body = Vec<DashboardTip>)),
    security(("api_jwt" = []))
)]
pub async fn get_tips(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.dashboard_service.tips()))
}
