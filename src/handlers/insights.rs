// src/handlers/insights.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::insights::{AnalyzeImagePayload, AnalyzeImageResponse, InsightResponse},
};

// O colaborador de IA nunca devolve erro para cá: na pior hipótese o
// texto que chega é o de contingência, e a tela segue funcionando.
#[utoipa::path(
    post,
    path = "/api/insights/generate",
    tag = "Insights",
    responses((status = 200, description = "Relatório textual da IA (ou contingência)", body = InsightResponse)),
    security(("api_jwt" = []))
)]
pub async fn generate_insights(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> impl IntoResponse {
    let products = app_state.catalog.all();
    let sales = app_state.ledger.all();

    let insight = app_state
        .insight_service
        .generate_insights(&products, &sales)
        .await;

    (StatusCode::OK, Json(InsightResponse { insight }))
}

// Palpite de cadastro a partir de uma foto. `suggestion: null` quando a
// resposta da IA não trouxe um bloco JSON aproveitável.
#[utoipa::path(
    post,
    path = "/api/insights/analyze-image",
    tag = "Insights",
    request_body = AnalyzeImagePayload,
    responses((status = 200, description = "Sugestão extraída (ou nula)", body = AnalyzeImageResponse)),
    security(("api_jwt" = []))
)]
pub async fn analyze_image(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Json(payload): Json<AnalyzeImagePayload>,
) -> impl IntoResponse {
    let suggestion = app_state
        .insight_service
        .analyze_product_image(&payload.image_base64)
        .await;

    (StatusCode::OK, Json(AnalyzeImageResponse { suggestion }))
}
