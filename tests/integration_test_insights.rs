// tests/integration_test_insights.rs

mod common;

use std::sync::Arc;

use common::{parse_body, TestApp};
use serde_json::json;
use stockpilot::services::GeminiInsightService;

#[tokio::test]
async fn test_insights_come_from_injected_collaborator() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app.post("/api/insights/generate", Some(&token), None).await;
    assert_eq!(response.status(), 200);

    let body = parse_body(response).await;
    // O dublê descreve o retrato que recebeu: os 3 produtos da semente
    assert_eq!(body["insight"], "Relatório de teste cobrindo 3 produtos");
}

#[tokio::test]
async fn test_image_analysis_returns_structured_suggestion() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app
        .post(
            "/api/insights/analyze-image",
            Some(&token),
            Some(json!({ "imageBase64": "aGVsbG8=" })),
        )
        .await;
    assert_eq!(response.status(), 200);

    let body = parse_body(response).await;
    assert_eq!(body["suggestion"]["name"], "Caneca Cerâmica");
    assert_eq!(body["suggestion"]["category"], "Cozinha");
}

#[tokio::test]
async fn test_image_analysis_degrades_to_null_suggestion() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app
        .post(
            "/api/insights/analyze-image",
            Some(&token),
            Some(json!({ "imageBase64": "" })),
        )
        .await;
    assert_eq!(response.status(), 200);

    let body = parse_body(response).await;
    assert!(body["suggestion"].is_null());
}

// Sem chave de API não há chamada de rede nenhuma: a implementação real
// degrada direto para o texto de contingência, e a tela segue de pé.
#[tokio::test]
async fn test_missing_api_key_falls_back_to_fixed_text() {
    let app = TestApp::with_insight_service(Arc::new(GeminiInsightService::new(None)));
    let token = app.login("MANAGER").await;

    let response = app.post("/api/insights/generate", Some(&token), None).await;
    assert_eq!(response.status(), 200);

    let body = parse_body(response).await;
    assert_eq!(
        body["insight"],
        "Chave de API ausente. Configure o ambiente para receber insights da IA."
    );

    let response = app
        .post(
            "/api/insights/analyze-image",
            Some(&token),
            Some(json!({ "imageBase64": "aGVsbG8=" })),
        )
        .await;
    let body = parse_body(response).await;
    assert!(body["suggestion"].is_null());
}
