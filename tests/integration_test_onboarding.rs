// tests/integration_test_onboarding.rs

mod common;

use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_owner_logs_in_without_industry() {
    let app = TestApp::new();

    let response = app
        .post("/api/auth/login", None, Some(json!({ "role": "OWNER" })))
        .await;
    let body = parse_body(response).await;

    assert!(body["user"]["industry"].is_null());
    assert_eq!(body["user"]["name"], "Alex Rivera");
}

// Cargos que não passam pelo onboarding já entram com segmento carimbado.
#[tokio::test]
async fn test_non_owner_skips_onboarding() {
    let app = TestApp::new();

    let response = app
        .post("/api/auth/login", None, Some(json!({ "role": "CASHIER" })))
        .await;
    let body = parse_body(response).await;

    assert_eq!(body["user"]["industry"], "Varejo");
}

#[tokio::test]
async fn test_templates_catalog_is_complete() {
    let app = TestApp::new();
    let token = app.login("OWNER").await;

    let response = app.get("/api/onboarding/templates", Some(&token)).await;
    assert_eq!(response.status(), 200);

    let templates = parse_body(response).await;
    let ids: Vec<_> = templates
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(ids, vec!["retail_fashion", "restaurant", "salon", "auto"]);
}

// Escolher o segmento troca o catálogo inteiro pela semente do modelo e
// carimba o rótulo na sessão.
#[tokio::test]
async fn test_selecting_template_reseeds_catalog_and_stamps_industry() {
    let app = TestApp::new();
    let token = app.login("OWNER").await;

    let response = app
        .post(
            "/api/onboarding/select",
            Some(&token),
            Some(json!({ "templateId": "restaurant" })),
        )
        .await;
    assert_eq!(response.status(), 200);

    let user = parse_body(response).await;
    assert_eq!(user["industry"], "Restaurante & Café");

    // O catálogo agora é exatamente a semente do modelo (a antiga some)
    let response = app.get("/api/inventory/products", Some(&token)).await;
    let products = parse_body(response).await;
    let skus: Vec<_> = products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["sku"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(skus, vec!["R-001", "R-002"]);

    // E a sessão persistida reflete o segmento
    let response = app.get("/api/users/me", Some(&token)).await;
    let me = parse_body(response).await;
    assert_eq!(me["industry"], "Restaurante & Café");
}

#[tokio::test]
async fn test_unknown_template_is_reported() {
    let app = TestApp::new();
    let token = app.login("OWNER").await;

    let response = app
        .post(
            "/api/onboarding/select",
            Some(&token),
            Some(json!({ "templateId": "padaria" })),
        )
        .await;
    assert_eq!(response.status(), 404);
}

// Consumo único: com o segmento já escolhido, escolher de novo é erro.
#[tokio::test]
async fn test_template_selection_is_single_use() {
    let app = TestApp::new();
    let token = app.login("OWNER").await;

    let response = app
        .post(
            "/api/onboarding/select",
            Some(&token),
            Some(json!({ "templateId": "salon" })),
        )
        .await;
    assert_eq!(response.status(), 200);

    let response = app
        .post(
            "/api/onboarding/select",
            Some(&token),
            Some(json!({ "templateId": "auto" })),
        )
        .await;
    assert_eq!(response.status(), 422);
}

// Logout devolve o catálogo para a semente padrão da aplicação,
// não importa o que a sessão tenha mexido.
#[tokio::test]
async fn test_logout_resets_catalog_to_default_seed() {
    let app = TestApp::new();
    let token = app.login("OWNER").await;

    app.post(
        "/api/onboarding/select",
        Some(&token),
        Some(json!({ "templateId": "auto" })),
    )
    .await;

    let response = app.post("/api/auth/logout", Some(&token), None).await;
    assert_eq!(response.status(), 204);

    let token = app.login("MANAGER").await;
    let response = app.get("/api/inventory/products", Some(&token)).await;
    let products = parse_body(response).await;
    let skus: Vec<_> = products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["sku"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(skus, vec!["SP-001", "SP-002", "SP-003"]);
}

#[tokio::test]
async fn test_token_dies_with_logout() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    app.post("/api/auth/logout", Some(&token), None).await;

    let response = app.get("/api/users/me", Some(&token)).await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_profile_update_is_persisted_in_session() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app
        .put(
            "/api/users/me",
            Some(&token),
            Some(json!({
                "name": "Marina Costa",
                "phone": "(11) 98888-7777"
            })),
        )
        .await;
    assert_eq!(response.status(), 200);

    let response = app.get("/api/users/me", Some(&token)).await;
    let me = parse_body(response).await;
    assert_eq!(me["name"], "Marina Costa");
    assert_eq!(me["phone"], "(11) 98888-7777");
    // O cargo não muda por aqui
    assert_eq!(me["role"], "MANAGER");
}
