// tests/integration_test_catalog.rs

mod common;

use common::{parse_body, product_by_sku, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_catalog_starts_with_default_seed() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app.get("/api/inventory/products", Some(&token)).await;
    assert_eq!(response.status(), 200);

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
async fn test_create_product_appends_to_catalog() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app
        .post(
            "/api/inventory/products",
            Some(&token),
            Some(json!({
                "sku": "SP-004",
                "name": "Colher Medidora",
                "category": "Cozinha",
                "cost": 2.5,
                "price": 9.9,
                "stock": 30,
                "minStock": 10,
                "unit": "un",
                "supplier": "Ceramix"
            })),
        )
        .await;
    assert_eq!(response.status(), 201);

    let created = parse_body(response).await;
    assert!(created["id"].is_string());
    assert_eq!(created["name"], "Colher Medidora");

    let listed = product_by_sku(&app, &token, "SP-004").await;
    assert_eq!(listed["stock"], 30);
}

#[tokio::test]
async fn test_search_matches_name_and_sku() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app
        .get("/api/inventory/products?search=matcha", Some(&token))
        .await;
    let products = parse_body(response).await;
    assert_eq!(products.as_array().unwrap().len(), 1);
    assert_eq!(products[0]["sku"], "SP-001");

    let response = app
        .get("/api/inventory/products?search=sp-002", Some(&token))
        .await;
    let products = parse_body(response).await;
    assert_eq!(products.as_array().unwrap().len(), 1);
    assert_eq!(products[0]["name"], "Caneca Cerâmica - Branca");
}

#[tokio::test]
async fn test_update_replaces_whole_product() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let product = product_by_sku(&app, &token, "SP-002").await;
    let id = product["id"].as_str().unwrap();

    let response = app
        .put(
            &format!("/api/inventory/products/{}", id),
            Some(&token),
            Some(json!({
                "sku": "SP-002",
                "name": "Caneca Cerâmica - Azul",
                "category": "Cozinha",
                "cost": 3.2,
                "price": 14.5,
                "stock": 20,
                "minStock": 15,
                "unit": "un",
                "supplier": "Ceramix"
            })),
        )
        .await;
    assert_eq!(response.status(), 200);

    let updated = product_by_sku(&app, &token, "SP-002").await;
    assert_eq!(updated["name"], "Caneca Cerâmica - Azul");
    assert_eq!(updated["stock"], 20);
    assert_eq!(updated["id"].as_str().unwrap(), id);
}

// Decisão registrada: atualização de id desconhecido é erro reportado,
// não um no-op silencioso.
#[tokio::test]
async fn test_update_unknown_product_is_reported() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app
        .put(
            "/api/inventory/products/00000000-0000-0000-0000-000000000000",
            Some(&token),
            Some(json!({
                "sku": "GHOST",
                "name": "Fantasma",
                "category": "Nada",
                "cost": 0.0,
                "price": 0.0,
                "stock": 0
            })),
        )
        .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_create_product_requires_sku_and_name() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app
        .post(
            "/api/inventory/products",
            Some(&token),
            Some(json!({ "sku": "", "name": "", "category": "Teste" })),
        )
        .await;

    assert_eq!(response.status(), 400);
    let body = parse_body(response).await;
    assert!(body["details"]["sku"].is_array());
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_negative_price_is_rejected() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app
        .post(
            "/api/inventory/products",
            Some(&token),
            Some(json!({
                "sku": "NEG-1",
                "name": "Preço Negativo",
                "category": "Teste",
                "price": -5.0
            })),
        )
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_scanner_returns_prefilled_draft() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app.post("/api/inventory/scan", Some(&token), None).await;
    assert_eq!(response.status(), 200);

    let draft = parse_body(response).await;
    assert!(draft["sku"].as_str().unwrap().starts_with("SCAN-"));
    assert_eq!(draft["name"], "Item Escaneado Exemplo");
}

// O idioma da mensagem de erro segue o Accept-Language (padrão inglês);
// aqui conferimos o fallback em inglês do corpo de erro.
#[tokio::test]
async fn test_not_found_error_has_message_body() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let response = app
        .put(
            "/api/inventory/products/00000000-0000-0000-0000-000000000000",
            Some(&token),
            Some(json!({
                "sku": "GHOST",
                "name": "Fantasma",
                "category": "Nada"
            })),
        )
        .await;

    assert_eq!(response.status(), 404);
    let body = parse_body(response).await;
    assert_eq!(body["error"], "Product not found.");
}
