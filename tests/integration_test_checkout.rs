// tests/integration_test_checkout.rs

mod common;

use common::{parse_body, product_by_sku, TestApp};
use serde_json::json;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

async fn add_to_cart(app: &TestApp, token: &str, product_id: &str) -> serde_json::Value {
    let response = app
        .post(
            "/api/pos/cart/items",
            Some(token),
            Some(json!({ "productId": product_id })),
        )
        .await;
    assert_eq!(response.status(), 200);
    parse_body(response).await
}

// 2 x 28,00 -> subtotal 56,00, imposto 4,48, total 60,48.
// E o mesmo produto duas vezes vira UMA linha com qty 2.
#[tokio::test]
async fn test_same_product_twice_merges_into_one_line() {
    let app = TestApp::new();
    let token = app.login("CASHIER").await;

    let matcha = product_by_sku(&app, &token, "SP-001").await;
    let id = matcha["id"].as_str().unwrap();

    add_to_cart(&app, &token, id).await;
    let cart = add_to_cart(&app, &token, id).await;

    let items = cart["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 2);
    assert!(close(cart["subtotal"].as_f64().unwrap(), 56.00));
    assert!(close(cart["tax"].as_f64().unwrap(), 4.48));
    assert!(close(cart["total"].as_f64().unwrap(), 60.48));
}

#[tokio::test]
async fn test_checkout_commits_sale_and_decrements_stock() {
    let app = TestApp::new();
    let token = app.login("CASHIER").await;

    let matcha = product_by_sku(&app, &token, "SP-001").await;
    let id = matcha["id"].as_str().unwrap();
    assert_eq!(matcha["stock"], 45);

    add_to_cart(&app, &token, id).await;
    add_to_cart(&app, &token, id).await;

    let response = app
        .post(
            "/api/pos/checkout",
            Some(&token),
            Some(json!({ "paymentMethod": "PIX" })),
        )
        .await;
    assert_eq!(response.status(), 201);

    let sale = parse_body(response).await;
    assert!(close(sale["total"].as_f64().unwrap(), 60.48));
    assert_eq!(sale["paymentMethod"], "PIX");
    assert_eq!(sale["items"][0]["quantity"], 2);
    // O nome vai congelado na venda
    assert_eq!(sale["items"][0]["productName"], "Chá Matcha Orgânico");

    // Baixa exata no estoque
    let matcha = product_by_sku(&app, &token, "SP-001").await;
    assert_eq!(matcha["stock"], 43);

    // Carrinho esvazia depois do commit
    let response = app.get("/api/pos/cart", Some(&token)).await;
    let cart = parse_body(response).await;
    assert!(cart["items"].as_array().unwrap().is_empty());

    // O ledger ganhou exatamente uma venda, na frente da semente
    let manager_token = app.login("MANAGER").await;
    let response = app.get("/api/sales", Some(&manager_token)).await;
    let sales = parse_body(response).await;
    let sales = sales.as_array().unwrap();
    assert_eq!(sales.len(), 2);
    assert_eq!(sales[0]["id"], sale["id"]);
}

// Carrinho vazio: nada muda, ledger e estoque ficam como estavam.
#[tokio::test]
async fn test_checkout_on_empty_cart_changes_nothing() {
    let app = TestApp::new();
    let token = app.login("CASHIER").await;

    let response = app
        .post(
            "/api/pos/checkout",
            Some(&token),
            Some(json!({ "paymentMethod": "CASH" })),
        )
        .await;
    assert_eq!(response.status(), 422);

    let matcha = product_by_sku(&app, &token, "SP-001").await;
    assert_eq!(matcha["stock"], 45);

    let manager_token = app.login("MANAGER").await;
    let response = app.get("/api/sales", Some(&manager_token)).await;
    let sales = parse_body(response).await;
    assert_eq!(sales.as_array().unwrap().len(), 1); // só a venda-semente
}

// Comportamento herdado (e documentado): decrementar uma linha com
// quantidade 1 NÃO remove nem zera, a linha fica em 1. Remoção é a
// ação explícita.
#[tokio::test]
async fn test_decrement_at_quantity_one_keeps_the_line() {
    let app = TestApp::new();
    let token = app.login("CASHIER").await;

    let matcha = product_by_sku(&app, &token, "SP-001").await;
    let id = matcha["id"].as_str().unwrap();
    add_to_cart(&app, &token, id).await;

    let response = app
        .patch(
            &format!("/api/pos/cart/items/{}", id),
            Some(&token),
            Some(json!({ "delta": -1 })),
        )
        .await;
    assert_eq!(response.status(), 200);

    let cart = parse_body(response).await;
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
    assert_eq!(cart["items"][0]["quantity"], 1);
}

#[tokio::test]
async fn test_adjust_and_remove_lines() {
    let app = TestApp::new();
    let token = app.login("CASHIER").await;

    let matcha = product_by_sku(&app, &token, "SP-001").await;
    let id = matcha["id"].as_str().unwrap();
    add_to_cart(&app, &token, id).await;

    let response = app
        .patch(
            &format!("/api/pos/cart/items/{}", id),
            Some(&token),
            Some(json!({ "delta": 3 })),
        )
        .await;
    let cart = parse_body(response).await;
    assert_eq!(cart["items"][0]["quantity"], 4);

    let response = app
        .delete(&format!("/api/pos/cart/items/{}", id), Some(&token))
        .await;
    let cart = parse_body(response).await;
    assert!(cart["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_adjusting_missing_line_is_reported() {
    let app = TestApp::new();
    let token = app.login("CASHIER").await;

    let response = app
        .patch(
            "/api/pos/cart/items/00000000-0000-0000-0000-000000000000",
            Some(&token),
            Some(json!({ "delta": 1 })),
        )
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_product_with_zero_stock_cannot_enter_cart() {
    let app = TestApp::new();
    let manager_token = app.login("MANAGER").await;

    let response = app
        .post(
            "/api/inventory/products",
            Some(&manager_token),
            Some(json!({
                "sku": "ZR-001",
                "name": "Item Esgotado",
                "category": "Teste",
                "price": 10.0,
                "stock": 0
            })),
        )
        .await;
    let created = parse_body(response).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .post(
            "/api/pos/cart/items",
            Some(&manager_token),
            Some(json!({ "productId": id })),
        )
        .await;
    assert_eq!(response.status(), 422);
}

// A baixa não trava em zero: vender além do saldo via ajuste de
// quantidade deixa o estoque negativo (estado legal, vira alerta).
#[tokio::test]
async fn test_stock_goes_negative_when_selling_beyond_balance() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let caneca = product_by_sku(&app, &token, "SP-002").await;
    let id = caneca["id"].as_str().unwrap();
    assert_eq!(caneca["stock"], 8);

    add_to_cart(&app, &token, id).await;
    let response = app
        .patch(
            &format!("/api/pos/cart/items/{}", id),
            Some(&token),
            Some(json!({ "delta": 9 })),
        )
        .await;
    assert_eq!(response.status(), 200);

    let response = app
        .post(
            "/api/pos/checkout",
            Some(&token),
            Some(json!({ "paymentMethod": "DEBIT" })),
        )
        .await;
    assert_eq!(response.status(), 201);

    let caneca = product_by_sku(&app, &token, "SP-002").await;
    assert_eq!(caneca["stock"], -2);
}

// O preço congelado na linha não acompanha reajustes posteriores do
// catálogo.
#[tokio::test]
async fn test_price_at_sale_ignores_later_repricing() {
    let app = TestApp::new();
    let token = app.login("MANAGER").await;

    let matcha = product_by_sku(&app, &token, "SP-001").await;
    let id = matcha["id"].as_str().unwrap();
    add_to_cart(&app, &token, id).await;

    // Reajusta o preço do produto com o item já no carrinho
    let response = app
        .put(
            &format!("/api/inventory/products/{}", id),
            Some(&token),
            Some(json!({
                "sku": "SP-001",
                "name": "Chá Matcha Orgânico",
                "category": "Bebidas",
                "cost": 12.5,
                "price": 99.0,
                "stock": 45,
                "minStock": 10,
                "unit": "lata",
                "supplier": "TeaCo"
            })),
        )
        .await;
    assert_eq!(response.status(), 200);

    let response = app
        .post(
            "/api/pos/checkout",
            Some(&token),
            Some(json!({ "paymentMethod": "CREDIT" })),
        )
        .await;
    let sale = parse_body(response).await;

    assert!(close(sale["items"][0]["priceAtSale"].as_f64().unwrap(), 28.00));
    assert!(close(sale["total"].as_f64().unwrap(), 30.24)); // 28,00 + 8%
}
