// tests/common.rs

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use stockpilot::{
    config::AppState,
    models::catalog::Product,
    models::insights::ProductSuggestion,
    models::sales::Sale,
    router::create_router,
    services::InsightService,
    store::MemoryKvStore,
};

// Dublê determinístico do colaborador de IA: nada de rede nos testes.
pub struct StubInsightService;

#[async_trait]
impl InsightService for StubInsightService {
    async fn generate_insights(&self, products: &[Product], _recent_sales: &[Sale]) -> String {
        format!("Relatório de teste cobrindo {} produtos", products.len())
    }

    async fn analyze_product_image(&self, image_base64: &str) -> Option<ProductSuggestion> {
        if image_base64.is_empty() {
            return None;
        }
        Some(ProductSuggestion {
            name: "Caneca Cerâmica".to_string(),
            category: "Cozinha".to_string(),
            description: "Caneca branca de cerâmica esmaltada".to_string(),
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_insight_service(Arc::new(StubInsightService))
    }

    pub fn with_insight_service(insight: Arc<dyn InsightService>) -> Self {
        let state = AppState::assemble(
            Arc::new(MemoryKvStore::new()),
            insight,
            "segredo-de-teste".to_string(),
            None,
        );

        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    /// Login de demonstração; devolve o Bearer token da sessão.
    pub async fn login(&self, role: &str) -> String {
        let response = self
            .post(
                "/api/auth/login",
                None,
                Some(serde_json::json!({ "role": role })),
            )
            .await;
        assert_eq!(response.status(), 200, "login deveria funcionar");

        let body = parse_body(response).await;
        body["token"].as_str().expect("token na resposta").to_string()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        self.send("GET", uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
        self.send("POST", uri, token, body).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
        self.send("PUT", uri, token, body).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
        self.send("PATCH", uri, token, body).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response {
        self.send("DELETE", uri, token, None).await
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Procura um produto pelo SKU na listagem do catálogo.
pub async fn product_by_sku(app: &TestApp, token: &str, sku: &str) -> Value {
    let response = app.get("/api/inventory/products", Some(token)).await;
    assert_eq!(response.status(), 200);

    let products = parse_body(response).await;
    products
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["sku"] == sku)
        .cloned()
        .unwrap_or_else(|| panic!("produto {} não encontrado no catálogo", sku))
}
