// src/router.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::handlers;
use crate::middleware::auth::auth_guard;

/// Monta o router completo. Fica fora do `main` para os testes de
/// integração conseguirem disparar requisições direto nele.
pub fn create_router(app_state: AppState) -> Router {
    // Rotas de autenticação: login é público, logout exige sessão
    let auth_public = Router::new().route("/login", post(handlers::auth::login));
    let auth_protected = Router::new()
        .route("/logout", post(handlers::auth::logout))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let user_routes = Router::new()
        .route(
            "/me",
            get(handlers::auth::get_me).put(handlers::auth::update_profile),
        )
        .route("/me/permissions", get(handlers::auth::my_permissions))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let onboarding_routes = Router::new()
        .route("/templates", get(handlers::onboarding::list_templates))
        .route("/select", post(handlers::onboarding::select_industry))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let inventory_routes = Router::new()
        .route(
            "/products",
            post(handlers::catalog::create_product).get(handlers::catalog::list_products),
        )
        .route(
            "/products/{product_id}",
            axum::routing::put(handlers::catalog::update_product),
        )
        .route("/scan", post(handlers::catalog::scan_product))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let pos_routes = Router::new()
        .route("/cart", get(handlers::pos::get_cart))
        .route("/cart/items", post(handlers::pos::add_cart_item))
        .route(
            "/cart/items/{product_id}",
            axum::routing::patch(handlers::pos::adjust_cart_item)
                .delete(handlers::pos::remove_cart_item),
        )
        .route("/checkout", post(handlers::pos::checkout))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let sales_routes = Router::new()
        .route("/", get(handlers::sales::list_sales))
        .route("/{sale_id}/receipt", get(handlers::sales::sale_receipt))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/top-products", get(handlers::dashboard::get_top_products))
        .route("/sales-trend", get(handlers::dashboard::get_sales_trend))
        .route("/tips", get(handlers::dashboard::get_tips))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let insight_routes = Router::new()
        .route("/generate", post(handlers::insights::generate_insights))
        .route("/analyze-image", post(handlers::insights::analyze_image))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let settings_routes = Router::new()
        .route(
            "/theme",
            get(handlers::settings::get_theme).put(handlers::settings::update_theme),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_public.merge(auth_protected))
        .nest("/api/users", user_routes)
        .nest("/api/onboarding", onboarding_routes)
        .nest("/api/inventory", inventory_routes)
        .nest("/api/pos", pos_routes)
        .nest("/api/sales", sales_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/insights", insight_routes)
        .nest("/api/settings", settings_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}
