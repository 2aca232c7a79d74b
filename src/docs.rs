// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::logout,

        // --- Users ---
        handlers::auth::get_me,
        handlers::auth::my_permissions,
        handlers::auth::update_profile,

        // --- Onboarding ---
        handlers::onboarding::list_templates,
        handlers::onboarding::select_industry,

        // --- INVENTORY ---
        handlers::catalog::list_products,
        handlers::catalog::scan_product,

        // --- POS ---
        handlers::pos::get_cart,
        handlers::pos::add_cart_item,
        handlers::pos::adjust_cart_item,
        handlers::pos::remove_cart_item,
        handlers::pos::checkout,

        // --- Sales ---
        handlers::sales::list_sales,
        handlers::sales::sale_receipt,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_top_products,
        handlers::dashboard::get_sales_trend,
        handlers::dashboard::get_tips,

        // --- Insights (IA) ---
        handlers::insights::generate_insights,
        handlers::insights::analyze_image,

        // --- Settings ---
        handlers::settings::get_theme,
        handlers::settings::update_theme,
    ),
    components(schemas(
        models::auth::User,
        models::auth::UserRole,
        models::auth::PlanTier,
        models::auth::LoginPayload,
        models::auth::AuthResponse,
        models::auth::UpdateProfilePayload,
        models::rbac::PermissionSet,
        models::catalog::Product,
        models::catalog::CreateProductPayload,
        models::catalog::UpdateProductPayload,
        models::catalog::ScannedDraft,
        models::sales::Sale,
        models::sales::SaleItem,
        models::sales::PaymentMethod,
        models::sales::CartView,
        models::sales::AddCartItemPayload,
        models::sales::AdjustQuantityPayload,
        models::sales::CheckoutPayload,
        models::onboarding::IndustryTemplate,
        models::onboarding::ProductSeed,
        models::onboarding::SelectIndustryPayload,
        models::dashboard::DashboardSummary,
        models::dashboard::TopProductEntry,
        models::dashboard::SalesTrendEntry,
        models::dashboard::DashboardTip,
        models::insights::InsightResponse,
        models::insights::AnalyzeImagePayload,
        models::insights::AnalyzeImageResponse,
        models::insights::ProductSuggestion,
        models::settings::ThemeSettings,
        models::settings::ThemePreference,
    )),
    tags(
        (name = "Auth", description = "Autenticação (demo: cargo escolhido no login)"),
        (name = "Users", description = "Dados do Usuário, Perfil e Permissões"),
        (name = "Onboarding", description = "Modelos de segmento e semente do catálogo"),
        (name = "Inventory", description = "Gestão de Estoque e Produtos"),
        (name = "POS", description = "Carrinho e Fechamento de Venda"),
        (name = "Sales", description = "Ledger de Vendas e Recibos"),
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais"),
        (name = "Insights", description = "Relatórios gerados por IA"),
        (name = "Settings", description = "Preferências do Cliente")
    ),
    modifiers(&SecurityAddon),
    info(
        title = "StockPilot API",
        description = "Gestão de estoque e PDV para pequenos negócios"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
