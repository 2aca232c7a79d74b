// src/config.rs

use std::env;
use std::sync::Arc;

use crate::{
    common::i18n::I18nStore,
    services::{
        AuthService, CatalogService, CheckoutService, DashboardService, GeminiInsightService,
        InsightService, OnboardingService, ReceiptService,
    },
    store::{seed, CatalogStore, FileKvStore, KeyValueStore, SaleLedger},
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub ledger: Arc<SaleLedger>,
    pub kv: Arc<dyn KeyValueStore>,
    pub i18n_store: Arc<I18nStore>,
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub checkout_service: CheckoutService,
    pub onboarding_service: OnboardingService,
    pub dashboard_service: DashboardService,
    pub insight_service: Arc<dyn InsightService>,
    pub receipt_service: ReceiptService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // O "localStorage" do backend: um arquivo JSON com as duas chaves
        let kv_path =
            env::var("STOCKPILOT_KV_PATH").unwrap_or_else(|_| "stockpilot-kv.json".to_string());
        let kv: Arc<dyn KeyValueStore> = Arc::new(FileKvStore::open(kv_path));

        // Sem chave, o painel de IA degrada para o texto de contingência
        let gemini_api_key = env::var("GEMINI_API_KEY").ok();
        if gemini_api_key.is_none() {
            tracing::warn!("⚠️ GEMINI_API_KEY não definida; insights ficam em modo contingência");
        }
        let insight_service: Arc<dyn InsightService> =
            Arc::new(GeminiInsightService::new(gemini_api_key));

        let pix_key = env::var("PIX_KEY").ok();

        Ok(Self::assemble(kv, insight_service, jwt_secret, pix_key))
    }

    /// Monta o gráfico de dependências a partir das partes injetáveis.
    /// Os testes passam um KV em memória e um dublê de IA por aqui.
    pub fn assemble(
        kv: Arc<dyn KeyValueStore>,
        insight_service: Arc<dyn InsightService>,
        jwt_secret: String,
        pix_key: Option<String>,
    ) -> Self {
        // Catálogo e ledger nascem com a semente padrão da aplicação
        let products = seed::default_products();
        let sales = seed::initial_sales(&products);

        let catalog = Arc::new(CatalogStore::with_products(products));
        let ledger = Arc::new(SaleLedger::with_sales(sales));

        let auth_service = AuthService::new(kv.clone(), jwt_secret);
        let catalog_service = CatalogService::new(catalog.clone());
        let checkout_service = CheckoutService::new(catalog.clone(), ledger.clone());
        let onboarding_service = OnboardingService::new(catalog.clone(), auth_service.clone());
        let dashboard_service = DashboardService::new(catalog.clone(), ledger.clone());
        let receipt_service = ReceiptService::new(pix_key);

        Self {
            catalog,
            ledger,
            kv,
            i18n_store: Arc::new(I18nStore::new()),
            auth_service,
            catalog_service,
            checkout_service,
            onboarding_service,
            dashboard_service,
            insight_service,
            receipt_service,
        }
    }
}
