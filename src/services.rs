pub mod auth;
pub mod catalog_service;
pub mod checkout_service;
pub mod dashboard_service;
pub mod insight_service;
pub mod onboarding_service;
pub mod receipt_service;

pub use auth::AuthService;
pub use catalog_service::CatalogService;
pub use checkout_service::CheckoutService;
pub use dashboard_service::DashboardService;
pub use insight_service::{GeminiInsightService, InsightService};
pub use onboarding_service::OnboardingService;
pub use receipt_service::ReceiptService;
