// src/services/onboarding_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    models::auth::User,
    models::onboarding::IndustryTemplate,
    services::AuthService,
    store::{seed, CatalogStore},
};

#[derive(Clone)]
pub struct OnboardingService {
    catalog: Arc<CatalogStore>,
    auth: AuthService,
}

impl OnboardingService {
    pub fn new(catalog: Arc<CatalogStore>, auth: AuthService) -> Self {
        Self { catalog, auth }
    }

    pub fn templates(&self) -> Vec<IndustryTemplate> {
        seed::industry_templates()
    }

    /// Aplica o modelo de segmento escolhido no onboarding.
    ///
    /// Consumo único: só é válido enquanto a sessão ainda não tem segmento.
    /// Como efeito, o catálogo é substituído por inteiro pelos produtos-
    /// semente do modelo (ids novos) e o rótulo do segmento é carimbado na
    /// sessão persistida.
    pub fn select_industry(
        &self,
        user: &User,
        template_id: &str,
    ) -> Result<User, AppError> {
        if user.industry.is_some() {
            return Err(AppError::IndustryAlreadySet);
        }

        let template = seed::industry_templates()
            .into_iter()
            .find(|t| t.id == template_id)
            .ok_or(AppError::TemplateNotFound)?;

        let products: Vec<_> = template
            .initial_products
            .iter()
            .map(seed::product_from_seed)
            .collect();
        self.catalog.replace_all(products);

        let mut updated = user.clone();
        updated.industry = Some(template.name.clone());
        self.auth.persist_session(&updated)?;

        tracing::info!("🏪 Onboarding concluído: segmento '{}'", template.name);
        Ok(updated)
    }
}
