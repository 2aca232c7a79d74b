// src/models/onboarding.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Produto-semente de um modelo de segmento. Vira `Product` (com id novo)
// quando o modelo é aplicado no onboarding.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSeed {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub cost: Decimal,
    pub price: Decimal,
    pub stock: i64,
    pub min_stock: i64,
    pub unit: String,
    pub supplier: Option<String>,
}

// Modelo de segmento: dados de referência imutáveis, consumidos uma única
// vez na escolha do onboarding.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndustryTemplate {
    #[schema(example = "retail_fashion")]
    pub id: String,

    #[schema(example = "Varejo de Moda")]
    pub name: String,

    pub description: String,
    pub categories: Vec<String>,

    // Nome do ícone no cliente (referência Lucide)
    pub icon_name: String,

    pub initial_products: Vec<ProductSeed>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectIndustryPayload {
    #[schema(example = "restaurant")]
    pub template_id: String,
}
