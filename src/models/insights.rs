// src/models/insights.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Texto livre vindo do colaborador de IA (ou o texto de contingência)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
    pub insight: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImagePayload {
    // JPEG codificado em base64, sem o prefixo data-URL
    pub image_base64: String,
}

// Palpite estruturado extraído da resposta da IA para uma foto de produto.
// Ausente quando a resposta não trouxe um bloco JSON aproveitável.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSuggestion {
    pub name: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageResponse {
    pub suggestion: Option<ProductSuggestion>,
}
