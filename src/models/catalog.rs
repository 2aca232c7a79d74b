// src/models/catalog.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// ---
// Validação Customizada
// ---
pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// O produto do catálogo. O estoque é um inteiro que pode legalmente
// chegar a zero (e ficar negativo numa baixa maior que o saldo).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub cost: Decimal,
    pub price: Decimal,
    pub stock: i64,
    pub min_stock: i64,
    pub unit: String,
    pub supplier: Option<String>,
    pub last_restock_date: Option<DateTime<Utc>>,
}

fn default_min_stock() -> i64 {
    5
}

fn default_unit() -> String {
    "un".to_string()
}

// ---
// Payload: criação de produto
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(length(min = 1, message = "O SKU é obrigatório."))]
    pub sku: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)] // Se o JSON não tiver esse campo, assume 0
    pub cost: Decimal,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub price: Decimal,

    #[serde(default)]
    pub stock: i64,

    #[serde(default = "default_min_stock")]
    pub min_stock: i64,

    #[serde(default = "default_unit")]
    pub unit: String,

    pub supplier: Option<String>,
}

// A atualização substitui o produto inteiro (o id vem da rota).
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    #[validate(length(min = 1, message = "O SKU é obrigatório."))]
    pub sku: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub cost: Decimal,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub price: Decimal,

    #[serde(default)]
    pub stock: i64,

    #[serde(default = "default_min_stock")]
    pub min_stock: i64,

    #[serde(default = "default_unit")]
    pub unit: String,

    pub supplier: Option<String>,
}

// Rascunho devolvido pelo "leitor de código de barras" simulado:
// o cliente abre o formulário de produto já preenchido com isso.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScannedDraft {
    pub sku: String,
    pub name: String,
}
