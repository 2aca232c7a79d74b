// src/models/sales.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Alíquota fixa de imposto aplicada sobre o subtotal no checkout (8%).
/// Invariante da venda: total = Σ(preço congelado × quantidade) × 1,08.
pub fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Credit,
    Debit,
    Cash,
    Pix,
}

// Uma linha de venda é um retrato do produto no momento da venda:
// nome e preço ficam congelados, imunes a renomeações e reajustes futuros.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i64,
    pub price_at_sale: Decimal,
}

// Venda concluída. Imutável depois de entrar no ledger.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub total: Decimal,
    pub items: Vec<SaleItem>,
    pub payment_method: PaymentMethod,
}

// ---
// Payloads do PDV
// ---
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemPayload {
    pub product_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdjustQuantityPayload {
    // +1 / -1 nos botões do PDV, mas qualquer delta é aceito
    pub delta: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    pub payment_method: PaymentMethod,
}

// Visão do carrinho em andamento, com os totais já calculados
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<SaleItem>,

    #[schema(example = "56.00")]
    pub subtotal: Decimal,

    #[schema(example = "4.48")]
    pub tax: Decimal,

    #[schema(example = "60.48")]
    pub total: Decimal,
}
