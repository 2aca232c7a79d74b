// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// 1. Resumo do Dia (Os Cards do Topo)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[schema(example = 7)]
    pub sales_today: i64,

    // `None` quando o cargo do chamador não enxerga o financeiro
    #[schema(example = "412.80")]
    pub revenue_today: Option<Decimal>,

    #[schema(example = 2)]
    pub low_stock_count: i64,

    #[schema(example = "Chá Matcha Orgânico")]
    pub top_selling_product: Option<String>,
}

// 2. Curva ABC (Top Produtos por quantidade vendida)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProductEntry {
    pub product_name: String,
    pub total_quantity: i64,
}

// 3. Gráfico de Vendas (últimos 7 dias, agrupado por data)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesTrendEntry {
    #[schema(example = "2026-08-07")]
    pub date: String,

    #[schema(example = "890.00")]
    pub total: Decimal,
}

// 4. Dicas de gestão (feed estático do painel)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTip {
    pub category: String,
    pub text: String,
}
