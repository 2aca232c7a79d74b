// src/services/dashboard_service.rs

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::{
    models::dashboard::{DashboardSummary, DashboardTip, SalesTrendEntry, TopProductEntry},
    models::rbac::PermissionSet,
    store::{seed, CatalogStore, SaleLedger},
};

// Agregações somente-leitura sobre o catálogo e o ledger.
#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<CatalogStore>,
    ledger: Arc<SaleLedger>,
}

impl DashboardService {
    pub fn new(catalog: Arc<CatalogStore>, ledger: Arc<SaleLedger>) -> Self {
        Self { catalog, ledger }
    }

    /// Os cards do topo do painel. O faturamento do dia só sai para quem
    /// enxerga o financeiro; para os demais o campo simplesmente não vem.
    pub fn summary(&self, perms: &PermissionSet) -> DashboardSummary {
        let today = Utc::now().date_naive();
        let sales = self.ledger.all();

        let todays: Vec<_> = sales
            .iter()
            .filter(|s| s.date.date_naive() == today)
            .collect();

        let revenue_today: Decimal = todays.iter().map(|s| s.total).sum();

        let low_stock_count = self
            .catalog
            .all()
            .iter()
            .filter(|p| p.stock <= p.min_stock)
            .count() as i64;

        DashboardSummary {
            sales_today: todays.len() as i64,
            revenue_today: perms.can_view_financials.then_some(revenue_today),
            low_stock_count,
            top_selling_product: self.top_products().first().map(|e| e.product_name.clone()),
        }
    }

    /// Curva ABC: quantidade vendida por produto (nome congelado na
    /// venda), os cinco maiores primeiro.
    pub fn top_products(&self) -> Vec<TopProductEntry> {
        let mut by_product: HashMap<String, i64> = HashMap::new();
        for sale in self.ledger.all() {
            for item in &sale.items {
                *by_product.entry(item.product_name.clone()).or_default() += item.quantity;
            }
        }

        let mut entries: Vec<_> = by_product
            .into_iter()
            .map(|(product_name, total_quantity)| TopProductEntry {
                product_name,
                total_quantity,
            })
            .collect();

        entries.sort_by(|a, b| {
            b.total_quantity
                .cmp(&a.total_quantity)
                .then_with(|| a.product_name.cmp(&b.product_name))
        });
        entries.truncate(5);
        entries
    }

    /// Vendas dos últimos 7 dias agrupadas por data, com dias sem venda
    /// zerados (o gráfico precisa do eixo completo).
    pub fn sales_trend(&self) -> Vec<SalesTrendEntry> {
        let today = Utc::now().date_naive();
        let sales = self.ledger.all();

        (0..7)
            .rev()
            .map(|offset| {
                let day = today - Duration::days(offset);
                let total: Decimal = sales
                    .iter()
                    .filter(|s| s.date.date_naive() == day)
                    .map(|s| s.total)
                    .sum();

                SalesTrendEntry {
                    date: day.format("%Y-%m-%d").to_string(),
                    total,
                }
            })
            .collect()
    }

    pub fn tips(&self) -> Vec<DashboardTip> {
        seed::dashboard_tips()
    }
}
