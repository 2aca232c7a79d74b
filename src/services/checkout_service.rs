// src/services/checkout_service.rs

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::rbac::PermissionSet,
    models::sales::{tax_rate, CartView, PaymentMethod, Sale, SaleItem},
    store::{CatalogStore, SaleLedger},
};

/// O motor do PDV: um carrinho por usuário, vendas fechadas no ledger.
///
/// O carrinho é a venda antes do commit. Linhas carregam nome e preço
/// congelados no momento em que o produto entrou; o fechamento dá baixa
/// no estoque, grava a venda (mais recente na frente) e esvazia o
/// carrinho. Tudo roda dentro do lock, então um fechamento é atômico do
/// ponto de vista de qualquer outro fluxo.
#[derive(Clone)]
pub struct CheckoutService {
    catalog: Arc<CatalogStore>,
    ledger: Arc<SaleLedger>,
    carts: Arc<RwLock<HashMap<Uuid, Vec<SaleItem>>>>,
}

impl CheckoutService {
    pub fn new(catalog: Arc<CatalogStore>, ledger: Arc<SaleLedger>) -> Self {
        Self {
            catalog,
            ledger,
            carts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn cart_view(&self, user_id: Uuid) -> CartView {
        let carts = self.carts.read();
        let items = carts.get(&user_id).cloned().unwrap_or_default();
        build_view(items)
    }

    // --- ADICIONAR AO CARRINHO ---
    // O mesmo produto duas vezes vira uma linha com quantidade 2, nunca
    // duas linhas (a chave de junção é o id do produto).
    pub fn add_to_cart(
        &self,
        perms: &PermissionSet,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<CartView, AppError> {
        if !perms.can_sell {
            return Err(AppError::PermissionDenied("pos:sell"));
        }

        let product = self.catalog.get(product_id).ok_or(AppError::ProductNotFound)?;

        // Espelho do PDV: produto zerado não entra no carrinho.
        // (Nada além disso: o saldo ainda pode ficar negativo via ajuste
        // de quantidade, e isso é estado legal.)
        if product.stock <= 0 {
            return Err(AppError::OutOfStock);
        }

        let mut carts = self.carts.write();
        let items = carts.entry(user_id).or_default();

        match items.iter_mut().find(|item| item.product_id == product_id) {
            Some(line) => line.quantity += 1,
            None => items.push(SaleItem {
                product_id: product.id,
                product_name: product.name.clone(),
                quantity: 1,
                price_at_sale: product.price,
            }),
        }

        Ok(build_view(items.clone()))
    }

    // --- REMOVER LINHA ---
    pub fn remove_line(
        &self,
        perms: &PermissionSet,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<CartView, AppError> {
        if !perms.can_sell {
            return Err(AppError::PermissionDenied("pos:sell"));
        }

        let mut carts = self.carts.write();
        let items = carts.entry(user_id).or_default();

        let position = items
            .iter()
            .position(|item| item.product_id == product_id)
            .ok_or(AppError::CartLineNotFound)?;
        items.remove(position);

        Ok(build_view(items.clone()))
    }

    // --- AJUSTAR QUANTIDADE ---
    // Piso de 1: um decremento que zeraria a linha não faz nada, a linha
    // fica como está. Tirar o item do carrinho é a ação explícita de
    // remoção. Comportamento herdado do PDV, coberto por teste.
    pub fn adjust_quantity(
        &self,
        perms: &PermissionSet,
        user_id: Uuid,
        product_id: Uuid,
        delta: i64,
    ) -> Result<CartView, AppError> {
        if !perms.can_sell {
            return Err(AppError::PermissionDenied("pos:sell"));
        }

        let mut carts = self.carts.write();
        let items = carts.entry(user_id).or_default();

        let line = items
            .iter_mut()
            .find(|item| item.product_id == product_id)
            .ok_or(AppError::CartLineNotFound)?;

        let new_quantity = line.quantity + delta;
        if new_quantity > 0 {
            line.quantity = new_quantity;
        }

        Ok(build_view(items.clone()))
    }

    // --- CHECKOUT ---
    // Transição terminal do carrinho: valida, calcula subtotal + 8%,
    // dá baixa no estoque item a item, grava a venda no ledger e esvazia
    // o carrinho. Carrinho vazio é rejeitado antes de qualquer mutação.
    pub fn checkout(
        &self,
        perms: &PermissionSet,
        user_id: Uuid,
        payment_method: PaymentMethod,
    ) -> Result<Sale, AppError> {
        if !perms.can_sell {
            return Err(AppError::PermissionDenied("pos:sell"));
        }

        let mut carts = self.carts.write();
        let items = carts.entry(user_id).or_default();

        if items.is_empty() {
            return Err(AppError::EmptyCart);
        }

        // Valida todas as linhas antes de dar baixa em qualquer uma:
        // ou a venda inteira entra, ou nada muda.
        for item in items.iter() {
            if self.catalog.get(item.product_id).is_none() {
                return Err(AppError::ProductNotFound);
            }
        }

        let sold_items = std::mem::take(items);

        let subtotal: Decimal = sold_items
            .iter()
            .map(|item| item.price_at_sale * Decimal::from(item.quantity))
            .sum();
        let tax = subtotal * tax_rate();

        let sale = Sale {
            id: Uuid::new_v4(),
            date: Utc::now(),
            total: subtotal + tax,
            items: sold_items,
            payment_method,
        };

        for item in &sale.items {
            // A baixa não trava em zero: vender além do saldo deixa o
            // estoque negativo, e o painel acusa.
            self.catalog.decrement_stock(item.product_id, item.quantity)?;
        }

        self.ledger.prepend(sale.clone());
        tracing::info!("🧾 Venda {} fechada: R$ {}", sale.id, sale.total);

        Ok(sale)
    }

    /// Descarta o carrinho em andamento (logout).
    pub fn clear_cart(&self, user_id: Uuid) {
        self.carts.write().remove(&user_id);
    }
}

fn build_view(items: Vec<SaleItem>) -> CartView {
    let subtotal: Decimal = items
        .iter()
        .map(|item| item.price_at_sale * Decimal::from(item.quantity))
        .sum();
    let tax = subtotal * tax_rate();

    CartView {
        items,
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price_cents: i64, quantity: i64) -> SaleItem {
        SaleItem {
            product_id: Uuid::new_v4(),
            product_name: "item".to_string(),
            quantity,
            price_at_sale: Decimal::new(price_cents, 2),
        }
    }

    #[test]
    fn totals_apply_eight_percent_tax() {
        // 2 x 28,00 = 56,00; imposto 4,48; total 60,48
        let view = build_view(vec![item(2800, 2)]);

        assert_eq!(view.subtotal, Decimal::new(5600, 2));
        assert_eq!(view.tax, Decimal::new(448, 2));
        assert_eq!(view.total, Decimal::new(6048, 2));
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let view = build_view(Vec::new());

        assert_eq!(view.subtotal, Decimal::ZERO);
        assert_eq!(view.tax, Decimal::ZERO);
        assert_eq!(view.total, Decimal::ZERO);
    }
}
