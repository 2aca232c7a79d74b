// src/store/catalog.rs

use parking_lot::RwLock;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::catalog::Product;

/// Coleção de produtos em memória.
///
/// Produtos nunca são removidos individualmente; a coleção inteira é
/// substituída no onboarding (modelo de segmento) e no logout (semente
/// padrão). A baixa de estoque não trava em zero: um saldo negativo é
/// estado legal e aparece no painel como alerta.
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    pub fn all(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    // Busca por nome ou SKU, sem diferenciar maiúsculas (a busca da tela
    // de estoque e do PDV).
    pub fn search(&self, term: &str) -> Vec<Product> {
        let needle = term.to_lowercase();
        self.products
            .read()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle) || p.sku.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn get(&self, id: Uuid) -> Option<Product> {
        self.products.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn add(&self, product: Product) {
        self.products.write().push(product);
    }

    // Substituição integral da entrada com o mesmo id.
    pub fn replace(&self, product: Product) -> Result<(), AppError> {
        let mut products = self.products.write();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                Ok(())
            }
            None => Err(AppError::ProductNotFound),
        }
    }

    pub fn decrement_stock(&self, id: Uuid, quantity: i64) -> Result<(), AppError> {
        let mut products = self.products.write();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.stock -= quantity;
                Ok(())
            }
            None => Err(AppError::ProductNotFound),
        }
    }

    pub fn replace_all(&self, products: Vec<Product>) {
        *self.products.write() = products;
    }
}
