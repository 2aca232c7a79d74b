// src/services/catalog_service.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::catalog::{CreateProductPayload, Product, ScannedDraft, UpdateProductPayload},
    models::rbac::PermissionSet,
    store::CatalogStore,
};

#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<CatalogStore>,
}

impl CatalogService {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    // Listagem com a busca da tela de estoque (nome ou SKU)
    pub fn list(&self, search: Option<&str>) -> Vec<Product> {
        match search {
            Some(term) if !term.trim().is_empty() => self.catalog.search(term),
            _ => self.catalog.all(),
        }
    }

    // --- CREATE ---
    // A permissão é verificada aqui dentro, não só na camada HTTP:
    // o motor é a fronteira de confiança.
    pub fn add(
        &self,
        perms: &PermissionSet,
        payload: CreateProductPayload,
    ) -> Result<Product, AppError> {
        if !perms.can_manage_inventory {
            return Err(AppError::PermissionDenied("inventory:write"));
        }

        let product = Product {
            id: Uuid::new_v4(),
            sku: payload.sku,
            name: payload.name,
            category: payload.category,
            cost: payload.cost,
            price: payload.price,
            stock: payload.stock,
            min_stock: payload.min_stock,
            unit: payload.unit,
            supplier: payload.supplier,
            last_restock_date: (payload.stock > 0).then(Utc::now),
        };

        self.catalog.add(product.clone());
        tracing::info!("📦 Produto cadastrado: {} ({})", product.name, product.sku);
        Ok(product)
    }

    // --- UPDATE (substituição integral) ---
    pub fn update(
        &self,
        perms: &PermissionSet,
        id: Uuid,
        payload: UpdateProductPayload,
    ) -> Result<Product, AppError> {
        if !perms.can_manage_inventory {
            return Err(AppError::PermissionDenied("inventory:write"));
        }

        // Mantemos a data da última reposição da entrada anterior
        let previous = self.catalog.get(id).ok_or(AppError::ProductNotFound)?;

        let product = Product {
            id,
            sku: payload.sku,
            name: payload.name,
            category: payload.category,
            cost: payload.cost,
            price: payload.price,
            stock: payload.stock,
            min_stock: payload.min_stock,
            unit: payload.unit,
            supplier: payload.supplier,
            last_restock_date: previous.last_restock_date,
        };

        self.catalog.replace(product.clone())?;
        Ok(product)
    }

    // --- SCAN (leitor de código de barras simulado) ---
    // Não há câmera nem hardware: devolvemos um rascunho com SKU gerado
    // para o cliente abrir o formulário de cadastro pré-preenchido.
    pub fn scan(&self, perms: &PermissionSet) -> Result<ScannedDraft, AppError> {
        if !perms.can_manage_inventory {
            return Err(AppError::PermissionDenied("inventory:write"));
        }

        let suffix = Uuid::new_v4().simple().to_string()[..4].to_uppercase();
        Ok(ScannedDraft {
            sku: format!("SCAN-{}", suffix),
            name: "Item Escaneado Exemplo".to_string(),
        })
    }
}
