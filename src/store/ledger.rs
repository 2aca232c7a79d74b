// src/store/ledger.rs

use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::sales::Sale;

/// Ledger de vendas concluídas, em memória.
/// Append-only do ponto de vista da aplicação: vendas entram prontas pelo
/// checkout e nunca mudam depois. A mais recente fica na frente.
pub struct SaleLedger {
    sales: RwLock<Vec<Sale>>,
}

impl SaleLedger {
    pub fn with_sales(sales: Vec<Sale>) -> Self {
        Self {
            sales: RwLock::new(sales),
        }
    }

    pub fn all(&self) -> Vec<Sale> {
        self.sales.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Sale> {
        self.sales.read().iter().find(|s| s.id == id).cloned()
    }

    pub fn prepend(&self, sale: Sale) {
        self.sales.write().insert(0, sale);
    }

    pub fn len(&self) -> usize {
        self.sales.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.read().is_empty()
    }
}
