// src/common/i18n.rs

use std::collections::HashMap;

/// Catálogo de mensagens de erro em pt/en.
/// O idioma é decidido pelo extrator `Locale` (cabeçalho Accept-Language);
/// se a chave não existir no idioma pedido, caímos para o inglês.
pub struct I18nStore {
    messages: HashMap<(&'static str, &'static str), &'static str>,
}

impl I18nStore {
    pub fn new() -> Self {
        let mut messages = HashMap::new();

        let entries: &[(&str, &str, &str)] = &[
            // (chave, pt, en)
            ("validation", "Um ou mais campos são inválidos.", "One or more fields are invalid."),
            ("invalid_token", "Token de autenticação inválido ou ausente.", "Invalid or missing authentication token."),
            ("session_not_found", "Sessão não encontrada. Faça login novamente.", "Session not found. Please log in again."),
            ("permission_denied", "Você precisa da permissão '{permission}' para realizar esta ação.", "You need the '{permission}' permission to perform this action."),
            ("product_not_found", "Produto não encontrado.", "Product not found."),
            ("cart_line_not_found", "Item não está no carrinho.", "Item is not in the cart."),
            ("out_of_stock", "Produto sem estoque disponível.", "Product is out of stock."),
            ("empty_cart", "O carrinho está vazio.", "The cart is empty."),
            ("template_not_found", "Modelo de segmento não encontrado.", "Industry template not found."),
            ("industry_already_set", "O segmento da loja já foi escolhido.", "The store's industry has already been chosen."),
            ("sale_not_found", "Venda não encontrada.", "Sale not found."),
            ("font_not_found", "Fonte do recibo não encontrada.", "Receipt font not found."),
            ("internal", "Ocorreu um erro inesperado.", "An unexpected error occurred."),
        ];

        for (key, pt, en) in entries {
            messages.insert(("pt", *key), *pt);
            messages.insert(("en", *key), *en);
        }

        Self { messages }
    }

    pub fn translate(&self, locale: &str, key: &'static str) -> &'static str {
        self.messages
            .get(&(locale, key))
            .or_else(|| self.messages.get(&("en", key)))
            .copied()
            .unwrap_or("An unexpected error occurred.")
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}
