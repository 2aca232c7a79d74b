// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;

// Nosso tipo de erro de negócio, com `thiserror` para melhor ergonomia.
// Política do motor: toda operação mutante valida a permissão do chamador,
// e "não encontrado" é reportado, nunca engolido em silêncio.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Token inválido")]
    InvalidToken,

    #[error("Sessão não encontrada")]
    SessionNotFound,

    #[error("Permissão ausente: {0}")]
    PermissionDenied(&'static str),

    #[error("Produto não encontrado")]
    ProductNotFound,

    #[error("Item não está no carrinho")]
    CartLineNotFound,

    #[error("Produto sem estoque")]
    OutOfStock,

    #[error("Carrinho vazio")]
    EmptyCart,

    #[error("Modelo de segmento não encontrado")]
    TemplateNotFound,

    #[error("Segmento já escolhido")]
    IndustryAlreadySet,

    #[error("Venda não encontrada")]
    SaleNotFound,

    #[error("Fonte não encontrada: {0}")]
    FontNotFound(String),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidToken | AppError::JwtError(_) => StatusCode::UNAUTHORIZED,
            AppError::SessionNotFound => StatusCode::UNAUTHORIZED,
            AppError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            AppError::ProductNotFound
            | AppError::CartLineNotFound
            | AppError::TemplateNotFound
            | AppError::SaleNotFound => StatusCode::NOT_FOUND,
            AppError::OutOfStock | AppError::EmptyCart | AppError::IndustryAlreadySet => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::FontNotFound(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn i18n_key(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation",
            AppError::InvalidToken | AppError::JwtError(_) => "invalid_token",
            AppError::SessionNotFound => "session_not_found",
            AppError::PermissionDenied(_) => "permission_denied",
            AppError::ProductNotFound => "product_not_found",
            AppError::CartLineNotFound => "cart_line_not_found",
            AppError::OutOfStock => "out_of_stock",
            AppError::EmptyCart => "empty_cart",
            AppError::TemplateNotFound => "template_not_found",
            AppError::IndustryAlreadySet => "industry_already_set",
            AppError::SaleNotFound => "sale_not_found",
            AppError::FontNotFound(_) => "font_not_found",
            AppError::InternalServerError(_) => "internal",
        }
    }

    /// Converte o erro de negócio na projeção HTTP, já traduzida.
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let message = i18n.translate(&locale.0, self.i18n_key());

        match self {
            // Retornamos todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                ApiError {
                    status: self.status(),
                    error: message.to_string(),
                    details: serde_json::to_value(details).ok(),
                }
            }
            AppError::PermissionDenied(permission) => ApiError {
                status: self.status(),
                error: message.replace("{permission}", permission),
                details: None,
            },
            // Erros internos viram 500 com mensagem genérica.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            e if self.status() == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: message.to_string(),
                    details: None,
                }
            }
            _ => ApiError {
                status: self.status(),
                error: message.to_string(),
                details: None,
            },
        }
    }
}

// Fallback sem tradução (usado onde não há Locale, ex: no middleware de auth).
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale("en".to_string()), &I18nStore::new())
            .into_response()
    }
}

// ---
// Projeção HTTP do erro: status + mensagem traduzida (+ detalhes).
// ---
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => Json(json!({ "error": self.error, "details": details })),
            None => Json(json!({ "error": self.error })),
        };
        (self.status, body).into_response()
    }
}
