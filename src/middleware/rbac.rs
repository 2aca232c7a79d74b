// src/middleware/rbac.rs

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use std::marker::PhantomData;

use crate::{
    common::error::ApiError,
    middleware::auth::AuthenticatedUser,
    models::auth::User,
    models::rbac::PermissionSet,
};

/// 1. O Trait que define o que é uma Permissão
///
/// Diferente de um RBAC com banco, aqui a verificação é puramente a tabela
/// fixa cargo -> capacidades. O guardião HTTP é conveniência: os services
/// revalidam a permissão por conta própria.
pub trait PermissionDef: Send + Sync + 'static {
    fn slug() -> &'static str;
    fn granted(perms: &PermissionSet) -> bool;
}

/// 2. O Extractor (Guardião)
pub struct RequirePermission<T>(pub PhantomData<T>);

// 3. Implementação do FromRequestParts

impl<T, S> FromRequestParts<S> for RequirePermission<T>
where
    T: PermissionDef,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A. Extrai Usuário (injetado pelo auth_guard)
        let user = parts
            .extensions
            .get::<User>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or(ApiError {
                status: StatusCode::UNAUTHORIZED,
                error: "Usuário não autenticado".into(),
                details: None,
            })?;

        // B. Consulta a tabela fixa de permissões do cargo
        let perms = user.permissions();

        if !T::granted(&perms) {
            return Err(ApiError {
                status: StatusCode::FORBIDDEN,
                error: format!(
                    "Você precisa da permissão '{}' para realizar esta ação.",
                    T::slug()
                ),
                details: None,
            });
        }

        Ok(RequirePermission(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS PERMISSÕES (TIPOS)
// ---

pub struct PermInventoryWrite;
impl PermissionDef for PermInventoryWrite {
    fn slug() -> &'static str {
        "inventory:write"
    }
    fn granted(perms: &PermissionSet) -> bool {
        perms.can_manage_inventory
    }
}

pub struct PermSell;
impl PermissionDef for PermSell {
    fn slug() -> &'static str {
        "pos:sell"
    }
    fn granted(perms: &PermissionSet) -> bool {
        perms.can_sell
    }
}

pub struct PermFinancialsRead;
impl PermissionDef for PermFinancialsRead {
    fn slug() -> &'static str {
        "financials:read"
    }
    fn granted(perms: &PermissionSet) -> bool {
        perms.can_view_financials
    }
}

pub struct PermUsersManage;
impl PermissionDef for PermUsersManage {
    fn slug() -> &'static str {
        "users:manage"
    }
    fn granted(perms: &PermissionSet) -> bool {
        perms.can_manage_users
    }
}
