// src/models/rbac.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::auth::UserRole;

// O conjunto de capacidades derivado do cargo.
// A tabela é total (todo cargo tem entrada) e determinística.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    #[schema(example = true)]
    pub can_manage_inventory: bool,

    #[schema(example = true)]
    pub can_view_financials: bool,

    #[schema(example = true)]
    pub can_sell: bool,

    #[schema(example = false)]
    pub can_manage_users: bool,
}

/// Tabela fixa de permissões por cargo.
///
/// | Cargo   | estoque | financeiro | vender | usuários |
/// |---------|---------|------------|--------|----------|
/// | Owner   |    x    |     x      |   x    |    x     |
/// | Manager |    x    |     x      |   x    |          |
/// | Cashier |         |            |   x    |          |
/// | Viewer  |         |            |        |          |
pub fn permissions_for(role: UserRole) -> PermissionSet {
    match role {
        UserRole::Owner => PermissionSet {
            can_manage_inventory: true,
            can_view_financials: true,
            can_sell: true,
            can_manage_users: true,
        },
        UserRole::Manager => PermissionSet {
            can_manage_inventory: true,
            can_view_financials: true,
            can_sell: true,
            can_manage_users: false,
        },
        UserRole::Cashier => PermissionSet {
            can_manage_inventory: false,
            can_view_financials: false,
            can_sell: true,
            can_manage_users: false,
        },
        UserRole::Viewer => PermissionSet {
            can_manage_inventory: false,
            can_view_financials: false,
            can_sell: false,
            can_manage_users: false,
        },
    }
}

impl UserRole {
    pub fn permissions(self) -> PermissionSet {
        permissions_for(self)
    }
}
