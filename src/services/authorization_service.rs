//! Servicio de autorización para verificar permisos y roles
//!
//! Predicados de capacidad sobre el enum `Role`. Son funciones totales sin
//! estado ni I/O; los handlers los consultan antes de invocar cualquier
//! operación del coordinador.

use uuid::Uuid;

use crate::models::user::Role;

/// Verifica si un rol puede gestionar leads
pub fn can_access_leads(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Manager | Role::Salesperson)
}

/// Verifica si un rol puede gestionar ventas
pub fn can_access_sales(role: Role) -> bool {
    matches!(
        role,
        Role::Admin | Role::Manager | Role::Salesperson | Role::Finance
    )
}

/// Verifica si un rol puede gestionar clientes
pub fn can_access_customers(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Manager | Role::Salesperson)
}

/// Verifica si un rol puede gestionar vehículos
pub fn can_access_vehicles(role: Role) -> bool {
    matches!(
        role,
        Role::Admin | Role::Manager | Role::Salesperson | Role::Service
    )
}

/// Verifica si un rol puede ver analytics
pub fn can_view_analytics(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Manager)
}

/// Verifica si un rol puede gestionar usuarios
pub fn can_manage_users(role: Role) -> bool {
    matches!(role, Role::Admin)
}

/// Verifica si un usuario puede modificar a otro: admin, o sobre sí mismo
pub fn can_modify_user(actor_role: Role, actor_id: Uuid, target_id: Uuid) -> bool {
    actor_role == Role::Admin || actor_id == target_id
}

/// Verifica si un rol puede borrar leads
pub fn can_delete_lead(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Manager)
}

/// Verifica si un rol puede borrar ventas
pub fn can_delete_sale(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_access() {
        assert!(can_access_leads(Role::Admin));
        assert!(can_access_leads(Role::Manager));
        assert!(can_access_leads(Role::Salesperson));
        assert!(!can_access_leads(Role::Finance));
        assert!(!can_access_leads(Role::Service));
    }

    #[test]
    fn test_sale_access_includes_finance() {
        assert!(can_access_sales(Role::Finance));
        assert!(!can_access_sales(Role::Service));
    }

    #[test]
    fn test_vehicle_access_includes_service() {
        assert!(can_access_vehicles(Role::Service));
        assert!(!can_access_vehicles(Role::Finance));
    }

    #[test]
    fn test_delete_capabilities_are_admin_or_manager() {
        for role in [Role::Admin, Role::Manager] {
            assert!(can_delete_lead(role));
            assert!(can_delete_sale(role));
        }
        for role in [Role::Salesperson, Role::Finance, Role::Service] {
            assert!(!can_delete_lead(role));
            assert!(!can_delete_sale(role));
        }
    }

    #[test]
    fn test_can_modify_user() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();

        assert!(can_modify_user(Role::Admin, me, other));
        assert!(can_modify_user(Role::Salesperson, me, me));
        assert!(!can_modify_user(Role::Salesperson, me, other));
        assert!(!can_modify_user(Role::Manager, me, other));
    }

    #[test]
    fn test_analytics_and_user_management() {
        assert!(can_view_analytics(Role::Manager));
        assert!(!can_view_analytics(Role::Salesperson));
        assert!(can_manage_users(Role::Admin));
        assert!(!can_manage_users(Role::Manager));
    }
}
