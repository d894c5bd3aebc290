//! # Role Policy
//!
//! The role sets that gate dashboards, admin actions and navigation. Every
//! screen asks these predicates instead of keeping its own role list.
//!
//! | predicate | roles |
//! |---|---|
//! | [`is_manager`] | super admin, general manager |
//! | [`can_manage_content`] | the managers plus chef, bar manager, pastry chef |
//! | [`shows_admin_nav`] | same five as content management |
//! | [`can_manage_users`] | general manager, super admin |
//!
//! ```rust
//! use shared::roles::{can_manage_content, is_manager};
//! use shared::UserRole;
//!
//! assert!(is_manager(&[UserRole::Waiter, UserRole::SuperAdmin]));
//! assert!(!is_manager(&[UserRole::Chef]));
//! assert!(can_manage_content(&[UserRole::Chef]));
//! ```

use crate::dto::UserRole;

/// Roles that get the elevated dashboard
pub const MANAGER_ROLES: &[UserRole] = &[UserRole::SuperAdmin, UserRole::GeneralManager];

/// Roles that may add menu items and categories
pub const CONTENT_MANAGER_ROLES: &[UserRole] = &[
    UserRole::SuperAdmin,
    UserRole::GeneralManager,
    UserRole::Chef,
    UserRole::BarManager,
    UserRole::PastryChef,
];

/// Roles that see the admin entry in the bottom navigation
pub const ADMIN_NAV_ROLES: &[UserRole] = CONTENT_MANAGER_ROLES;

/// Roles that may change other users' roles
pub const USER_ADMIN_ROLES: &[UserRole] = &[UserRole::GeneralManager, UserRole::SuperAdmin];

fn intersects(roles: &[UserRole], set: &[UserRole]) -> bool {
    roles.iter().any(|role| set.contains(role))
}

pub fn is_manager(roles: &[UserRole]) -> bool {
    intersects(roles, MANAGER_ROLES)
}

pub fn can_manage_content(roles: &[UserRole]) -> bool {
    intersects(roles, CONTENT_MANAGER_ROLES)
}

pub fn shows_admin_nav(roles: &[UserRole]) -> bool {
    intersects(roles, ADMIN_NAV_ROLES)
}

pub fn can_manage_users(roles: &[UserRole]) -> bool {
    intersects(roles, USER_ADMIN_ROLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every subset of the six roles
    fn all_role_sets() -> Vec<Vec<UserRole>> {
        let all = UserRole::all();
        (0..(1u32 << all.len()))
            .map(|mask| {
                all.iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, role)| *role)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_is_manager_matches_intersection() {
        for roles in all_role_sets() {
            let expected = roles.contains(&UserRole::SuperAdmin)
                || roles.contains(&UserRole::GeneralManager);
            assert_eq!(is_manager(&roles), expected, "roles: {:?}", roles);
        }
    }

    #[test]
    fn test_can_manage_content_matches_intersection() {
        for roles in all_role_sets() {
            let expected = roles.iter().any(|role| *role != UserRole::Waiter);
            assert_eq!(can_manage_content(&roles), expected, "roles: {:?}", roles);
            assert_eq!(shows_admin_nav(&roles), expected);
        }
    }

    #[test]
    fn test_user_admin() {
        assert!(can_manage_users(&[UserRole::GeneralManager]));
        assert!(can_manage_users(&[UserRole::Waiter, UserRole::SuperAdmin]));
        assert!(!can_manage_users(&[UserRole::Chef, UserRole::PastryChef]));
        assert!(!can_manage_users(&[]));
    }
}
