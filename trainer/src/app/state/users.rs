//! User management: staff list with an optimistic role editor.

use shared::{User, UserRole};

/// Role change applied locally and awaiting the data service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRoleChange {
    pub user_id: String,
    pub previous: Vec<UserRole>,
    pub requested: Vec<UserRole>,
}

#[derive(Debug, Clone)]
pub struct UserManagementState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for UserManagementState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl UserManagementState {
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }

    /// Write the new roles before the network call resolves.
    ///
    /// Returns the change to hand back to [`Self::rollback`] on failure, or
    /// `None` when the user is unknown or nothing changes.
    pub fn apply_optimistic(&mut self, user_id: &str, roles: Vec<UserRole>) -> Option<PendingRoleChange> {
        let user = self.users.iter_mut().find(|user| user.id == user_id)?;
        if user.roles == roles {
            return None;
        }
        let previous = user.roles.clone();
        user.set_roles(roles);
        Some(PendingRoleChange {
            user_id: user_id.to_string(),
            previous,
            requested: user.roles.clone(),
        })
    }

    /// Restore the roles recorded in `change`
    pub fn rollback(&mut self, change: &PendingRoleChange) {
        if let Some(user) = self.users.iter_mut().find(|user| user.id == change.user_id) {
            user.set_roles(change.previous.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::user;

    #[test]
    fn test_apply_and_rollback() {
        let mut state = UserManagementState {
            users: vec![user("a", vec![UserRole::Waiter]), user("b", vec![UserRole::Chef])],
            loading: false,
            error: None,
        };

        let change = state
            .apply_optimistic("a", vec![UserRole::BarManager])
            .unwrap();
        assert_eq!(state.user("a").unwrap().roles, vec![UserRole::BarManager]);
        assert_eq!(change.previous, vec![UserRole::Waiter]);

        state.rollback(&change);
        assert_eq!(state.user("a").unwrap().roles, vec![UserRole::Waiter]);
        assert_eq!(state.user("b").unwrap().roles, vec![UserRole::Chef]);
    }

    #[test]
    fn test_noop_changes() {
        let mut state = UserManagementState {
            users: vec![user("a", vec![UserRole::Waiter])],
            loading: false,
            error: None,
        };
        assert!(state.apply_optimistic("a", vec![UserRole::Waiter]).is_none());
        assert!(state.apply_optimistic("missing", vec![UserRole::Chef]).is_none());
    }
}
