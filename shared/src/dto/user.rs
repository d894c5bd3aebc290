use serde::{Deserialize, Serialize};

use crate::utils::avatar_url;

/// Staff role tag as stored in the `roles` table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    GeneralManager,
    Chef,
    BarManager,
    PastryChef,
    Waiter,
}

impl UserRole {
    /// Every role, in the order the role selector lists them
    pub fn all() -> &'static [UserRole] {
        &[
            UserRole::SuperAdmin,
            UserRole::GeneralManager,
            UserRole::Chef,
            UserRole::BarManager,
            UserRole::PastryChef,
            UserRole::Waiter,
        ]
    }

    /// Wire name (matches `roles.name`)
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::GeneralManager => "general_manager",
            UserRole::Chef => "chef",
            UserRole::BarManager => "bar_manager",
            UserRole::PastryChef => "pastry_chef",
            UserRole::Waiter => "waiter",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super admin",
            UserRole::GeneralManager => "General manager",
            UserRole::Chef => "Chef",
            UserRole::BarManager => "Bar manager",
            UserRole::PastryChef => "Pastry chef",
            UserRole::Waiter => "Waiter",
        }
    }

    /// Parse a wire name, `None` for tags this client does not know
    pub fn from_name(name: &str) -> Option<UserRole> {
        UserRole::all().iter().copied().find(|role| role.as_str() == name)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Authenticated staff member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub telegram_id: i64,
    pub full_name: String,
    /// Role set kept in insertion order, no duplicates
    pub roles: Vec<UserRole>,
    pub avatar_url: String,
}

impl User {
    /// Build a user, deduplicating roles and deriving the avatar
    pub fn new(id: impl Into<String>, telegram_id: i64, full_name: impl Into<String>, roles: Vec<UserRole>) -> Self {
        let id = id.into();
        let avatar_url = avatar_url(&id);
        let mut user = Self {
            id,
            telegram_id,
            full_name: full_name.into(),
            roles: Vec::new(),
            avatar_url,
        };
        user.set_roles(roles);
        user
    }

    /// Replace the role set, keeping first occurrences only
    pub fn set_roles(&mut self, roles: Vec<UserRole>) {
        self.roles.clear();
        for role in roles {
            if !self.roles.contains(&role) {
                self.roles.push(role);
            }
        }
    }

    /// Initials for avatar placeholders
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Roles joined for display
    pub fn roles_label(&self) -> String {
        self.roles
            .iter()
            .map(UserRole::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// A session may only reach a dashboard with at least one role
    pub fn validate(&self) -> Result<(), String> {
        if self.roles.is_empty() {
            return Err(format!("User {} has no roles assigned", self.full_name));
        }
        Ok(())
    }
}

/// `roles(name)` embed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleRef {
    pub name: String,
}

/// `user_roles(roles(name))` embed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRoleLink {
    pub roles: Option<RoleRef>,
}

/// Row returned by `users?select=id,telegram_id,full_name,user_roles(roles(name))`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub telegram_id: i64,
    pub full_name: String,
    #[serde(default)]
    pub user_roles: Vec<UserRoleLink>,
}

impl UserRow {
    /// Role names this client does not recognise
    pub fn unknown_roles(&self) -> Vec<String> {
        self.user_roles
            .iter()
            .filter_map(|link| link.roles.as_ref())
            .filter(|role| UserRole::from_name(&role.name).is_none())
            .map(|role| role.name.clone())
            .collect()
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let roles = row
            .user_roles
            .iter()
            .filter_map(|link| link.roles.as_ref())
            .filter_map(|role| UserRole::from_name(&role.name))
            .collect();
        User::new(row.id, row.telegram_id, row.full_name, roles)
    }
}

/// Body of the `set_user_roles` RPC
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetUserRolesRequest {
    pub p_user_id: String,
    pub p_roles: Vec<UserRole>,
}

/// Row returned by `users?select=id,full_name`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummaryRow {
    pub id: String,
    pub full_name: String,
}

/// User summary shown on the leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardUser {
    pub id: String,
    pub full_name: String,
    pub avatar_url: String,
}

/// Leaderboard row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user: LeaderboardUser,
    pub score: u32,
    pub rank: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_conversion() {
        let json = r#"{
            "id": "u-1",
            "telegram_id": 101,
            "full_name": "Anna Petrova",
            "user_roles": [
                {"roles": {"name": "waiter"}},
                {"roles": {"name": "sommelier"}},
                {"roles": {"name": "waiter"}},
                {"roles": null}
            ]
        }"#;
        let row: UserRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.unknown_roles(), vec!["sommelier".to_string()]);

        let user = User::from(row);
        assert_eq!(user.roles, vec![UserRole::Waiter]);
        assert_eq!(user.avatar_url, "https://picsum.photos/seed/u-1/100/100");
        assert_eq!(user.initials(), "AP");
    }

    #[test]
    fn test_role_names() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_name(role.as_str()), Some(*role));
        }
        assert_eq!(UserRole::from_name("owner"), None);
        assert_eq!(
            serde_json::to_string(&UserRole::GeneralManager).unwrap(),
            "\"general_manager\""
        );
    }

    #[test]
    fn test_validate_requires_role() {
        let user = User::new("1", 1, "No Roles", vec![]);
        assert!(user.validate().is_err());

        let user = User::new("1", 1, "Cook", vec![UserRole::Chef, UserRole::Chef]);
        assert!(user.validate().is_ok());
        assert_eq!(user.roles.len(), 1);
    }
}
