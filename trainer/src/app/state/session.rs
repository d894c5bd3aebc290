//! Session bootstrap state.

use shared::{User, UserRole};

/// Exactly one of these holds at any time
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Identity lookup in flight
    Loading,
    /// Identity could not be established; rendered as a blocking error
    Failed(String),
    /// No host launch payload: pick a demo account
    SelectingUser(Vec<User>),
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn roles(&self) -> &[UserRole] {
        self.user().map(|user| user.roles.as_slice()).unwrap_or(&[])
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Sign in `user`, failing the session when they hold no role
pub fn authenticate(user: User) -> SessionState {
    match user.validate() {
        Ok(()) => SessionState::Authenticated(user),
        Err(message) => {
            tracing::warn!(user_id = %user.id, "Sign-in rejected: {}", message);
            SessionState::Failed(message)
        }
    }
}

pub fn not_found_message(telegram_id: i64) -> String {
    format!("User with Telegram ID {telegram_id} was not found. Contact your administrator.")
}

/// Accounts offered when the client runs outside the host platform
pub fn demo_roster() -> Vec<User> {
    vec![
        User::new("1", 101, "Anna Waiter", vec![UserRole::Waiter]),
        User::new("4", 104, "Oleg Manager", vec![UserRole::GeneralManager]),
        User::new("5", 105, "Super Admin", vec![UserRole::SuperAdmin]),
        User::new("999", 999, "All Roles Tester", UserRole::all().to_vec()),
    ]
}
