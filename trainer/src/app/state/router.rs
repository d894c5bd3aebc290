//! View routing and the bottom navigation.

use shared::UserRole;

/// Named destination inside the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Learn,
    Test,
    Game,
    Profile,
    Admin,
    UserManagement,
    QuizEditor,
    /// Any identifier the client does not know; treated like `Home`
    Unknown(String),
}

impl View {
    /// Never fails; unknown names are kept as `Unknown`
    pub fn parse(name: &str) -> View {
        match name.trim().to_ascii_lowercase().as_str() {
            "home" | "" => View::Home,
            "learn" => View::Learn,
            "test" => View::Test,
            "game" => View::Game,
            "profile" => View::Profile,
            "admin" => View::Admin,
            "user-management" | "user_management" | "users" => View::UserManagement,
            "quiz-editor" | "quiz_editor" => View::QuizEditor,
            _ => View::Unknown(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            View::Home => "home",
            View::Learn => "learn",
            View::Test => "test",
            View::Game => "game",
            View::Profile => "profile",
            View::Admin => "admin",
            View::UserManagement => "user-management",
            View::QuizEditor => "quiz-editor",
            View::Unknown(name) => name,
        }
    }
}

/// What actually gets rendered for the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    ManagerDashboard,
    StaffDashboard,
    Learn,
    Test,
    Game,
    Profile,
    Admin,
    UserManagement,
    QuizEditor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    pub current: View,
}

impl Default for Router {
    fn default() -> Self {
        Self { current: View::Home }
    }
}

impl Router {
    pub fn new(start: View) -> Self {
        Self { current: start }
    }

    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = self.current.name(), to = view.name(), "Navigate");
        self.current = view;
    }

    pub fn resolve(&self, roles: &[UserRole]) -> Destination {
        match &self.current {
            View::Home | View::Unknown(_) => {
                if shared::roles::is_manager(roles) {
                    Destination::ManagerDashboard
                } else {
                    Destination::StaffDashboard
                }
            }
            View::Learn => Destination::Learn,
            View::Test => Destination::Test,
            View::Game => Destination::Game,
            View::Profile => Destination::Profile,
            View::Admin => Destination::Admin,
            View::UserManagement => Destination::UserManagement,
            View::QuizEditor => Destination::QuizEditor,
        }
    }

    /// Whether a bottom navigation entry should be highlighted
    pub fn is_active(&self, entry: &View) -> bool {
        match (&self.current, entry) {
            (View::Unknown(_), View::Home) => true,
            (current, entry) => current == entry,
        }
    }
}

/// Bottom navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub view: View,
    pub label: &'static str,
    pub icon: &'static str,
}

pub fn nav_items(roles: &[UserRole]) -> Vec<NavItem> {
    let mut items = vec![
        NavItem { view: View::Home, label: "Home", icon: "🏠" },
        NavItem { view: View::Learn, label: "Learn", icon: "📚" },
        NavItem { view: View::Test, label: "Test", icon: "📝" },
        NavItem { view: View::Profile, label: "Profile", icon: "👤" },
    ];
    if shared::roles::shows_admin_nav(roles) {
        items.push(NavItem { view: View::Admin, label: "Admin", icon: "⚙" });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_known_names() {
        for view in [
            View::Home,
            View::Learn,
            View::Test,
            View::Game,
            View::Profile,
            View::Admin,
            View::UserManagement,
            View::QuizEditor,
        ] {
            assert_eq!(View::parse(view.name()), view);
        }
        assert_eq!(View::parse("reports"), View::Unknown("reports".into()));
    }

    #[test]
    fn test_home_resolves_by_role() {
        let mut router = Router::default();
        assert_eq!(router.resolve(&[UserRole::Waiter]), Destination::StaffDashboard);
        assert_eq!(
            router.resolve(&[UserRole::Waiter, UserRole::SuperAdmin]),
            Destination::ManagerDashboard
        );

        router.navigate(View::parse("analytics"));
        assert_eq!(router.resolve(&[UserRole::Chef]), Destination::StaffDashboard);
        assert!(router.is_active(&View::Home));

        router.navigate(View::Game);
        assert_eq!(router.resolve(&[UserRole::Chef]), Destination::Game);
        assert!(!router.is_active(&View::Home));
    }

    #[test]
    fn test_admin_nav_entry() {
        assert_eq!(nav_items(&[UserRole::Waiter]).len(), 4);
        let items = nav_items(&[UserRole::PastryChef]);
        assert_eq!(items.last().map(|item| &item.view), Some(&View::Admin));
    }
}
