//! # Application State Types
//!
//! All state-related types for the client: the session, the router, and one
//! state struct per screen. Screen state is reset whenever its view is entered.

pub mod admin;
pub mod game;
pub mod learn;
pub mod profile;
pub mod quiz;
pub mod quiz_editor;
pub mod router;
pub mod session;
pub mod users;

pub use admin::{AdminState, AdminTab, MenuItemForm};
pub use game::{Feedback, MatchGame, Round};
pub use learn::{FlashcardDeck, SwipeDirection};
pub use profile::ProfileState;
pub use quiz::{AnswerMark, QuizOutcome, QuizRunner, ScoreBand, TestPhase, TestState};
pub use quiz_editor::QuizEditorState;
pub use router::{Destination, NavItem, Router, View};
pub use session::SessionState;
pub use users::{PendingRoleChange, UserManagementState};

/// Learn screen state
#[derive(Debug, Clone)]
pub struct LearnState {
    pub loading: bool,
    pub deck: FlashcardDeck,
}

impl Default for LearnState {
    fn default() -> Self {
        Self {
            loading: true,
            deck: FlashcardDeck::default(),
        }
    }
}

/// Game screen state; the game starts once the menu has loaded
#[derive(Debug, Clone)]
pub struct GameState {
    pub loading: bool,
    pub game: Option<MatchGame>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            loading: true,
            game: None,
        }
    }
}

/// Notification severity for toasts drained by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: SessionState,
    pub router: Router,
    pub learn: LearnState,
    pub test: TestState,
    pub game: GameState,
    pub profile: ProfileState,
    pub admin: AdminState,
    pub users: UserManagementState,
    pub quiz_editor: QuizEditorState,
    /// Pending notifications to display (level, message)
    pub pending_notifications: Vec<(NotificationLevel, String)>,
}

impl AppState {
    pub fn new(start: View) -> Self {
        Self {
            session: SessionState::Loading,
            router: Router::new(start),
            learn: LearnState::default(),
            test: TestState::default(),
            game: GameState::default(),
            profile: ProfileState::default(),
            admin: AdminState::default(),
            users: UserManagementState::default(),
            quiz_editor: QuizEditorState::default(),
            pending_notifications: Vec::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn destination(&self) -> Destination {
        self.router.resolve(self.session.roles())
    }

    /// Reset the state of `view` to its loading defaults
    pub fn reset_view(&mut self, view: &View) {
        match view {
            View::Learn => self.learn = LearnState::default(),
            View::Test => self.test = TestState::default(),
            View::Game => self.game = GameState::default(),
            View::Profile => self.profile = ProfileState::default(),
            View::Admin => self.admin = AdminState::default(),
            View::UserManagement => self.users = UserManagementState::default(),
            View::QuizEditor => self.quiz_editor = QuizEditorState::default(),
            View::Home | View::Unknown(_) => {}
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(View::Home)
    }
}
