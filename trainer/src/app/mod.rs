//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async gateway
//! calls and the application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  App                                                        │
//! │  - on_tick()     drains AppEvents, advances timed screens   │
//! │  - AppLike impl  user actions -> handlers                   │
//! │  State: Arc<RwLock<AppState>>                               │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  tasks::session / content / profile / admin                 │
//! │  each calls the DataGateway and sends one AppEvent back     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The main thread is the only place screen state changes while events are
//! processed. Timed transitions (card exit animation, answer reveal, game
//! feedback) are `Instant` deadlines checked in [`App::on_tick`].
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types and definitions
//! - [`events`]: Event enum for async communication
//! - [`handlers`]: User action handlers
//! - [`tasks`]: Async background tasks

mod app_trait;
mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use app_trait::AppLike;
pub use event_handler::ROLE_UPDATE_FAILED;
pub use events::{AdminData, AppEvent, ProfileData};
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::{User, UserRole};
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::core::DataGateway;
use crate::services::api::SupabaseClient;

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for the minimal duration; rendering works on a cloned snapshot.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into async tasks.
    event_tx: Sender<AppEvent>,

    /// Data gateway shared with async tasks.
    gateway: Arc<dyn DataGateway>,
}

impl App {
    /// Create the application against the hosted data service and start the session.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        let gateway: Arc<dyn DataGateway> = Arc::new(SupabaseClient::new(config));
        let app = Self::with_gateway(gateway, View::parse(&config.start_view));
        app.start_session(config.launch_data.as_deref());

        tracing::info!(
            start_view = %config.start_view,
            host_launch = config.launch_data.is_some(),
            "App state initialized"
        );
        app
    }

    /// Create the application over any gateway; the session is not started.
    pub fn with_gateway(gateway: Arc<dyn DataGateway>, start: View) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            state: Arc::new(RwLock::new(AppState::new(start))),
            event_rx,
            event_tx,
            gateway,
        }
    }

    /// Resolve the session from the host launch payload (or offer demo accounts)
    pub fn start_session(&self, launch_data: Option<&str>) {
        handlers::session::start_session(
            self.state.clone(),
            self.event_tx.clone(),
            self.gateway.clone(),
            launch_data,
        );
    }

    /// Called every frame to process async events and timed transitions.
    pub fn on_tick(&mut self) {
        let started = Instant::now();
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::debug!(
                events_processed,
                processing_time_us = started.elapsed().as_micros(),
                "on_tick: processed events"
            );
        }

        self.advance_timers(Instant::now());
    }

    fn advance_timers(&mut self, now: Instant) {
        let mut state = self.state.write();
        let view = state.router.current.clone();
        match view {
            View::Learn => {
                state.learn.deck.tick(now);
            }
            View::Test => state.test.tick(now),
            View::Game => {
                if let Some(game) = state.game.game.as_mut() {
                    game.tick(now, &mut rand::rng());
                }
            }
            _ => {}
        }
    }

    /// Whether a timed transition is pending and the UI should keep repainting
    pub fn is_animating(&self) -> bool {
        let state = self.state.read();
        match state.router.current {
            View::Learn => state.learn.deck.pending_swipe().is_some(),
            View::Test => matches!(&state.test.phase, TestPhase::Running(runner) if runner.is_answered()),
            View::Game => state.game.game.as_ref().is_some_and(|game| game.feedback().is_some()),
            _ => false,
        }
    }

    /// Drain notifications raised since the last frame
    pub fn take_notifications(&self) -> Vec<(NotificationLevel, String)> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    /// Handle async event results
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    fn enter_current_view(&self) {
        handlers::navigation::enter_current_view(
            self.state.clone(),
            self.event_tx.clone(),
            self.gateway.clone(),
        );
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn select_demo_user(&mut self, user: User) {
        handlers::session::select_demo_user(
            self.state.clone(),
            self.event_tx.clone(),
            self.gateway.clone(),
            user,
        );
    }

    fn navigate(&mut self, view: View) {
        handlers::navigation::navigate(
            self.state.clone(),
            self.event_tx.clone(),
            self.gateway.clone(),
            view,
        );
    }

    fn flip_card(&mut self) {
        handlers::training::flip_card(self.state.clone());
    }

    fn swipe_card(&mut self, direction: SwipeDirection) {
        handlers::training::swipe_card(self.state.clone(), direction);
    }

    fn card_drag_start(&mut self, x: f32) {
        handlers::training::card_drag_start(self.state.clone(), x);
    }

    fn card_drag_end(&mut self, x: f32) {
        handlers::training::card_drag_end(self.state.clone(), x);
    }

    fn restart_deck(&mut self) {
        handlers::training::restart_deck(self.state.clone());
    }

    fn start_quiz(&mut self, quiz_id: i64) {
        handlers::training::start_quiz(self.state.clone(), quiz_id);
    }

    fn select_answer(&mut self, answer_id: i64) {
        handlers::training::select_answer(self.state.clone(), answer_id);
    }

    fn back_to_quiz_list(&mut self) {
        handlers::training::back_to_quiz_list(self.state.clone());
    }

    fn choose_photo(&mut self, item_id: i64) {
        handlers::training::choose_photo(self.state.clone(), item_id);
    }

    fn restart_game(&mut self) {
        handlers::training::restart_game(self.state.clone());
    }

    fn select_admin_tab(&mut self, tab: AdminTab) {
        handlers::admin::select_tab(self.state.clone(), tab);
    }

    fn open_menu_item_form(&mut self) {
        handlers::admin::open_menu_item_form(self.state.clone());
    }

    fn close_menu_item_form(&mut self) {
        handlers::admin::close_menu_item_form(self.state.clone());
    }

    fn submit_menu_item(&mut self) {
        handlers::admin::submit_menu_item(
            self.state.clone(),
            self.event_tx.clone(),
            self.gateway.clone(),
        );
    }

    fn add_category(&mut self) {
        handlers::admin::add_category(
            self.state.clone(),
            self.event_tx.clone(),
            self.gateway.clone(),
        );
    }

    fn change_user_role(&mut self, user_id: String, role: UserRole) {
        handlers::users::change_user_role(
            self.state.clone(),
            self.event_tx.clone(),
            self.gateway.clone(),
            user_id,
            role,
        );
    }

    fn mark_correct(&mut self, question: usize, answer: usize) {
        handlers::quiz_editor::mark_correct(self.state.clone(), question, answer);
    }

    fn toggle_trap(&mut self, question: usize, answer: usize) {
        handlers::quiz_editor::toggle_trap(self.state.clone(), question, answer);
    }

    fn add_answer(&mut self, question: usize) {
        handlers::quiz_editor::add_answer(self.state.clone(), question);
    }

    fn add_question(&mut self) {
        handlers::quiz_editor::add_question(self.state.clone());
    }

    fn submit_quiz(&mut self) {
        handlers::quiz_editor::submit_quiz(
            self.state.clone(),
            self.event_tx.clone(),
            self.gateway.clone(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::{menu_items, user, MockGateway};
    use shared::MenuItemCategory;

    fn app_with(mock: Arc<MockGateway>) -> App {
        App::with_gateway(mock, View::Home)
    }

    fn sign_in(app: &App, roles: Vec<UserRole>) {
        app.state.write().session = SessionState::Authenticated(user("me", roles));
    }

    async fn process_next(app: &mut App) {
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);
    }

    // ========== Session ==========

    #[tokio::test]
    async fn test_host_user_resolves_to_staff_record() {
        let mock = Arc::new(MockGateway::with_users(vec![User::new(
            "7",
            101,
            "Anna",
            vec![UserRole::Waiter],
        )]));
        let mut app = app_with(mock.clone());

        app.start_session(Some("user=%7B%22id%22%3A101%2C%22first_name%22%3A%22Anna%22%7D&auth_date=1"));
        assert_eq!(app.state.read().session, SessionState::Loading);

        process_next(&mut app).await;
        let state = app.state.read();
        assert_eq!(state.session.user().map(|u| u.id.as_str()), Some("7"));
        assert_eq!(state.destination(), Destination::StaffDashboard);
    }

    #[tokio::test]
    async fn test_unknown_host_user_fails_session() {
        let mock = Arc::new(MockGateway::default());
        let mut app = app_with(mock);

        app.start_session(Some("user=%7B%22id%22%3A555%2C%22first_name%22%3A%22X%22%7D"));
        process_next(&mut app).await;

        assert_eq!(
            app.state.read().session,
            SessionState::Failed(session::not_found_message(555))
        );
    }

    #[tokio::test]
    async fn test_host_user_without_roles_fails_session() {
        let mock = Arc::new(MockGateway::with_users(vec![User::new("9", 777, "No Roles", vec![])]));
        let mut app = app_with(mock);

        app.start_session(Some("user=%7B%22id%22%3A777%2C%22first_name%22%3A%22No%22%7D"));
        process_next(&mut app).await;

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert!(matches!(&state.session, SessionState::Failed(msg) if msg.contains("no roles")));
        assert!(state.learn.loading);
    }

    #[tokio::test]
    async fn test_demo_user_without_roles_is_rejected() {
        let mock = Arc::new(MockGateway::default());
        let mut app = app_with(mock.clone());

        app.start_session(None);
        app.select_demo_user(User::new("9", 777, "No Roles", vec![]));

        assert!(!app.state.read().is_authenticated());
        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_without_payload_offers_demo_accounts() {
        let mock = Arc::new(MockGateway::default());
        let mut app = app_with(mock.clone());

        app.start_session(None);
        let roster = match &app.state.read().session {
            SessionState::SelectingUser(roster) => roster.clone(),
            other => panic!("Expected demo selector, got {:?}", other),
        };

        app.select_demo_user(roster[1].clone());
        let state = app.state.read();
        assert!(state.is_authenticated());
        assert_eq!(state.destination(), Destination::ManagerDashboard);
        assert_eq!(mock.total_calls(), 0);
    }

    // ========== Screens ==========

    #[tokio::test]
    async fn test_learn_entry_builds_deck() {
        let mock = Arc::new(MockGateway::with_menu(menu_items(6), vec![]));
        let mut app = app_with(mock);
        sign_in(&app, vec![UserRole::Waiter]);

        app.navigate(View::Learn);
        assert!(app.state.read().learn.loading);

        process_next(&mut app).await;
        let state = app.state.read();
        assert!(!state.learn.loading);
        assert_eq!(state.learn.deck.len(), 6);
    }

    #[tokio::test]
    async fn test_late_result_for_left_view_is_dropped() {
        let mock = Arc::new(MockGateway::with_menu(menu_items(6), vec![]));
        let mut app = app_with(mock);
        sign_in(&app, vec![UserRole::Waiter]);

        app.navigate(View::Learn);
        app.navigate(View::Home);
        process_next(&mut app).await;

        let state = app.state.read();
        assert!(state.learn.loading);
        assert!(state.learn.deck.is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_degrades_to_empty() {
        let mock = Arc::new(MockGateway {
            fail_reads: true,
            ..Default::default()
        });
        let mut app = app_with(mock);
        sign_in(&app, vec![UserRole::Waiter]);

        app.navigate(View::Test);
        process_next(&mut app).await;

        let state = app.state.read();
        assert!(!state.test.loading);
        assert!(state.test.quizzes.is_empty());
    }

    // ========== Admin ==========

    #[tokio::test]
    async fn test_zero_price_never_reaches_gateway() {
        let mock = Arc::new(MockGateway::default());
        let mut app = app_with(mock.clone());
        sign_in(&app, vec![UserRole::Chef]);
        {
            let mut state = app.state.write();
            state.router.current = View::Admin;
            state.admin.categories = vec![MenuItemCategory { id: 1, name: "Soups".into() }];
            state.admin.open_form();
            state.admin.form.name = "Borscht".into();
            state.admin.form.description = "Beet soup".into();
            state.admin.form.price = "0".into();
        }

        app.submit_menu_item();

        let state = app.state.read();
        assert_eq!(mock.total_calls(), 0);
        assert!(state.admin.form_error.is_some());
        assert!(state.admin.form_open);
        assert!(!state.admin.submitting);
    }

    #[tokio::test]
    async fn test_menu_item_added_to_list() {
        let mock = Arc::new(MockGateway::default());
        let mut app = app_with(mock.clone());
        sign_in(&app, vec![UserRole::Chef]);
        {
            let mut state = app.state.write();
            state.router.current = View::Admin;
            state.admin.categories = vec![MenuItemCategory { id: 2, name: "Soups".into() }];
            state.admin.open_form();
            state.admin.form.name = "borscht".into();
            state.admin.form.description = "Beet soup".into();
            state.admin.form.price = "450".into();
        }

        app.submit_menu_item();
        assert!(app.state.read().admin.submitting);
        process_next(&mut app).await;

        let state = app.state.read();
        assert_eq!(mock.call_count("add_menu_item"), 1);
        assert_eq!(state.admin.items[0].name, "Borscht");
        assert!(!state.admin.form_open);
    }

    #[tokio::test]
    async fn test_failed_role_update_rolls_back_with_one_alert() {
        let staff = vec![user("a", vec![UserRole::Waiter]), user("b", vec![UserRole::Chef])];
        let mock = Arc::new(MockGateway {
            fail_role_update: true,
            ..MockGateway::with_users(staff.clone())
        });
        let mut app = app_with(mock.clone());
        sign_in(&app, vec![UserRole::GeneralManager]);
        {
            let mut state = app.state.write();
            state.router.current = View::UserManagement;
            state.users.users = staff;
            state.users.loading = false;
        }

        app.change_user_role("a".into(), UserRole::BarManager);
        assert_eq!(
            app.state.read().users.user("a").unwrap().roles,
            vec![UserRole::BarManager]
        );

        process_next(&mut app).await;

        assert_eq!(mock.call_count("update_user_roles"), 1);
        assert_eq!(
            app.state.read().users.user("a").unwrap().roles,
            vec![UserRole::Waiter]
        );
        let notifications = app.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0], (NotificationLevel::Error, ROLE_UPDATE_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_role_change_requires_user_admin() {
        let mock = Arc::new(MockGateway::with_users(vec![user("a", vec![UserRole::Waiter])]));
        let mut app = app_with(mock.clone());
        sign_in(&app, vec![UserRole::Chef]);
        app.state.write().users.users = vec![user("a", vec![UserRole::Waiter])];

        app.change_user_role("a".into(), UserRole::SuperAdmin);

        assert_eq!(mock.total_calls(), 0);
        assert_eq!(
            app.state.read().users.user("a").unwrap().roles,
            vec![UserRole::Waiter]
        );
    }

    #[tokio::test]
    async fn test_quiz_created_returns_home() {
        let mock = Arc::new(MockGateway::default());
        let mut app = app_with(mock.clone());
        sign_in(&app, vec![UserRole::SuperAdmin]);
        app.navigate(View::QuizEditor);
        {
            let mut state = app.state.write();
            state.quiz_editor.set_title("Wine".into());
            state.quiz_editor.set_question_text(0, "Red grape?".into());
            state.quiz_editor.set_answer_text(0, 0, "Merlot".into());
        }
        app.mark_correct(0, 0);

        app.submit_quiz();
        process_next(&mut app).await;

        assert_eq!(mock.call_count("create_quiz"), 1);
        assert_eq!(app.state.read().router.current, View::Home);
        let notifications = app.take_notifications();
        assert_eq!(
            notifications,
            vec![(NotificationLevel::Success, "Quiz \"Wine\" created".to_string())]
        );
    }
}
