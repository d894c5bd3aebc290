//! # App Trait
//!
//! The user actions screen renderers may trigger. Screens take
//! `&mut impl AppLike` so they depend on this surface rather than on [`super::App`].

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{User, UserRole};

use crate::app::{AdminTab, AppState, SwipeDirection, View};

/// Trait for application-like types that screen renderers can use.
pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Session and navigation
    fn select_demo_user(&mut self, user: User);
    fn navigate(&mut self, view: View);

    // Learn
    fn flip_card(&mut self);
    fn swipe_card(&mut self, direction: SwipeDirection);
    fn card_drag_start(&mut self, x: f32);
    fn card_drag_end(&mut self, x: f32);
    fn restart_deck(&mut self);

    // Test
    fn start_quiz(&mut self, quiz_id: i64);
    fn select_answer(&mut self, answer_id: i64);
    fn back_to_quiz_list(&mut self);

    // Game
    fn choose_photo(&mut self, item_id: i64);
    fn restart_game(&mut self);

    // Admin
    fn select_admin_tab(&mut self, tab: AdminTab);
    fn open_menu_item_form(&mut self);
    fn close_menu_item_form(&mut self);
    fn submit_menu_item(&mut self);
    fn add_category(&mut self);
    fn change_user_role(&mut self, user_id: String, role: UserRole);

    // Quiz editor
    fn mark_correct(&mut self, question: usize, answer: usize);
    fn toggle_trap(&mut self, question: usize, answer: usize);
    fn add_answer(&mut self, question: usize);
    fn add_question(&mut self);
    fn submit_quiz(&mut self);
}
