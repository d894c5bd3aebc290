//! # Training Handlers
//!
//! Learn, Test and Game interactions. These only touch local state; the
//! timed transitions are driven from [`crate::app::App::on_tick`].

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

use crate::app::state::{AppState, SwipeDirection};

pub(crate) fn flip_card(state: Arc<RwLock<AppState>>) {
    state.write().learn.deck.flip();
}

pub(crate) fn swipe_card(state: Arc<RwLock<AppState>>, direction: SwipeDirection) {
    state.write().learn.deck.swipe(direction, Instant::now());
}

pub(crate) fn card_drag_start(state: Arc<RwLock<AppState>>, x: f32) {
    state.write().learn.deck.touch_start(x);
}

pub(crate) fn card_drag_end(state: Arc<RwLock<AppState>>, x: f32) {
    let swiped = state.write().learn.deck.touch_end(x, Instant::now());
    if let Some(direction) = swiped {
        tracing::debug!(?direction, "Card swiped");
    }
}

pub(crate) fn restart_deck(state: Arc<RwLock<AppState>>) {
    state.write().learn.deck.restart(&mut rand::rng());
}

pub(crate) fn start_quiz(state: Arc<RwLock<AppState>>, quiz_id: i64) {
    if !state.write().test.start(quiz_id) {
        tracing::warn!(quiz_id, "Quiz not found in the loaded list");
    }
}

pub(crate) fn select_answer(state: Arc<RwLock<AppState>>, answer_id: i64) {
    state.write().test.select(answer_id, Instant::now());
}

pub(crate) fn back_to_quiz_list(state: Arc<RwLock<AppState>>) {
    state.write().test.back_to_list();
}

pub(crate) fn choose_photo(state: Arc<RwLock<AppState>>, item_id: i64) {
    let mut state = state.write();
    if let Some(game) = state.game.game.as_mut() {
        game.choose(item_id, Instant::now());
    }
}

/// Start a new game over the same dishes
pub(crate) fn restart_game(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let Some(game) = state.game.game.take() {
        let pool = game.pool().to_vec();
        state.game.game = Some(crate::app::state::MatchGame::new(pool, &mut rand::rng()));
    }
}
