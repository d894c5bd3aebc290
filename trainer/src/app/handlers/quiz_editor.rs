//! # Quiz Editor Handlers

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks::{self, Gateway};

pub(crate) fn mark_correct(state: Arc<RwLock<AppState>>, question: usize, answer: usize) {
    state.write().quiz_editor.mark_correct(question, answer);
}

pub(crate) fn toggle_trap(state: Arc<RwLock<AppState>>, question: usize, answer: usize) {
    state.write().quiz_editor.toggle_trap(question, answer);
}

pub(crate) fn add_answer(state: Arc<RwLock<AppState>>, question: usize) {
    if !state.write().quiz_editor.add_answer(question) {
        tracing::debug!(question, "Answer limit reached");
    }
}

pub(crate) fn add_question(state: Arc<RwLock<AppState>>) {
    state.write().quiz_editor.add_question();
}

/// Validate the draft and create the quiz
///
/// Internal handler function - use [`crate::app::App::submit_quiz`] instead.
pub(crate) fn submit_quiz(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    gateway: Gateway,
) {
    let quiz = match state.write().quiz_editor.begin_submit() {
        Ok(quiz) => quiz,
        Err(e) => {
            tracing::debug!(error = %e, "Quiz draft rejected");
            return;
        }
    };
    tasks::admin::create_quiz(gateway, event_tx, quiz);
}
