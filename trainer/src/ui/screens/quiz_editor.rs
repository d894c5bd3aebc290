//! # Quiz Editor Screen
//!
//! Title, questions, and up to five answers per question. Exactly one answer
//! is correct; any wrong answer may be flagged as a trap.

use shared::MAX_ANSWERS;

use crate::app::{AppLike, AppState, View};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

enum EditorAction {
    MarkCorrect(usize, usize),
    ToggleTrap(usize, usize),
    AddAnswer(usize),
}

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    if forms::render_back_header(ui, "New quiz", &theme) {
        app.navigate(View::Home);
        return;
    }

    let editor = &state.quiz_editor;
    let mut action = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        {
            let mut guard = app.state().write();
            forms::render_text_input(
                ui,
                "Quiz title",
                &mut guard.quiz_editor.draft.title,
                "Wine list basics",
                320.0,
            );
        }
        ui.add_space(10.0);

        for (q, question) in editor.draft.questions.iter().enumerate() {
            egui::Frame::new()
                .fill(theme.surface)
                .corner_radius(8)
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(format!("Question {}", q + 1)).strong());
                    {
                        let mut guard = app.state().write();
                        if let Some(draft) = guard.quiz_editor.draft.questions.get_mut(q) {
                            ui.add_sized(
                                [ui.available_width(), 30.0],
                                egui::TextEdit::singleline(&mut draft.question_text)
                                    .hint_text("Question text"),
                            );
                        }
                    }

                    for (a, answer) in question.answers.iter().enumerate() {
                        ui.horizontal(|ui| {
                            if ui.radio(answer.is_correct, "").on_hover_text("Correct answer").clicked() {
                                action = Some(EditorAction::MarkCorrect(q, a));
                            }
                            {
                                let mut guard = app.state().write();
                                if let Some(draft) = guard
                                    .quiz_editor
                                    .draft
                                    .questions
                                    .get_mut(q)
                                    .and_then(|question| question.answers.get_mut(a))
                                {
                                    ui.add_sized(
                                        [200.0, 26.0],
                                        egui::TextEdit::singleline(&mut draft.answer_text)
                                            .hint_text(format!("Answer {}", a + 1)),
                                    );
                                }
                            }
                            let mut trap = answer.is_trap;
                            let trap_box = ui.add_enabled(!answer.is_correct, egui::Checkbox::new(&mut trap, "Trap"));
                            if trap_box.changed() {
                                action = Some(EditorAction::ToggleTrap(q, a));
                            }
                        });
                    }

                    let can_add = question.answers.len() < MAX_ANSWERS;
                    if ui.add_enabled(can_add, egui::Button::new("+ Answer")).clicked() {
                        action = Some(EditorAction::AddAnswer(q));
                    }
                });
            ui.add_space(8.0);
        }

        if forms::render_button(ui, "Add question", Some("+"), None, true).clicked() {
            app.add_question();
        }
        ui.add_space(12.0);

        if let Some(error) = &editor.error {
            forms::render_error(ui, error, &theme);
        }

        let label = if editor.submitting { "Saving..." } else { "Save quiz" };
        if forms::render_button(ui, label, Some("✔"), Some(theme.success), !editor.submitting).clicked() {
            app.submit_quiz();
        }
    });

    match action {
        Some(EditorAction::MarkCorrect(q, a)) => app.mark_correct(q, a),
        Some(EditorAction::ToggleTrap(q, a)) => app.toggle_trap(q, a),
        Some(EditorAction::AddAnswer(q)) => app.add_answer(q),
        None => {}
    }
}
