//! # Test Screen
//!
//! Quiz list, the running quiz with answer reveal, and the result.

use crate::app::{AnswerMark, AppLike, AppState, QuizOutcome, QuizRunner, TestPhase, View};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    if forms::render_back_header(ui, "Tests", &theme) {
        app.navigate(View::Home);
        return;
    }

    if state.test.loading {
        forms::render_loading(ui, "Loading tests...", &theme);
        return;
    }

    match &state.test.phase {
        TestPhase::List => render_list(ui, state, app, &theme),
        TestPhase::Running(runner) => render_question(ui, runner, app, &theme),
        TestPhase::Result(outcome) => render_result(ui, outcome, app, &theme),
    }
}

fn render_list(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    if state.test.quizzes.is_empty() {
        forms::render_hint(ui, "No tests available yet.", theme);
        return;
    }

    let mut chosen = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for quiz in &state.test.quizzes {
            let label = format!("{}\n{} questions", quiz.title, quiz.questions.len());
            let button = egui::Button::new(egui::RichText::new(label).size(15.0))
                .min_size(egui::vec2(ui.available_width(), 52.0))
                .fill(theme.surface);
            if ui.add(button).clicked() {
                chosen = Some(quiz.id);
            }
            ui.add_space(6.0);
        }
    });

    if let Some(quiz_id) = chosen {
        app.start_quiz(quiz_id);
    }
}

fn answer_fill(mark: AnswerMark, theme: &Theme) -> egui::Color32 {
    match mark {
        AnswerMark::Open => theme.surface,
        AnswerMark::Correct => theme.success,
        AnswerMark::Wrong => theme.error,
        AnswerMark::Dimmed => theme.background,
    }
}

fn render_question(ui: &mut egui::Ui, runner: &QuizRunner, app: &mut impl AppLike, theme: &Theme) {
    let Some(question) = runner.current_question() else {
        return;
    };

    ui.label(egui::RichText::new(&runner.quiz().title).size(16.0).color(theme.dim));
    forms::render_hint(
        ui,
        &format!("Question {} of {}", runner.question_number(), runner.total()),
        theme,
    );
    ui.add(egui::ProgressBar::new(runner.question_number() as f32 / runner.total().max(1) as f32).fill(theme.selected));
    ui.add_space(12.0);
    ui.label(egui::RichText::new(&question.question_text).size(19.0).strong());
    ui.add_space(12.0);

    let answered = runner.is_answered();
    let mut chosen = None;
    for answer in &question.answers {
        let mark = runner.mark(answer.id);
        let button = egui::Button::new(egui::RichText::new(&answer.answer_text).size(15.0))
            .min_size(egui::vec2(ui.available_width(), 40.0))
            .fill(answer_fill(mark, theme));
        if ui.add_enabled(!answered, button).clicked() {
            chosen = Some(answer.id);
        }
        ui.add_space(4.0);
    }

    if let Some(answer_id) = chosen {
        app.select_answer(answer_id);
    }
}

fn render_result(ui: &mut egui::Ui, outcome: &QuizOutcome, app: &mut impl AppLike, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new("Test finished").size(22.0).strong());
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(format!("{}%", outcome.percentage()))
                .size(48.0)
                .strong()
                .color(theme.band_color(outcome.band())),
        );
        ui.label(egui::RichText::new(outcome.label()).size(16.0));
        ui.add_space(20.0);
        if forms::render_button(ui, "Back to tests", Some("←"), Some(theme.selected), true).clicked() {
            app.back_to_quiz_list();
        }
    });
}
