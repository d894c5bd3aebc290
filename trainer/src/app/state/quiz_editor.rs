//! Quiz editor: nested question/answer draft.

use shared::{NewAnswer, NewQuestion, NewQuiz, MAX_ANSWERS};

use crate::core::error::{AppError, Result};
use crate::utils::validation::validate_quiz_draft;

#[derive(Debug, Clone, Default)]
pub struct QuizEditorState {
    /// Starts with one question holding one answer
    pub draft: NewQuiz,
    pub submitting: bool,
    pub error: Option<String>,
}

impl QuizEditorState {
    fn answer_mut(&mut self, question: usize, answer: usize) -> Option<&mut NewAnswer> {
        self.draft
            .questions
            .get_mut(question)
            .and_then(|q| q.answers.get_mut(answer))
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_question_text(&mut self, question: usize, text: String) {
        if let Some(q) = self.draft.questions.get_mut(question) {
            q.question_text = text;
        }
    }

    pub fn set_answer_text(&mut self, question: usize, answer: usize, text: String) {
        if let Some(a) = self.answer_mut(question, answer) {
            a.answer_text = text;
        }
    }

    /// Single choice: exactly this answer becomes correct, and it stops being a trap
    pub fn mark_correct(&mut self, question: usize, answer: usize) {
        let Some(q) = self.draft.questions.get_mut(question) else {
            return;
        };
        if answer >= q.answers.len() {
            return;
        }
        for (i, a) in q.answers.iter_mut().enumerate() {
            a.is_correct = i == answer;
            if i == answer {
                a.is_trap = false;
            }
        }
    }

    /// Toggle the trap flag; a correct answer cannot be a trap
    pub fn toggle_trap(&mut self, question: usize, answer: usize) {
        if let Some(a) = self.answer_mut(question, answer) {
            if !a.is_correct {
                a.is_trap = !a.is_trap;
            }
        }
    }

    /// Append an empty answer, up to the per-question limit
    pub fn add_answer(&mut self, question: usize) -> bool {
        match self.draft.questions.get_mut(question) {
            Some(q) if q.answers.len() < MAX_ANSWERS => {
                q.answers.push(NewAnswer::default());
                true
            }
            _ => false,
        }
    }

    pub fn add_question(&mut self) {
        self.draft.questions.push(NewQuestion::default());
    }

    /// Validate and mark as submitting, returning the draft to send
    pub fn begin_submit(&mut self) -> Result<NewQuiz> {
        if self.submitting {
            return Err(AppError::State("Quiz is already being saved".into()));
        }
        self.error = None;
        let check = validate_quiz_draft(&self.draft);
        if !check.is_valid {
            let message = check.error.unwrap_or_default();
            self.error = Some(message.clone());
            return Err(AppError::Validation(message));
        }
        self.submitting = true;
        Ok(self.draft.clone())
    }

    pub fn finish_submit(&mut self, result: &Result<shared::Quiz>) {
        self.submitting = false;
        match result {
            Ok(_) => *self = Self::default(),
            Err(e) => self.error = Some(e.message().to_string()),
        }
    }
}
