//! Quiz list, runner and result for the Test screen.

use std::time::{Duration, Instant};

use shared::{Question, Quiz};

/// How long the answer highlight stays before moving on
pub const ANSWER_REVEAL: Duration = Duration::from_millis(1500);

/// Colour band of a result percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Above 80%
    Excellent,
    /// Above 50%
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub total: u32,
}

impl QuizOutcome {
    /// round(100 * score / total), 0 for an empty quiz
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (100.0 * self.score as f64 / self.total as f64).round() as u32
    }

    pub fn band(&self) -> ScoreBand {
        match self.percentage() {
            p if p > 80 => ScoreBand::Excellent,
            p if p > 50 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    /// "score / total"
    pub fn label(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }
}

/// How an answer button should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMark {
    /// Not answered yet
    Open,
    /// Correct answer, revealed after selection
    Correct,
    /// The selected wrong answer
    Wrong,
    /// Any other answer after selection
    Dimmed,
}

#[derive(Debug, Clone)]
pub struct QuizRunner {
    quiz: Quiz,
    index: usize,
    score: u32,
    selected: Option<i64>,
    advance_at: Option<Instant>,
}

impl QuizRunner {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            index: 0,
            score: 0,
            selected: None,
            advance_at: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn question_number(&self) -> usize {
        self.index + 1
    }

    pub fn total(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.index)
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// Record the first answer for the current question.
    ///
    /// Later clicks on the same question are ignored. Returns whether the
    /// selection counted.
    pub fn select(&mut self, answer_id: i64, now: Instant) -> bool {
        if self.selected.is_some() {
            return false;
        }
        let Some(answer) = self
            .current_question()
            .and_then(|question| question.answer(answer_id))
        else {
            return false;
        };
        if answer.is_correct {
            self.score += 1;
        }
        self.selected = Some(answer_id);
        self.advance_at = Some(now + ANSWER_REVEAL);
        true
    }

    pub fn mark(&self, answer_id: i64) -> AnswerMark {
        let Some(selected) = self.selected else {
            return AnswerMark::Open;
        };
        let correct = self
            .current_question()
            .and_then(|question| question.answer(answer_id))
            .is_some_and(|answer| answer.is_correct);
        if correct {
            AnswerMark::Correct
        } else if answer_id == selected {
            AnswerMark::Wrong
        } else {
            AnswerMark::Dimmed
        }
    }

    /// Advance once the reveal delay has passed; `Some` after the last question
    pub fn tick(&mut self, now: Instant) -> Option<QuizOutcome> {
        let due = self.advance_at?;
        if now < due {
            return None;
        }
        self.advance_at = None;
        self.selected = None;
        if self.index + 1 < self.quiz.questions.len() {
            self.index += 1;
            None
        } else {
            Some(self.outcome())
        }
    }

    pub fn outcome(&self) -> QuizOutcome {
        QuizOutcome {
            score: self.score,
            total: self.quiz.questions.len() as u32,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TestPhase {
    List,
    Running(QuizRunner),
    Result(QuizOutcome),
}

/// Test screen state
#[derive(Debug, Clone)]
pub struct TestState {
    pub quizzes: Vec<Quiz>,
    pub loading: bool,
    pub phase: TestPhase,
}

impl Default for TestState {
    fn default() -> Self {
        Self {
            quizzes: Vec::new(),
            loading: true,
            phase: TestPhase::List,
        }
    }
}

impl TestState {
    /// Open the runner for `quiz_id`. A quiz without questions finishes at 0 / 0.
    pub fn start(&mut self, quiz_id: i64) -> bool {
        let Some(quiz) = self.quizzes.iter().find(|quiz| quiz.id == quiz_id).cloned() else {
            return false;
        };
        self.phase = if quiz.questions.is_empty() {
            TestPhase::Result(QuizOutcome { score: 0, total: 0 })
        } else {
            TestPhase::Running(QuizRunner::new(quiz))
        };
        true
    }

    pub fn select(&mut self, answer_id: i64, now: Instant) -> bool {
        match &mut self.phase {
            TestPhase::Running(runner) => runner.select(answer_id, now),
            _ => false,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let TestPhase::Running(runner) = &mut self.phase {
            if let Some(outcome) = runner.tick(now) {
                tracing::info!(
                    quiz_id = runner.quiz().id,
                    score = outcome.score,
                    total = outcome.total,
                    "Quiz finished"
                );
                self.phase = TestPhase::Result(outcome);
            }
        }
    }

    pub fn back_to_list(&mut self) {
        self.phase = TestPhase::List;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Answer, QuestionType};

    fn question(id: i64, correct: i64) -> Question {
        Question {
            id,
            quiz_id: 1,
            question_text: format!("Question {}", id),
            question_type: QuestionType::SingleChoice,
            answers: (1..=3)
                .map(|n| {
                    let answer_id = id * 10 + n;
                    Answer {
                        id: answer_id,
                        answer_text: format!("Answer {}", answer_id),
                        is_correct: answer_id == correct,
                        is_trap: false,
                    }
                })
                .collect(),
        }
    }

    fn quiz(questions: Vec<Question>) -> Quiz {
        Quiz {
            id: 1,
            title: "Menu basics".into(),
            questions,
        }
    }

    #[test]
    fn test_two_correct_answers() {
        let mut state = TestState {
            quizzes: vec![quiz(vec![question(1, 11), question(2, 23)])],
            loading: false,
            phase: TestPhase::List,
        };
        let mut now = Instant::now();

        assert!(state.start(1));
        assert!(state.select(11, now));
        now += ANSWER_REVEAL;
        state.tick(now);
        assert!(state.select(23, now));
        now += ANSWER_REVEAL;
        state.tick(now);

        let TestPhase::Result(outcome) = state.phase.clone() else {
            panic!("quiz should have finished");
        };
        assert_eq!(outcome.label(), "2 / 2");
        assert_eq!(outcome.percentage(), 100);
        assert_eq!(outcome.band(), ScoreBand::Excellent);

        state.back_to_list();
        assert!(matches!(state.phase, TestPhase::List));
    }

    #[test]
    fn test_selection_locks_after_first_click() {
        let mut runner = QuizRunner::new(quiz(vec![question(1, 12)]));
        let now = Instant::now();

        assert!(runner.select(11, now));
        assert!(!runner.select(12, now));
        assert_eq!(runner.score(), 0);
        assert_eq!(runner.mark(11), AnswerMark::Wrong);
        assert_eq!(runner.mark(12), AnswerMark::Correct);
        assert_eq!(runner.mark(13), AnswerMark::Dimmed);

        assert_eq!(runner.tick(now + Duration::from_millis(1499)), None);
        assert_eq!(
            runner.tick(now + ANSWER_REVEAL),
            Some(QuizOutcome { score: 0, total: 1 })
        );
    }

    #[test]
    fn test_unknown_answer_ignored() {
        let mut runner = QuizRunner::new(quiz(vec![question(1, 11)]));
        assert!(!runner.select(99, Instant::now()));
        assert!(!runner.is_answered());
    }

    #[test]
    fn test_percentage_bands() {
        let outcome = |score, total| QuizOutcome { score, total };
        assert_eq!(outcome(0, 0).percentage(), 0);
        assert_eq!(outcome(2, 3).percentage(), 67);
        assert_eq!(outcome(2, 3).band(), ScoreBand::Fair);
        assert_eq!(outcome(4, 5).band(), ScoreBand::Fair);
        assert_eq!(outcome(1, 2).band(), ScoreBand::Poor);
        assert_eq!(outcome(5, 6).band(), ScoreBand::Excellent);
    }

    #[test]
    fn test_empty_quiz_finishes_immediately() {
        let mut state = TestState {
            quizzes: vec![quiz(Vec::new())],
            loading: false,
            phase: TestPhase::List,
        };
        assert!(state.start(1));
        assert!(matches!(
            state.phase,
            TestPhase::Result(QuizOutcome { score: 0, total: 0 })
        ));
        assert!(!state.start(42));
    }
}
