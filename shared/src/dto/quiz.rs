use serde::{Deserialize, Serialize};

/// Upper bound on answers per question
pub const MAX_ANSWERS: usize = 5;

/// Question kind. Only single choice is exercised by the quiz runner.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    SingleChoice,
    MultipleChoice,
    TrueFalse,
    FindPhoto,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    pub id: i64,
    pub answer_text: String,
    pub is_correct: bool,
    /// Plausible but wrong answer
    #[serde(default)]
    pub is_trap: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub question_text: String,
    #[serde(default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn answer(&self, answer_id: i64) -> Option<&Answer> {
        self.answers.iter().find(|answer| answer.id == answer_id)
    }
}

/// Quiz with embedded questions (`quizzes?select=*,questions(*,answers(*))`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Answer draft
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAnswer {
    pub answer_text: String,
    pub is_correct: bool,
    pub is_trap: bool,
}

impl NewAnswer {
    pub fn validate(&self) -> Result<(), String> {
        if self.is_correct && self.is_trap {
            return Err("An answer cannot be both correct and a trap".to_string());
        }
        Ok(())
    }
}

/// Question draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewQuestion {
    pub question_text: String,
    pub question_type: QuestionType,
    pub answers: Vec<NewAnswer>,
}

impl Default for NewQuestion {
    fn default() -> Self {
        Self {
            question_text: String::new(),
            question_type: QuestionType::SingleChoice,
            answers: vec![NewAnswer::default()],
        }
    }
}

impl NewQuestion {
    pub fn validate(&self) -> Result<(), String> {
        if self.answers.is_empty() || self.answers.len() > MAX_ANSWERS {
            return Err(format!(
                "A question must have between 1 and {} answers",
                MAX_ANSWERS
            ));
        }
        self.answers.iter().try_for_each(NewAnswer::validate)
    }
}

/// Quiz draft built by the quiz editor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewQuiz {
    pub title: String,
    pub questions: Vec<NewQuestion>,
}

impl Default for NewQuiz {
    fn default() -> Self {
        Self {
            title: String::new(),
            questions: vec![NewQuestion::default()],
        }
    }
}

impl NewQuiz {
    pub fn validate(&self) -> Result<(), String> {
        self.questions.iter().try_for_each(NewQuestion::validate)
    }
}

/// Insert payload for `quizzes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizInsert {
    pub title: String,
}

/// Insert payload for `questions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionInsert {
    pub quiz_id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
}

/// Insert payload for `answers`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerInsert {
    pub question_id: i64,
    pub answer_text: String,
    pub is_correct: bool,
    pub is_trap: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_quiz_parses() {
        let json = r#"[{
            "id": 1,
            "title": "Wine basics",
            "questions": [{
                "id": 10,
                "quiz_id": 1,
                "question_text": "Which grape is red?",
                "question_type": "single_choice",
                "answers": [
                    {"id": 100, "question_id": 10, "answer_text": "Merlot", "is_correct": true},
                    {"id": 101, "question_id": 10, "answer_text": "Riesling", "is_correct": false, "is_trap": true}
                ]
            }]
        }]"#;
        let quizzes: Vec<Quiz> = serde_json::from_str(json).unwrap();
        let question = &quizzes[0].questions[0];
        assert_eq!(question.question_type, QuestionType::SingleChoice);
        assert!(!question.answer(100).unwrap().is_trap);
        assert!(question.answer(101).unwrap().is_trap);
        assert!(question.answer(102).is_none());
    }

    #[test]
    fn test_answer_cannot_be_correct_trap() {
        let answer = NewAnswer {
            answer_text: "Merlot".into(),
            is_correct: true,
            is_trap: true,
        };
        assert!(answer.validate().is_err());
    }

    #[test]
    fn test_question_answer_bounds() {
        let mut question = NewQuestion::default();
        assert!(question.validate().is_ok());

        question.answers.clear();
        assert!(question.validate().is_err());

        question.answers = vec![NewAnswer::default(); MAX_ANSWERS + 1];
        assert!(question.validate().is_err());
    }
}
