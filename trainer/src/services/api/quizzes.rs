//! # Quiz Endpoints
//!
//! Quizzes are read with questions and answers embedded. Creation inserts the
//! quiz row, then its questions, then every answer, in three requests.

use shared::{
    Answer, AnswerInsert, NewQuiz, Question, QuestionInsert, Quiz, QuizInsert,
};

use super::client::SupabaseClient;
use crate::core::error::{AppError, Result};

pub async fn get_quizzes(client: &SupabaseClient) -> Result<Vec<Quiz>> {
    client
        .fetch_rows("quizzes?select=*,questions(*,answers(*))")
        .await
}

/// Row returned when inserting into `answers`
#[derive(serde::Deserialize)]
struct AnswerRow {
    id: i64,
    question_id: i64,
    answer_text: String,
    is_correct: bool,
    #[serde(default)]
    is_trap: bool,
}

#[tracing::instrument(skip(client, quiz), fields(title = %quiz.title, questions = quiz.questions.len()))]
pub async fn create_quiz(client: &SupabaseClient, quiz: NewQuiz) -> Result<Quiz> {
    let start = std::time::Instant::now();

    let stored: Quiz = client
        .insert_row("quizzes", &QuizInsert { title: quiz.title.clone() })
        .await?;

    let question_rows: Vec<QuestionInsert> = quiz
        .questions
        .iter()
        .map(|question| QuestionInsert {
            quiz_id: stored.id,
            question_text: question.question_text.clone(),
            question_type: question.question_type,
        })
        .collect();
    let mut questions: Vec<Question> = client.insert_rows("questions", &question_rows).await?;

    if questions.len() != quiz.questions.len() {
        return Err(AppError::Api(format!(
            "Expected {} stored questions, got {}",
            quiz.questions.len(),
            questions.len()
        )));
    }

    // Representation rows come back in insert order
    let answer_rows: Vec<AnswerInsert> = questions
        .iter()
        .zip(&quiz.questions)
        .flat_map(|(stored_question, draft)| {
            draft.answers.iter().map(move |answer| AnswerInsert {
                question_id: stored_question.id,
                answer_text: answer.answer_text.clone(),
                is_correct: answer.is_correct,
                is_trap: answer.is_trap,
            })
        })
        .collect();
    let answers: Vec<AnswerRow> = client.insert_rows("answers", &answer_rows).await?;

    for question in &mut questions {
        question.answers = answers
            .iter()
            .filter(|answer| answer.question_id == question.id)
            .map(|answer| Answer {
                id: answer.id,
                answer_text: answer.answer_text.clone(),
                is_correct: answer.is_correct,
                is_trap: answer.is_trap,
            })
            .collect();
    }

    tracing::info!(
        quiz_id = stored.id,
        answers = answers.len(),
        duration_ms = start.elapsed().as_millis(),
        "Quiz created"
    );

    Ok(Quiz {
        questions,
        ..stored
    })
}
