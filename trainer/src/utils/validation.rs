//! Validation utilities for admin forms

use shared::{NewQuiz, MAX_ANSWERS};

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

pub const MENU_ITEM_REQUIRED: &str =
    "Please fill in all required fields (name, description, price, category).";

/// Parse a price field; `None` unless it is a finite number above zero
pub fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

/// Validate the required menu item fields
pub fn validate_menu_item(
    name: &str,
    description: &str,
    price: &str,
    category_id: Option<i64>,
) -> ValidationResult {
    if name.trim().is_empty()
        || description.trim().is_empty()
        || parse_price(price).is_none()
        || category_id.is_none()
    {
        return ValidationResult::err(MENU_ITEM_REQUIRED);
    }

    ValidationResult::ok()
}

/// Validate a category name
pub fn validate_category_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return ValidationResult::err("Category name cannot be empty.");
    }

    ValidationResult::ok()
}

/// Validate a quiz draft before it is submitted
pub fn validate_quiz_draft(quiz: &NewQuiz) -> ValidationResult {
    if quiz.title.trim().is_empty() {
        return ValidationResult::err("Quiz title is required.");
    }

    if quiz.questions.is_empty() {
        return ValidationResult::err("A quiz needs at least one question.");
    }

    for (i, question) in quiz.questions.iter().enumerate() {
        if question.question_text.trim().is_empty() {
            return ValidationResult::err(format!("Question {} has no text.", i + 1));
        }

        if question.answers.is_empty() || question.answers.len() > MAX_ANSWERS {
            return ValidationResult::err(format!(
                "Question {} must have between 1 and {} answers.",
                i + 1,
                MAX_ANSWERS
            ));
        }

        if question
            .answers
            .iter()
            .any(|answer| answer.answer_text.trim().is_empty())
        {
            return ValidationResult::err(format!("Question {} has an empty answer.", i + 1));
        }

        if !question.answers.iter().any(|answer| answer.is_correct) {
            return ValidationResult::err(format!(
                "Question {} needs a correct answer.",
                i + 1
            ));
        }

        if let Err(e) = question.validate() {
            return ValidationResult::err(e);
        }
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{NewAnswer, NewQuestion};

    #[test]
    fn test_price_parsing() {
        assert_eq!(parse_price("450"), Some(450.0));
        assert_eq!(parse_price(" 12,50 "), Some(12.5));
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("-3"), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_menu_item_validation() {
        assert!(validate_menu_item("Borscht", "Beet soup", "450", Some(1)).is_valid);
        assert!(!validate_menu_item("Borscht", "Beet soup", "0", Some(1)).is_valid);
        assert!(!validate_menu_item("", "Beet soup", "450", Some(1)).is_valid);
        assert!(!validate_menu_item("Borscht", "  ", "450", Some(1)).is_valid);
        assert!(!validate_menu_item("Borscht", "Beet soup", "450", None).is_valid);
    }

    #[test]
    fn test_category_validation() {
        assert!(validate_category_name("Soups").is_valid);
        assert!(!validate_category_name("   ").is_valid);
    }

    #[test]
    fn test_quiz_draft_validation() {
        let mut quiz = NewQuiz {
            title: "Bar".into(),
            questions: vec![NewQuestion {
                question_text: "Base spirit of a Negroni?".into(),
                answers: vec![
                    NewAnswer { answer_text: "Gin".into(), is_correct: true, is_trap: false },
                    NewAnswer { answer_text: "Vodka".into(), is_correct: false, is_trap: true },
                ],
                ..Default::default()
            }],
        };
        assert!(validate_quiz_draft(&quiz).is_valid);

        quiz.questions[0].answers[0].is_correct = false;
        assert!(!validate_quiz_draft(&quiz).is_valid);

        quiz.questions[0].answers[0].is_correct = true;
        quiz.title = " ".into();
        assert!(!validate_quiz_draft(&quiz).is_valid);
    }
}
