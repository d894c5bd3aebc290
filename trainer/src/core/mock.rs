//! In-memory gateway for tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    Achievement, Answer, LeaderboardEntry, LeaderboardUser, MenuItem, MenuItemCategory,
    NewCategory, NewMenuItem, NewQuiz, Question, Quiz, User, UserAchievement, UserRole,
};

use super::error::{AppError, Result};
use super::service::DataGateway;

#[derive(Default)]
pub(crate) struct MockGateway {
    pub users: Mutex<Vec<User>>,
    pub menu_items: Mutex<Vec<MenuItem>>,
    pub categories: Mutex<Vec<MenuItemCategory>>,
    pub quizzes: Mutex<Vec<Quiz>>,
    pub achievements: Vec<Achievement>,
    pub user_achievements: Vec<UserAchievement>,
    pub fail_role_update: bool,
    pub fail_reads: bool,
    pub calls: Mutex<Vec<&'static str>>,
}

impl MockGateway {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Default::default()
        }
    }

    pub fn with_menu(items: Vec<MenuItem>, categories: Vec<MenuItemCategory>) -> Self {
        Self {
            menu_items: Mutex::new(items),
            categories: Mutex::new(categories),
            ..Default::default()
        }
    }

    /// Number of times `op` was invoked
    pub fn call_count(&self, op: &str) -> usize {
        self.calls.lock().iter().filter(|call| **call == op).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, op: &'static str) -> Result<()> {
        self.calls.lock().push(op);
        if self.fail_reads {
            return Err(AppError::Api("Network error: connection refused".into()));
        }
        Ok(())
    }
}

pub(crate) fn menu_item(id: i64, name: &str) -> MenuItem {
    MenuItem {
        id,
        category_id: 1,
        name: name.to_string(),
        description: format!("{} description", name),
        price: 100.0 + id as f64,
        image_url: format!("https://example.com/{}.jpg", id),
        key_features: None,
        is_active: true,
    }
}

pub(crate) fn menu_items(count: i64) -> Vec<MenuItem> {
    (1..=count).map(|id| menu_item(id, &format!("Dish {}", id))).collect()
}

pub(crate) fn user(id: &str, roles: Vec<UserRole>) -> User {
    User::new(id, id.len() as i64 + 100, format!("User {}", id), roles)
}

#[async_trait]
impl DataGateway for MockGateway {
    async fn get_current_user(&self, telegram_id: i64) -> Result<Option<User>> {
        self.record("get_current_user")?;
        Ok(self
            .users
            .lock()
            .iter()
            .find(|user| user.telegram_id == telegram_id)
            .cloned())
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        self.record("get_all_users")?;
        Ok(self.users.lock().clone())
    }

    async fn update_user_roles(&self, user_id: &str, roles: &[UserRole]) -> Result<()> {
        self.calls.lock().push("update_user_roles");
        if self.fail_role_update {
            return Err(AppError::Api("permission denied for function set_user_roles".into()));
        }
        if let Some(user) = self.users.lock().iter_mut().find(|user| user.id == user_id) {
            user.set_roles(roles.to_vec());
        }
        Ok(())
    }

    async fn get_menu_items(&self) -> Result<Vec<MenuItem>> {
        self.record("get_menu_items")?;
        Ok(self.menu_items.lock().clone())
    }

    async fn get_menu_item(&self, id: i64) -> Result<Option<MenuItem>> {
        self.record("get_menu_item")?;
        Ok(self.menu_items.lock().iter().find(|item| item.id == id).cloned())
    }

    async fn add_menu_item(&self, item: NewMenuItem) -> Result<MenuItem> {
        self.record("add_menu_item")?;
        let mut items = self.menu_items.lock();
        let stored = MenuItem {
            id: items.len() as i64 + 1,
            category_id: item.category_id,
            name: shared::capitalize_name(&item.name),
            description: item.description,
            price: item.price,
            image_url: item.image_url,
            key_features: item.key_features,
            is_active: item.is_active,
        };
        items.push(stored.clone());
        Ok(stored)
    }

    async fn get_categories(&self) -> Result<Vec<MenuItemCategory>> {
        self.record("get_categories")?;
        Ok(self.categories.lock().clone())
    }

    async fn add_category(&self, category: NewCategory) -> Result<MenuItemCategory> {
        self.record("add_category")?;
        let mut categories = self.categories.lock();
        let stored = MenuItemCategory {
            id: categories.len() as i64 + 1,
            name: shared::capitalize_name(&category.name),
        };
        categories.push(stored.clone());
        Ok(stored)
    }

    async fn get_quizzes(&self) -> Result<Vec<Quiz>> {
        self.record("get_quizzes")?;
        Ok(self.quizzes.lock().clone())
    }

    async fn create_quiz(&self, quiz: NewQuiz) -> Result<Quiz> {
        self.record("create_quiz")?;
        let mut quizzes = self.quizzes.lock();
        let quiz_id = quizzes.len() as i64 + 1;
        let stored = Quiz {
            id: quiz_id,
            title: quiz.title,
            questions: quiz
                .questions
                .into_iter()
                .enumerate()
                .map(|(i, question)| Question {
                    id: i as i64 + 1,
                    quiz_id,
                    question_text: question.question_text,
                    question_type: question.question_type,
                    answers: question
                        .answers
                        .into_iter()
                        .enumerate()
                        .map(|(j, answer)| Answer {
                            id: j as i64 + 1,
                            answer_text: answer.answer_text,
                            is_correct: answer.is_correct,
                            is_trap: answer.is_trap,
                        })
                        .collect(),
                })
                .collect(),
        };
        quizzes.push(stored.clone());
        Ok(stored)
    }

    async fn get_achievements(&self) -> Result<Vec<Achievement>> {
        self.record("get_achievements")?;
        Ok(self.achievements.clone())
    }

    async fn get_user_achievements(&self, user_id: &str) -> Result<Vec<UserAchievement>> {
        self.record("get_user_achievements")?;
        Ok(self
            .user_achievements
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.record("get_leaderboard")?;
        Ok(self
            .users
            .lock()
            .iter()
            .take(3)
            .enumerate()
            .map(|(i, user)| LeaderboardEntry {
                user: LeaderboardUser {
                    id: user.id.clone(),
                    full_name: user.full_name.clone(),
                    avatar_url: user.avatar_url.clone(),
                },
                score: 1000 - i as u32 * 100,
                rank: i as u32 + 1,
            })
            .collect())
    }
}
