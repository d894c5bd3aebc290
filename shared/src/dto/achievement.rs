use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon_url: String,
}

/// Earned achievement (`user_achievements`), read-only here
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserAchievement {
    pub user_id: String,
    pub achievement_id: i64,
    pub earned_at: DateTime<Utc>,
}

/// Whether `achievement` appears among the user's earned rows
pub fn is_earned(achievement: &Achievement, earned: &[UserAchievement]) -> bool {
    earned
        .iter()
        .any(|entry| entry.achievement_id == achievement.id)
}
