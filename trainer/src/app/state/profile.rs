use chrono::{DateTime, Utc};
use shared::{Achievement, LeaderboardEntry, UserAchievement};

#[derive(Debug, Clone)]
pub struct ProfileState {
    pub achievements: Vec<Achievement>,
    pub earned: Vec<UserAchievement>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub loading: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            achievements: Vec::new(),
            earned: Vec::new(),
            leaderboard: Vec::new(),
            loading: true,
        }
    }
}

impl ProfileState {
    pub fn is_earned(&self, achievement: &Achievement) -> bool {
        shared::is_earned(achievement, &self.earned)
    }

    pub fn earned_count(&self) -> usize {
        self.achievements.iter().filter(|a| self.is_earned(a)).count()
    }

    /// When `achievement` was first earned
    pub fn earned_at(&self, achievement: &Achievement) -> Option<DateTime<Utc>> {
        self.earned
            .iter()
            .filter(|earned| earned.achievement_id == achievement.id)
            .map(|earned| earned.earned_at)
            .min()
    }

    /// Earned date as shown on the profile, e.g. `12.03.2025`
    pub fn earned_label(&self, achievement: &Achievement) -> Option<String> {
        self.earned_at(achievement)
            .map(|at| format!("Earned {}", at.format("%d.%m.%Y")))
    }
}
