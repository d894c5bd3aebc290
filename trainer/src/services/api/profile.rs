//! # Profile Endpoints
//!
//! Achievements and the leaderboard.

use shared::{avatar_url, Achievement, LeaderboardEntry, LeaderboardUser, UserAchievement, UserSummaryRow};

use super::client::SupabaseClient;
use crate::core::error::Result;

/// Generated leaderboard scores, highest first
const LEADERBOARD_SCORES: [u32; 3] = [1250, 1100, 980];

/// Names used when fewer than three users exist
const PLACEHOLDER_NAMES: [&str; 3] = ["Ivan Petrov", "Maria Sidorova", "Alexey Ivanov"];

pub async fn get_achievements(client: &SupabaseClient) -> Result<Vec<Achievement>> {
    client.fetch_rows("achievements?select=*").await
}

pub async fn get_user_achievements(
    client: &SupabaseClient,
    user_id: &str,
) -> Result<Vec<UserAchievement>> {
    client
        .fetch_rows(&format!(
            "user_achievements?select=*&user_id=eq.{}",
            urlencoding::encode(user_id)
        ))
        .await
}

/// Top three users with generated scores.
pub async fn get_leaderboard(client: &SupabaseClient) -> Result<Vec<LeaderboardEntry>> {
    let users: Vec<UserSummaryRow> = client.fetch_rows("users?select=id,full_name&limit=3").await?;
    Ok(leaderboard_from(&users))
}

pub(crate) fn leaderboard_from(users: &[UserSummaryRow]) -> Vec<LeaderboardEntry> {
    LEADERBOARD_SCORES
        .iter()
        .enumerate()
        .map(|(i, score)| {
            let (id, full_name) = match users.get(i) {
                Some(user) => (user.id.clone(), user.full_name.clone()),
                None => ((i + 1).to_string(), PLACEHOLDER_NAMES[i].to_string()),
            };
            LeaderboardEntry {
                user: LeaderboardUser {
                    avatar_url: avatar_url(&id),
                    id,
                    full_name,
                },
                score: *score,
                rank: i as u32 + 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_fills_placeholders() {
        let users = vec![UserSummaryRow {
            id: "u-9".into(),
            full_name: "Olga Smirnova".into(),
        }];
        let board = leaderboard_from(&users);

        assert_eq!(board.len(), 3);
        assert_eq!(board[0].user.full_name, "Olga Smirnova");
        assert_eq!(board[0].score, 1250);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].user.full_name, "Maria Sidorova");
        assert_eq!(board[2].score, 980);
        assert_eq!(board[2].rank, 3);
    }
}
