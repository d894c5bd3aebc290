//! # Profile Tasks

use async_channel::Sender;
use tokio::spawn;
use tracing::error;

use super::Gateway;
use crate::app::events::{AppEvent, ProfileData};
use crate::app::state::View;

/// Fetch achievements, the user's earned achievements and the leaderboard concurrently
pub(crate) fn load_profile(gateway: Gateway, event_tx: Sender<AppEvent>, user_id: String) {
    spawn(async move {
        let (achievements, earned, leaderboard) = tokio::join!(
            gateway.get_achievements(),
            gateway.get_user_achievements(&user_id),
            gateway.get_leaderboard(),
        );

        let data = ProfileData {
            achievements: achievements.unwrap_or_else(|e| {
                error!(error = %e, "Failed to load achievements");
                Vec::new()
            }),
            earned: earned.unwrap_or_else(|e| {
                error!(user_id = %user_id, error = %e, "Failed to load earned achievements");
                Vec::new()
            }),
            leaderboard: leaderboard.unwrap_or_else(|e| {
                error!(error = %e, "Failed to load leaderboard");
                Vec::new()
            }),
        };

        let _ = event_tx
            .send(AppEvent::ProfileLoaded { view: View::Profile, data })
            .await;
    });
}
