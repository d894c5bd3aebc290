//! # Session Tasks
//!
//! Resolve the host user to a staff record.

use async_channel::Sender;
use tokio::spawn;
use tracing::{error, info};

use super::Gateway;
use crate::app::events::AppEvent;

/// Look up the user behind a host identity
///
/// Internal task function - spawns async task and reports via [`AppEvent::SessionResolved`].
pub(crate) fn resolve_user(gateway: Gateway, event_tx: Sender<AppEvent>, telegram_id: i64) {
    spawn(async move {
        let start = std::time::Instant::now();
        let result = gateway.get_current_user(telegram_id).await;

        match &result {
            Ok(Some(user)) => info!(
                telegram_id,
                user_id = %user.id,
                duration_ms = start.elapsed().as_millis(),
                "Host user resolved"
            ),
            Ok(None) => info!(telegram_id, "No staff record for host user"),
            Err(e) => error!(telegram_id, error = %e, "Identity lookup failed"),
        }

        let _ = event_tx
            .send(AppEvent::SessionResolved { telegram_id, result })
            .await;
    });
}
