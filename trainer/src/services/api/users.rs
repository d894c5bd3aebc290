//! # User Endpoints
//!
//! Identity resolution, the staff list and role assignment.

use shared::{SetUserRolesRequest, User, UserRole, UserRow};

use super::client::SupabaseClient;
use crate::core::error::Result;

const USER_SELECT: &str = "id,telegram_id,full_name,user_roles(roles(name))";

fn into_user(row: UserRow) -> User {
    let unknown = row.unknown_roles();
    if !unknown.is_empty() {
        tracing::warn!(user_id = %row.id, roles = ?unknown, "Skipping unknown role tags");
    }
    User::from(row)
}

/// Resolve a Telegram id to a user record.
#[tracing::instrument(skip(client))]
pub async fn get_current_user(client: &SupabaseClient, telegram_id: i64) -> Result<Option<User>> {
    tracing::info!("Resolving launch identity");
    let start = std::time::Instant::now();

    let rows: Vec<UserRow> = client
        .fetch_rows(&format!(
            "users?select={}&telegram_id=eq.{}&limit=1",
            USER_SELECT, telegram_id
        ))
        .await?;

    let user = rows.into_iter().next().map(into_user);
    tracing::info!(
        found = user.is_some(),
        duration_ms = start.elapsed().as_millis(),
        "Identity resolved"
    );
    Ok(user)
}

/// Every user with their roles.
pub async fn get_all_users(client: &SupabaseClient) -> Result<Vec<User>> {
    let rows: Vec<UserRow> = client
        .fetch_rows(&format!("users?select={}&order=full_name.asc", USER_SELECT))
        .await?;
    Ok(rows.into_iter().map(into_user).collect())
}

/// Replace a user's role set through the `set_user_roles` function.
#[tracing::instrument(skip(client, roles), fields(roles = ?roles))]
pub async fn update_user_roles(
    client: &SupabaseClient,
    user_id: &str,
    roles: &[UserRole],
) -> Result<()> {
    let request = SetUserRolesRequest {
        p_user_id: user_id.to_string(),
        p_roles: roles.to_vec(),
    };
    client.rpc("set_user_roles", &request).await?;
    tracing::info!("User roles updated");
    Ok(())
}
