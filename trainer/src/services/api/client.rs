//! # API Client
//!
//! HTTP client for the data service's PostgREST surface.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ErrorResponse;

use crate::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::DataGateway;

/// HTTP client for the hosted data service.
///
/// Every request carries the anon key both as `apikey` and as bearer token.
/// The connection pool is shared by all clones of the inner `reqwest::Client`.
pub struct SupabaseClient {
    pub(crate) client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// Create a client from configuration.
    ///
    /// The request timeout comes from `TRAINER_REQUEST_TIMEOUT_SECS`.
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    /// Base URL for REST requests
    pub(crate) fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// GET `path` and decode the row array
    pub(crate) async fn fetch_rows<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let response = self
            .authorize(self.client.get(self.rest_url(path)))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, path, "Network error");
                AppError::from(e)
            })?;

        read_json(response).await
    }

    /// POST one row into `table` and return the stored representation
    pub(crate) async fn insert_row<B, T>(&self, table: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.client.post(self.rest_url(table)))
            .header("Prefer", "return=representation")
            .header("Accept", "application/vnd.pgrst.object+json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, table, "Network error");
                AppError::from(e)
            })?;

        read_json(response).await
    }

    /// POST several rows into `table` in one request
    pub(crate) async fn insert_rows<B, T>(&self, table: &str, rows: &[B]) -> Result<Vec<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .authorize(self.client.post(self.rest_url(table)))
            .header("Prefer", "return=representation")
            .json(rows)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, table, "Network error");
                AppError::from(e)
            })?;

        read_json(response).await
    }

    /// Call a database function, discarding its result
    pub(crate) async fn rpc<B: Serialize>(&self, function: &str, body: &B) -> Result<()> {
        let response = self
            .authorize(self.client.post(self.rest_url(&format!("rpc/{}", function))))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, function, "Network error");
                AppError::from(e)
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(read_error(response).await)
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if response.status().is_success() {
        response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, "Response parse error");
            AppError::Api(format!("Failed to parse response: {}", e))
        })
    } else {
        Err(read_error(response).await)
    }
}

async fn read_error(response: Response) -> AppError {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(error) if !error.message.is_empty() => {
            tracing::warn!(status = status.as_u16(), error = %error, "Request rejected");
            error.into()
        }
        _ => {
            tracing::warn!(status = status.as_u16(), "Request rejected without error body");
            AppError::Api(format!("Request failed with status {}", status))
        }
    }
}

#[async_trait::async_trait]
impl DataGateway for SupabaseClient {
    async fn get_current_user(&self, telegram_id: i64) -> Result<Option<shared::User>> {
        super::users::get_current_user(self, telegram_id).await
    }

    async fn get_all_users(&self) -> Result<Vec<shared::User>> {
        super::users::get_all_users(self).await
    }

    async fn update_user_roles(&self, user_id: &str, roles: &[shared::UserRole]) -> Result<()> {
        super::users::update_user_roles(self, user_id, roles).await
    }

    async fn get_menu_items(&self) -> Result<Vec<shared::MenuItem>> {
        super::menu::get_menu_items(self).await
    }

    async fn get_menu_item(&self, id: i64) -> Result<Option<shared::MenuItem>> {
        super::menu::get_menu_item(self, id).await
    }

    async fn add_menu_item(&self, item: shared::NewMenuItem) -> Result<shared::MenuItem> {
        super::menu::add_menu_item(self, item).await
    }

    async fn get_categories(&self) -> Result<Vec<shared::MenuItemCategory>> {
        super::menu::get_categories(self).await
    }

    async fn add_category(&self, category: shared::NewCategory) -> Result<shared::MenuItemCategory> {
        super::menu::add_category(self, category).await
    }

    async fn get_quizzes(&self) -> Result<Vec<shared::Quiz>> {
        super::quizzes::get_quizzes(self).await
    }

    async fn create_quiz(&self, quiz: shared::NewQuiz) -> Result<shared::Quiz> {
        super::quizzes::create_quiz(self, quiz).await
    }

    async fn get_achievements(&self) -> Result<Vec<shared::Achievement>> {
        super::profile::get_achievements(self).await
    }

    async fn get_user_achievements(&self, user_id: &str) -> Result<Vec<shared::UserAchievement>> {
        super::profile::get_user_achievements(self, user_id).await
    }

    async fn get_leaderboard(&self) -> Result<Vec<shared::LeaderboardEntry>> {
        super::profile::get_leaderboard(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_rest_url() {
        let config = AppConfig {
            supabase_url: "https://demo.supabase.co".into(),
            supabase_anon_key: "anon".into(),
            request_timeout: Duration::from_secs(5),
            launch_data: None,
            start_view: "home".into(),
        };
        let client = SupabaseClient::new(&config);
        assert_eq!(
            client.rest_url("menu_items?select=*"),
            "https://demo.supabase.co/rest/v1/menu_items?select=*"
        );
    }
}
