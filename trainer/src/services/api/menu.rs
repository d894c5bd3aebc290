//! # Menu Endpoints
//!
//! Menu items and categories. Names are normalised before insert.

use shared::{capitalize_name, MenuItem, MenuItemCategory, NewCategory, NewMenuItem};

use super::client::SupabaseClient;
use crate::core::error::Result;

/// Active menu items.
pub async fn get_menu_items(client: &SupabaseClient) -> Result<Vec<MenuItem>> {
    let start = std::time::Instant::now();
    let items: Vec<MenuItem> = client
        .fetch_rows("menu_items?select=*&is_active=eq.true")
        .await?;
    tracing::debug!(
        count = items.len(),
        duration_ms = start.elapsed().as_millis(),
        "Fetched menu items"
    );
    Ok(items)
}

/// Single menu item, `None` when the id does not exist.
pub async fn get_menu_item(client: &SupabaseClient, id: i64) -> Result<Option<MenuItem>> {
    let items: Vec<MenuItem> = client
        .fetch_rows(&format!("menu_items?select=*&id=eq.{}&limit=1", id))
        .await?;
    Ok(items.into_iter().next())
}

#[tracing::instrument(skip(client, item), fields(name = %item.name, category_id = item.category_id))]
pub async fn add_menu_item(client: &SupabaseClient, item: NewMenuItem) -> Result<MenuItem> {
    let item = NewMenuItem {
        name: capitalize_name(&item.name),
        ..item
    };
    let stored: MenuItem = client.insert_row("menu_items", &item).await?;
    tracing::info!(id = stored.id, "Menu item added");
    Ok(stored)
}

pub async fn get_categories(client: &SupabaseClient) -> Result<Vec<MenuItemCategory>> {
    client.fetch_rows("menu_categories?select=*").await
}

#[tracing::instrument(skip(client, category), fields(name = %category.name))]
pub async fn add_category(
    client: &SupabaseClient,
    category: NewCategory,
) -> Result<MenuItemCategory> {
    let category = NewCategory {
        name: capitalize_name(&category.name),
    };
    let stored: MenuItemCategory = client.insert_row("menu_categories", &category).await?;
    tracing::info!(id = stored.id, "Category added");
    Ok(stored)
}
