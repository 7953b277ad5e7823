//! Menu endpoints

use shared::models::{
    MenuCategory, MenuCategoryCreate, MenuItem, MenuItemCreate, MenuItemUpdate,
};

use super::ApiClient;
use crate::ClientResult;

impl ApiClient {
    pub async fn list_categories(&self, branch_id: &str) -> ClientResult<Vec<MenuCategory>> {
        self.http()
            .get(&format!("menu/categories?branch_id={branch_id}"))
            .await
    }

    pub async fn create_category(&self, payload: &MenuCategoryCreate) -> ClientResult<MenuCategory> {
        self.http().post("menu/categories", payload).await
    }

    pub async fn list_items(
        &self,
        branch_id: &str,
        category_id: Option<&str>,
    ) -> ClientResult<Vec<MenuItem>> {
        let path = match category_id {
            Some(cat) => format!("menu/items?branch_id={branch_id}&category_id={cat}"),
            None => format!("menu/items?branch_id={branch_id}"),
        };
        self.http().get(&path).await
    }

    pub async fn create_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        self.http().post("menu/items", payload).await
    }

    pub async fn update_item(
        &self,
        item_id: &str,
        payload: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        self.http()
            .patch(&format!("menu/items/{item_id}"), payload)
            .await
    }

    /// Flip availability without touching anything else.
    pub async fn set_item_availability(
        &self,
        item_id: &str,
        available: bool,
    ) -> ClientResult<MenuItem> {
        self.update_item(item_id, &MenuItemUpdate::availability(available))
            .await
    }
}
