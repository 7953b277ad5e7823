//! Admin endpoints: tables, staff, branches and the provider dashboard

use shared::models::{
    Branch, BranchCreate, DiningTable, ResetOwnerPassword, Restaurant, RestaurantCreate,
    RestaurantUpdate, Staff, StaffCreate, TableCreate, TableQr,
};

use super::ApiClient;
use crate::ClientResult;

impl ApiClient {
    // ---- tables ----

    pub async fn list_tables(&self, branch_id: &str) -> ClientResult<Vec<DiningTable>> {
        self.http()
            .get(&format!("admin/tables?branch_id={branch_id}"))
            .await
    }

    pub async fn create_table(&self, payload: &TableCreate) -> ClientResult<DiningTable> {
        self.http().post("admin/tables", payload).await
    }

    /// Mint a fresh QR token for a table, revoking earlier ones server-side.
    pub async fn generate_table_qr(&self, table_id: &str) -> ClientResult<TableQr> {
        let empty = serde_json::json!({});
        self.http()
            .post(&format!("admin/tables/{table_id}/qr"), &empty)
            .await
    }

    // ---- staff ----

    pub async fn list_staff(&self, restaurant_id: &str) -> ClientResult<Vec<Staff>> {
        self.http()
            .get(&format!("admin/staff?restaurant_id={restaurant_id}"))
            .await
    }

    pub async fn create_staff(&self, payload: &StaffCreate) -> ClientResult<Staff> {
        self.http().post("admin/staff", payload).await
    }

    pub async fn deactivate_staff(&self, staff_id: &str) -> ClientResult<()> {
        let empty = serde_json::json!({});
        let _: serde_json::Value = self
            .http()
            .patch(&format!("admin/staff/{staff_id}/deactivate"), &empty)
            .await?;
        Ok(())
    }

    // ---- branches ----

    pub async fn list_branches(&self, restaurant_id: &str) -> ClientResult<Vec<Branch>> {
        self.http()
            .get(&format!("admin/branches?restaurant_id={restaurant_id}"))
            .await
    }

    pub async fn create_branch(&self, payload: &BranchCreate) -> ClientResult<Branch> {
        self.http().post("admin/branches", payload).await
    }

    // ---- provider dashboard ----

    pub async fn list_restaurants(&self) -> ClientResult<Vec<Restaurant>> {
        self.http().get("admin/restaurants").await
    }

    pub async fn create_restaurant(&self, payload: &RestaurantCreate) -> ClientResult<Restaurant> {
        self.http().post("admin/restaurants", payload).await
    }

    pub async fn update_restaurant(
        &self,
        restaurant_id: &str,
        payload: &RestaurantUpdate,
    ) -> ClientResult<Restaurant> {
        self.http()
            .patch(&format!("admin/restaurants/{restaurant_id}"), payload)
            .await
    }

    pub async fn reset_owner_password(
        &self,
        restaurant_id: &str,
        new_password: &str,
    ) -> ClientResult<()> {
        let req = ResetOwnerPassword {
            new_password: new_password.to_string(),
        };
        let _: serde_json::Value = self
            .http()
            .post(
                &format!("admin/restaurants/{restaurant_id}/reset-owner-password"),
                &req,
            )
            .await?;
        Ok(())
    }
}
