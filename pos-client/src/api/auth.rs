//! Authentication endpoints

use shared::models::Staff;
use shared::{ChangePasswordRequest, LoginForm, StaffProfile};

use super::ApiClient;
use crate::ClientResult;

impl ApiClient {
    /// Sign in with phone + password. On success the returned token is
    /// installed on the client for subsequent calls.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<StaffProfile> {
        let form = LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        };
        let profile: StaffProfile = self.http().post_form("auth/login", &form).await?;
        self.set_token(Some(profile.access_token.clone()));
        tracing::info!(name = %profile.name, role = %profile.role, "Logged in");
        Ok(profile)
    }

    /// Current staff record for the installed token.
    pub async fn me(&self) -> ClientResult<Staff> {
        self.http().get("auth/me").await
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> ClientResult<()> {
        let req = ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        let _: serde_json::Value = self.http().post("auth/change-password", &req).await?;
        Ok(())
    }
}
