//! Authentication DTOs

use serde::{Deserialize, Serialize};

use crate::models::StaffRole;

/// Login form, sent urlencoded (OAuth2 password flow field names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    /// Phone number doubles as the username.
    pub username: String,
    pub password: String,
}

/// Login response, persisted verbatim as the signed-in profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffProfile {
    pub access_token: String,
    pub token_type: String,
    pub role: StaffRole,
    pub name: String,
    /// Absent for roles not pinned to one branch.
    pub branch_id: Option<String>,
}

/// Change password payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_round_trips_the_login_response() {
        let json = r#"{
            "access_token": "eyJhbGciOiJIUzI1NiJ9.e30.x",
            "token_type": "bearer",
            "role": "CASHIER",
            "name": "Asha",
            "branch_id": "b-1"
        }"#;
        let profile: StaffProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, StaffRole::Cashier);
        assert_eq!(profile.branch_id.as_deref(), Some("b-1"));

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["token_type"], "bearer");
        assert_eq!(value["role"], "CASHIER");
    }
}
