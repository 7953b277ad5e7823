//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff role
///
/// KITCHEN through SUPER_ADMIN belong to a tenant; SYSTEM_ADMIN is the
/// platform operator and only ever sees the provider dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    Kitchen,
    Cashier,
    BranchAdmin,
    SuperAdmin,
    SystemAdmin,
}

impl StaffRole {
    /// Roles assignable from the staff screen (the operator role is not).
    pub const ASSIGNABLE: [StaffRole; 4] = [
        StaffRole::Kitchen,
        StaffRole::Cashier,
        StaffRole::BranchAdmin,
        StaffRole::SuperAdmin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StaffRole::Kitchen => "KITCHEN",
            StaffRole::Cashier => "CASHIER",
            StaffRole::BranchAdmin => "BRANCH_ADMIN",
            StaffRole::SuperAdmin => "SUPER_ADMIN",
            StaffRole::SystemAdmin => "SYSTEM_ADMIN",
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staff entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub role: StaffRole,
    pub branch_id: Option<String>,
    pub is_active: bool,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub restaurant_id: String,
    pub branch_id: Option<String>,
    pub role: StaffRole,
    pub name: String,
    pub phone: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&StaffRole::BranchAdmin).unwrap(),
            r#""BRANCH_ADMIN""#
        );
        let parsed: StaffRole = serde_json::from_str(r#""SYSTEM_ADMIN""#).unwrap();
        assert_eq!(parsed, StaffRole::SystemAdmin);
    }
}
