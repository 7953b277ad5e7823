//! Restaurant Model (provider dashboard)

use serde::{Deserialize, Serialize};

/// Restaurant tenant, managed from the provider dashboard only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub whatsapp_phone_number_id: String,
    pub whatsapp_display_number: String,
    pub max_branches: i32,
    pub is_active: bool,
}

/// Onboard restaurant payload
///
/// Creates the tenant together with its first SUPER_ADMIN account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub whatsapp_phone_number_id: String,
    pub whatsapp_display_number: String,
    pub max_branches: i32,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_password: String,
}

/// Update restaurant payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_display_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_branches: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Reset owner password payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetOwnerPassword {
    pub new_password: String,
}
