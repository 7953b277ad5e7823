//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub branch_id: String,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategoryCreate {
    pub branch_id: String,
    pub name: String,
    pub sort_order: i32,
}

/// Menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub branch_id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Price in currency unit
    pub base_price: f64,
    pub gst_percent: i32,
    pub is_veg: bool,
    pub is_available: bool,
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub branch_id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Price in currency unit
    pub base_price: f64,
    pub gst_percent: i32,
    pub is_veg: bool,
}

/// Update item payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_percent: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_veg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl MenuItemUpdate {
    /// Availability toggle, the one partial update the menu screen issues.
    pub fn availability(available: bool) -> Self {
        Self {
            is_available: Some(available),
            ..Self::default()
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_serializes_only_set_fields() {
        let update = MenuItemUpdate::availability(false);
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"is_available":false}"#);
    }
}
