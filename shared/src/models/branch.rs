//! Branch Model

use serde::{Deserialize, Serialize};

/// Branch entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    /// GST registration number, when the branch is registered.
    pub gstin: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Create branch payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchCreate {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub gstin: Option<String>,
}

fn default_true() -> bool {
    true
}
