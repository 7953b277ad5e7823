//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub branch_id: String,
    pub table_number: i32,
    pub is_active: bool,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub branch_id: String,
    pub table_number: i32,
}

/// QR generation result
///
/// `wa_link` is a deep link into the messaging app with the table token
/// pre-filled; the screen renders it for printing as a scannable code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableQr {
    pub table_number: i32,
    pub wa_link: String,
    #[serde(default)]
    pub token: Option<String>,
}
