//! Bill Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment method accepted at the counter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Upi,
    Card,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "CARD",
        }
    }

    /// Non-cash payments carry a reference / UTR number.
    pub fn needs_reference(self) -> bool {
        !matches!(self, PaymentMethod::Cash)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bill entity (consolidated unpaid aggregate for one table seating)
///
/// Read-only here apart from the payment mutation; all amounts are computed
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub bill_number: String,
    pub table_id: String,
    /// Subtotal in currency unit
    pub subtotal: f64,
    /// CGST component in currency unit
    pub cgst_amount: f64,
    /// SGST component in currency unit
    pub sgst_amount: f64,
    /// Service charge in currency unit
    #[serde(default)]
    pub service_charge: f64,
    /// Discount in currency unit
    #[serde(default)]
    pub discount: f64,
    /// Total in currency unit
    pub total: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Bill {
    /// Combined GST shown on the bill card.
    pub fn gst_total(&self) -> f64 {
        self.cgst_amount + self.sgst_amount
    }
}

/// Record payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    /// Amount received in currency unit
    pub amount: f64,
    pub upi_reference_id: Option<String>,
}

/// Acknowledgement returned after a payment is recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub ok: bool,
    pub bill_number: String,
    /// Amount recorded in currency unit
    pub amount_paid: f64,
}

/// Daily tax/revenue aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: String,
    pub total_bills: i64,
    pub total_revenue: f64,
    pub total_cgst: f64,
    pub total_sgst: f64,
}

impl DailyReport {
    /// Taxable amount backed out of the aggregate for display.
    pub fn taxable_amount(&self) -> f64 {
        self.total_revenue - self.total_cgst - self.total_sgst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_wire_spelling() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cash).unwrap(), r#""CASH""#);
        assert_eq!(serde_json::to_string(&PaymentMethod::Upi).unwrap(), r#""UPI""#);
        assert_eq!(serde_json::to_string(&PaymentMethod::Card).unwrap(), r#""CARD""#);
    }

    #[test]
    fn test_cash_payment_needs_no_reference() {
        assert!(!PaymentMethod::Cash.needs_reference());
        assert!(PaymentMethod::Upi.needs_reference());
        assert!(PaymentMethod::Card.needs_reference());
    }

    #[test]
    fn test_payment_request_shape() {
        let req = PaymentRequest {
            method: PaymentMethod::Cash,
            amount: 472.50,
            upi_reference_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["method"], "CASH");
        assert_eq!(value["amount"], 472.50);
        assert!(value["upi_reference_id"].is_null());
    }

    #[test]
    fn test_bill_tolerates_missing_optional_charges() {
        // Older service revisions omit service_charge/discount entirely.
        let json = r#"{
            "id": "b1", "bill_number": "BILL-991", "table_id": "t1",
            "subtotal": 400.0, "cgst_amount": 36.0, "sgst_amount": 36.0,
            "total": 472.0, "status": "UNPAID",
            "created_at": "2025-11-02T13:00:00Z"
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.service_charge, 0.0);
        assert_eq!(bill.gst_total(), 72.0);
    }
}
