//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status lifecycle
///
/// Status moves strictly forward through the five kitchen stages. CANCELLED
/// is reachable only outside this front end (customer/bot side); the board
/// never offers it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    New,
    Accepted,
    Preparing,
    Ready,
    Served,
    Cancelled,
}

impl OrderStatus {
    /// The five stages shown as board columns, in display order.
    pub const COLUMNS: [OrderStatus; 5] = [
        OrderStatus::New,
        OrderStatus::Accepted,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Served,
    ];

    /// The single legal forward transition, or `None` when terminal.
    pub fn successor(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::New => Some(OrderStatus::Accepted),
            OrderStatus::Accepted => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Served),
            OrderStatus::Served | OrderStatus::Cancelled => None,
        }
    }

    /// No further transition is offered once SERVED or CANCELLED.
    pub fn is_terminal(self) -> bool {
        self.successor().is_none()
    }

    /// Caption for the one transition control, or `None` when terminal.
    pub fn action_label(self) -> Option<&'static str> {
        match self {
            OrderStatus::New => Some("Accept"),
            OrderStatus::Accepted => Some("Start Prep"),
            OrderStatus::Preparing => Some("Mark Ready"),
            OrderStatus::Ready => Some("Mark Served"),
            OrderStatus::Served | OrderStatus::Cancelled => None,
        }
    }

    /// Wire spelling, as sent in status-update requests.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Served => "SERVED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: String,
    /// Menu item reference (String ID)
    pub menu_item_id: String,
    pub quantity: i32,
    pub notes: Option<String>,
}

/// Order entity
///
/// Created externally (customer ordering flow); this front end only reads it
/// and advances its status. Totals are computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub table_id: String,
    pub status: OrderStatus,
    /// Total amount in currency unit
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderLine>,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions() {
        assert_eq!(OrderStatus::New.successor(), Some(OrderStatus::Accepted));
        assert_eq!(
            OrderStatus::Accepted.successor(),
            Some(OrderStatus::Preparing)
        );
        assert_eq!(OrderStatus::Preparing.successor(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.successor(), Some(OrderStatus::Served));
    }

    #[test]
    fn test_terminal_states_offer_nothing() {
        for status in [OrderStatus::Served, OrderStatus::Cancelled] {
            assert!(status.is_terminal());
            assert_eq!(status.successor(), None);
            assert_eq!(status.action_label(), None);
        }
    }

    #[test]
    fn test_exactly_one_control_per_active_state() {
        for status in [
            OrderStatus::New,
            OrderStatus::Accepted,
            OrderStatus::Preparing,
            OrderStatus::Ready,
        ] {
            assert!(!status.is_terminal());
            assert!(status.action_label().is_some());
            assert!(status.successor().is_some());
        }
    }

    #[test]
    fn test_wire_spelling() {
        let update = OrderStatusUpdate {
            status: OrderStatus::Ready,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"status":"READY"}"#);

        let parsed: OrderStatus = serde_json::from_str(r#""PREPARING""#).unwrap();
        assert_eq!(parsed, OrderStatus::Preparing);
    }

    #[test]
    fn test_order_deserializes_from_service_json() {
        let json = r#"{
            "id": "5f6c1d2e-0000-0000-0000-000000000001",
            "order_number": "ORD-1042",
            "table_id": "5f6c1d2e-0000-0000-0000-00000000a001",
            "status": "NEW",
            "total": 418.95,
            "created_at": "2025-11-02T12:30:00Z",
            "items": [
                {"id": "l1", "menu_item_id": "m1", "quantity": 2, "notes": "less spicy"},
                {"id": "l2", "menu_item_id": "m2", "quantity": 1, "notes": null}
            ]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].notes.as_deref(), Some("less spicy"));
    }
}
