//! Order endpoints

use shared::models::{Order, OrderStatus, OrderStatusUpdate};

use super::ApiClient;
use crate::{ClientError, ClientResult};

impl ApiClient {
    /// All orders for a branch, newest first (as returned by the service).
    pub async fn list_orders(&self, branch_id: &str) -> ClientResult<Vec<Order>> {
        self.http()
            .get(&format!("orders?branch_id={branch_id}"))
            .await
    }

    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> ClientResult<Order> {
        let body = OrderStatusUpdate { status };
        self.http()
            .patch(&format!("orders/{order_id}/status"), &body)
            .await
    }

    /// Advance an order one step along its lifecycle.
    ///
    /// Rejects terminal orders locally; the service enforces the same rule.
    pub async fn advance_order(&self, order: &Order) -> ClientResult<Order> {
        let next = order.status.successor().ok_or_else(|| {
            ClientError::InvalidResponse(format!(
                "order {} is already {}",
                order.order_number, order.status
            ))
        })?;
        tracing::debug!(order = %order.order_number, from = %order.status, to = %next, "Advancing order");
        self.update_order_status(&order.id, next).await
    }
}
