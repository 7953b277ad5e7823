//! Order board layout
//!
//! Pure helpers that partition a flat order list into the five lifecycle
//! columns and track the cursor across them.

use shared::models::{Order, OrderStatus};

/// Indices into the order slice, one bucket per board column.
///
/// Cancelled orders are dropped entirely; they have no column.
pub fn board_columns(orders: &[Order]) -> [Vec<usize>; 5] {
    let mut columns: [Vec<usize>; 5] = Default::default();
    for (idx, order) in orders.iter().enumerate() {
        if let Some(col) = column_of(order.status) {
            columns[col].push(idx);
        }
    }
    columns
}

fn column_of(status: OrderStatus) -> Option<usize> {
    OrderStatus::COLUMNS.iter().position(|&s| s == status)
}

/// Cursor over the board, by column and row.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardCursor {
    pub column: usize,
    pub row: usize,
}

impl BoardCursor {
    pub fn left(&mut self) {
        if self.column > 0 {
            self.column -= 1;
        }
    }

    pub fn right(&mut self) {
        if self.column + 1 < OrderStatus::COLUMNS.len() {
            self.column += 1;
        }
    }

    pub fn up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
        }
    }

    pub fn down(&mut self, columns: &[Vec<usize>; 5]) {
        if self.row + 1 < columns[self.column].len() {
            self.row += 1;
        }
    }

    /// Keep the cursor on an existing card after a refetch shuffles the board.
    pub fn clamp(&mut self, columns: &[Vec<usize>; 5]) {
        let len = columns[self.column].len();
        if len == 0 {
            self.row = 0;
        } else if self.row >= len {
            self.row = len - 1;
        }
    }

    /// Index of the order under the cursor, if any.
    pub fn selected(&self, columns: &[Vec<usize>; 5]) -> Option<usize> {
        columns[self.column].get(self.row).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            order_number: format!("ORD-{id}"),
            table_id: "t-1".to_string(),
            status,
            total: 100.0,
            created_at: Utc::now(),
            items: vec![],
        }
    }

    #[test]
    fn test_orders_land_in_their_column() {
        let orders = vec![
            order("1", OrderStatus::New),
            order("2", OrderStatus::Ready),
            order("3", OrderStatus::New),
            order("4", OrderStatus::Served),
        ];
        let columns = board_columns(&orders);
        assert_eq!(columns[0], vec![0, 2]);
        assert_eq!(columns[1], Vec::<usize>::new());
        assert_eq!(columns[3], vec![1]);
        assert_eq!(columns[4], vec![3]);
    }

    #[test]
    fn test_cancelled_orders_have_no_column() {
        let orders = vec![order("1", OrderStatus::Cancelled)];
        let columns = board_columns(&orders);
        assert!(columns.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_cursor_clamps_after_refetch() {
        let orders = vec![
            order("1", OrderStatus::New),
            order("2", OrderStatus::New),
            order("3", OrderStatus::New),
        ];
        let columns = board_columns(&orders);
        let mut cursor = BoardCursor::default();
        cursor.down(&columns);
        cursor.down(&columns);
        assert_eq!(cursor.selected(&columns), Some(2));

        // Two orders advanced away; the cursor follows the shorter column.
        let orders = vec![order("1", OrderStatus::New)];
        let columns = board_columns(&orders);
        cursor.clamp(&columns);
        assert_eq!(cursor.selected(&columns), Some(0));
    }

    #[test]
    fn test_cursor_stays_on_board_edges() {
        let columns = board_columns(&[]);
        let mut cursor = BoardCursor::default();
        cursor.left();
        assert_eq!(cursor.column, 0);
        for _ in 0..10 {
            cursor.right();
        }
        assert_eq!(cursor.column, 4);
        assert_eq!(cursor.selected(&columns), None);
    }
}
