//! Order board: one column per lifecycle stage

use ratatui::prelude::*;
use ratatui::widgets::*;

use shared::models::OrderStatus;

use crate::app::App;
use crate::board::board_columns;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let columns = board_columns(&app.orders.orders);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20); 5])
        .split(area);

    for (col, status) in OrderStatus::COLUMNS.iter().enumerate() {
        let active_column = app.orders.cursor.column == col;
        let border_style = if active_column {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::DIM)
        };
        let block = Block::default()
            .title(format!(" {} ({}) ", status, columns[col].len()))
            .borders(Borders::ALL)
            .border_style(border_style);

        let items: Vec<ListItem> = columns[col]
            .iter()
            .enumerate()
            .map(|(row, &idx)| {
                let order = &app.orders.orders[idx];
                let selected = active_column && app.orders.cursor.row == row;
                let style = if selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default()
                };
                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("{} · ₹{:.2}", order.order_number, order.total),
                        style.add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!(
                            "{} items · {}",
                            order.items.len(),
                            order.created_at.format("%H:%M")
                        ),
                        style,
                    )),
                ];
                if selected {
                    if let Some(label) = order.status.action_label() {
                        lines.push(Line::from(Span::styled(
                            format!("[Enter] {label}"),
                            Style::default().fg(Color::Green),
                        )));
                    }
                }
                lines.push(Line::from(""));
                ListItem::new(lines)
            })
            .collect();

        f.render_widget(List::new(items).block(block), chunks[col]);
    }
}
