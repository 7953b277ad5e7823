//! Billing screen: open bills per table plus the pay dialog

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.billing.rows();
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, (table, bill))| {
            let style = if i == app.billing.selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!(
                        "Table {} · {} · ₹{:.2}",
                        table.table_number, bill.bill_number, bill.total
                    ),
                    style.add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "  subtotal ₹{:.2} · GST ₹{:.2} ({:.2} CGST + {:.2} SGST)",
                        bill.subtotal,
                        bill.gst_total(),
                        bill.cgst_amount,
                        bill.sgst_amount
                    ),
                    style,
                )),
                Line::from(""),
            ])
        })
        .collect();

    let title = format!(" Open Bills ({}) · Enter: record payment ", rows.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);

    if let Some(pay) = &app.billing.pay {
        draw_pay_dialog(f, pay, area);
    }
}

fn draw_pay_dialog(f: &mut Frame, pay: &crate::app::PayForm, area: Rect) {
    let width = 46.min(area.width);
    let height = 7.min(area.height);
    let modal = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    f.render_widget(Clear, modal);

    let field_style = |focused: bool| {
        if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Method:    ", field_style(pay.focus == 0)),
            Span::styled(
                format!("< {} >", pay.method),
                field_style(pay.focus == 0).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Amount:    ", field_style(pay.focus == 1)),
            Span::styled(pay.amount.value(), field_style(pay.focus == 1)),
        ]),
        Line::from(vec![
            Span::styled("Reference: ", field_style(pay.focus == 2)),
            Span::styled(pay.reference.value(), field_style(pay.focus == 2)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: pay | Esc: cancel | ←/→: method",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Record Payment ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(widget, modal);
}
