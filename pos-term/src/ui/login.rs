//! Login screen

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let width = 44.min(area.width);
    let height = 9.min(area.height);
    let modal = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let phone_style = if app.login.focus_password {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let password_style = if app.login.focus_password {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let masked = "*".repeat(app.login.password.value().len());
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Phone:    ", phone_style),
            Span::styled(app.login.phone.value(), phone_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Password: ", password_style),
            Span::styled(masked, password_style),
        ]),
        Line::from(""),
    ];
    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter: sign in | Tab: switch | Esc: quit",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Staff Sign In ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(widget, modal);
}
