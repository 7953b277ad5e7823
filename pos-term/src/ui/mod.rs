//! Screen rendering

mod billing;
mod login;
mod manage;
mod orders;
mod system;

use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use shared::Destination;

use crate::app::{App, Screen};
use crate::form::Form;

pub fn draw(f: &mut Frame, app: &App) {
    if app.screen == Screen::Login {
        login::draw(f, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header + nav
            Constraint::Min(5),    // screen body
            Constraint::Length(6), // logs
            Constraint::Length(1), // footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    if let Screen::Destination(dest) = app.screen {
        match dest {
            Destination::Orders => orders::draw(f, app, chunks[1]),
            Destination::Billing => billing::draw(f, app, chunks[1]),
            Destination::Menu => manage::draw_menu(f, app, chunks[1]),
            Destination::Tables => manage::draw_tables(f, app, chunks[1]),
            Destination::Staff => manage::draw_staff(f, app, chunks[1]),
            Destination::Report => manage::draw_report(f, app, chunks[1]),
            Destination::Branches => manage::draw_branches(f, app, chunks[1]),
            Destination::System => system::draw(f, app, chunks[1]),
        }
    }

    draw_logs(f, app, chunks[2]);
    draw_footer(f, app, chunks[3]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " POS ",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    for dest in &app.nav {
        let active = app.screen == Screen::Destination(*dest);
        let style = if active {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", dest.title()), style));
        spans.push(Span::raw(" "));
    }
    if let Some(profile) = &app.profile {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("{} ({})", profile.name, profile.role),
            Style::default().fg(Color::Green),
        ));
    }
    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM)),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let text = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "Tab: next screen | r: refresh | l: logout | q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(text), area);
}

/// Centered modal listing the form's fields, focused field highlighted.
pub(crate) fn render_form(f: &mut Frame, form: &Form, area: Rect) {
    let height = (form.fields.len() as u16 + 2).min(area.height);
    let width = 50.min(area.width);
    let modal = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    f.render_widget(Clear, modal);

    let lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let style = if i == form.focus {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            let shown = if field.mask {
                "*".repeat(field.input.value().len())
            } else {
                field.input.value().to_string()
            };
            Line::from(vec![
                Span::styled(format!("{:<26}", field.label), style),
                Span::styled(shown, style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} (Enter: save, Esc: cancel) ", form.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(widget, modal);
}
