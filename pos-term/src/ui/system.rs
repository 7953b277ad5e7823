//! Provider dashboard: restaurant tenants

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::ui::render_form;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .system
        .restaurants
        .iter()
        .enumerate()
        .map(|(i, restaurant)| {
            let style = if i == app.system.selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            let state = if restaurant.is_active {
                Span::styled("active", Style::default().fg(Color::Green))
            } else {
                Span::styled("suspended", Style::default().fg(Color::Red))
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} · ", restaurant.name),
                        style.add_modifier(Modifier::BOLD),
                    ),
                    state,
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} · max {} branches",
                        restaurant.whatsapp_display_number, restaurant.max_branches
                    ),
                    style,
                )),
                Line::from(""),
            ])
        })
        .collect();

    let title = format!(
        " Restaurants ({}) · n: onboard | Space: toggle active | p: reset owner password ",
        app.system.restaurants.len()
    );
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);

    if let Some(form) = &app.system.form {
        render_form(f, form, area);
    }
}
