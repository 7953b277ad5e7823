//! Branch management screens: menu, tables, staff, report, branches

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::ui::render_form;

fn selected_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn bordered(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn draw_menu(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .menu
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = selected_style(i == app.menu.selected);
            let category = app
                .menu
                .categories
                .iter()
                .find(|c| c.id == item.category_id)
                .map(|c| c.name.as_str())
                .unwrap_or("?");
            let marker = if item.is_available { "●" } else { "○" };
            let veg = if item.is_veg { "veg" } else { "non-veg" };
            ListItem::new(Line::from(Span::styled(
                format!(
                    "{marker} {} · ₹{:.2} · {} · {} · GST {}%",
                    item.name, item.base_price, category, veg, item.gst_percent
                ),
                style,
            )))
        })
        .collect();

    let title = format!(
        " Menu ({} items) · Space: toggle availability | n: new item | c: new category ",
        app.menu.items.len()
    );
    f.render_widget(List::new(items).block(bordered(title)), area);

    if let Some(form) = &app.menu.form {
        render_form(f, form, area);
    }
}

pub fn draw_tables(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let items: Vec<ListItem> = app
        .tables
        .tables
        .iter()
        .enumerate()
        .map(|(i, table)| {
            let style = selected_style(i == app.tables.selected);
            ListItem::new(Line::from(Span::styled(
                format!("Table {}", table.table_number),
                style,
            )))
        })
        .collect();
    let title = format!(
        " Tables ({}) · n: new | g: mint QR ",
        app.tables.tables.len()
    );
    f.render_widget(List::new(items).block(bordered(title)), chunks[0]);

    let qr_lines = match &app.tables.last_qr {
        Some(qr) => vec![
            Line::from(format!("Table {}", qr.table_number)),
            Line::from(""),
            Line::from(Span::styled(
                qr.wa_link.clone(),
                Style::default().fg(Color::Green),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Mint a QR to see its link here",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let qr = Paragraph::new(qr_lines)
        .wrap(Wrap { trim: true })
        .block(bordered(" QR ".to_string()));
    f.render_widget(qr, chunks[1]);

    if let Some(form) = &app.tables.form {
        render_form(f, form, area);
    }
}

pub fn draw_staff(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .staff
        .staff
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let style = selected_style(i == app.staff.selected);
            let state = if member.is_active { "" } else { " · INACTIVE" };
            ListItem::new(Line::from(Span::styled(
                format!("{} · {} · {}{state}", member.name, member.phone, member.role),
                style,
            )))
        })
        .collect();
    let title = format!(
        " Staff ({}) · n: new | d: deactivate ",
        app.staff.staff.len()
    );
    f.render_widget(List::new(items).block(bordered(title)), area);

    if let Some(form) = &app.staff.form {
        render_form(f, form, area);
    }
}

pub fn draw_report(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Date: "),
            Span::styled(
                app.report.date.value(),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("  (Enter: run)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];
    match &app.report.report {
        Some(report) => {
            lines.push(Line::from(format!("Bills:    {}", report.total_bills)));
            lines.push(Line::from(format!("Revenue:  ₹{:.2}", report.total_revenue)));
            lines.push(Line::from(format!(
                "Taxable:  ₹{:.2}",
                report.taxable_amount()
            )));
            lines.push(Line::from(format!("CGST:     ₹{:.2}", report.total_cgst)));
            lines.push(Line::from(format!("SGST:     ₹{:.2}", report.total_sgst)));
        }
        None => lines.push(Line::from(Span::styled(
            "No report yet",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    f.render_widget(
        Paragraph::new(lines).block(bordered(" Daily Report ".to_string())),
        area,
    );
}

pub fn draw_branches(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .branches
        .branches
        .iter()
        .enumerate()
        .map(|(i, branch)| {
            let style = selected_style(i == app.branches.selected);
            let current = if app.branch_id.as_deref() == Some(branch.id.as_str()) {
                " · ACTIVE"
            } else {
                ""
            };
            ListItem::new(Line::from(Span::styled(
                format!("{} · {}, {}{current}", branch.name, branch.city, branch.state),
                style,
            )))
        })
        .collect();
    let title = format!(
        " Branches ({}) · Enter: operate here | n: new ",
        app.branches.branches.len()
    );
    f.render_widget(List::new(items).block(bordered(title)), area);

    if let Some(form) = &app.branches.form {
        render_form(f, form, area);
    }
}
