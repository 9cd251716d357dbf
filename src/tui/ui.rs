//! Screen layout and shared styles for the wishlist admin TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::api::WishlistApi;
use crate::binder::{Action, FieldId};
use crate::tui::app::{action_key, App};

/// Common UI styles
pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default()
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn success() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn warning() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn info() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn active_border() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn inactive_border() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn focused_value() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED)
    }
}

/// Draw the whole screen: both forms, both result panels, the flash line
/// and the key footer, with any popup on top
pub fn draw<A: WishlistApi>(f: &mut Frame, app: &App<A>) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FieldId::WISHLIST_FORM.len() as u16 + 2),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(size);

    draw_forms(f, chunks[0], app);
    draw_results(f, chunks[1], app);
    app.flash_display.render(f, chunks[2], &app.binder.view().flash);
    draw_footer(f, chunks[3]);

    if app.show_help {
        draw_help_popup(f, size);
    }
    if let Some(alert) = &app.alert {
        draw_alert(f, size, alert);
    }
}

fn draw_forms<A: WishlistApi>(f: &mut Frame, area: Rect, app: &App<A>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (title, fields, column) in [
        ("Wishlist", &FieldId::WISHLIST_FORM[..], columns[0]),
        ("Item", &FieldId::ITEM_FORM[..], columns[1]),
    ] {
        let focused = app
            .focused_field()
            .map(|field| fields.contains(&field.field))
            .unwrap_or(false);
        let border_style = if focused {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(column);
        f.render_widget(block, column);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); fields.len()])
            .split(inner);

        for (row, id) in rows.iter().zip(fields) {
            if let Some(field) = app.fields.iter().find(|field| field.field == *id) {
                field.render(f, *row, app.binder.view().field(*id));
            }
        }
    }
}

fn draw_results<A: WishlistApi>(f: &mut Frame, area: Rect, app: &App<A>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let view = app.binder.view();
    app.results_table.render(f, columns[0], &view.search_results);
    app.items_table.render(f, columns[1], &view.search_results_items);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for action in Action::ALL {
        spans.push(Span::styled(format!("F{}", action_key(action)), Styles::title()));
        spans.push(Span::styled(format!(" {}  ", action.label()), Styles::inactive()));
    }
    spans.push(Span::styled("F1", Styles::title()));
    spans.push(Span::styled(" Help  ", Styles::inactive()));
    spans.push(Span::styled("Ctrl+Q", Styles::title()));
    spans.push(Span::styled(" Quit", Styles::inactive()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_alert(f: &mut Frame, area: Rect, message: &str) {
    let popup_area = centered_rect(50, 20, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(Span::styled(message.to_string(), Styles::error())),
        Line::from(""),
        Line::from(Span::styled("Press Enter or Esc to dismiss", Styles::inactive())),
    ];
    let popup = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Alert")
            .borders(Borders::ALL)
            .border_style(Styles::error()),
    );

    f.render_widget(popup, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(Span::styled("Editing", Styles::title())),
        Line::from("Tab / Shift+Tab - Next / previous field"),
        Line::from("↑/↓ - Change status"),
        Line::from("←/→ Home/End - Move cursor"),
        Line::from("PgUp/PgDn - Scroll result panels"),
        Line::from(""),
        Line::from(Span::styled("Actions", Styles::title())),
    ];
    lines.extend(
        Action::ALL
            .iter()
            .map(|action| Line::from(format!("F{} - {}", action_key(*action), action.label()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from("F1 - Toggle this help"));
    lines.push(Line::from("Ctrl+Q - Quit"));

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Styles::warning()),
    );

    f.render_widget(popup, popup_area);
}

/// Center a rectangle within another rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
