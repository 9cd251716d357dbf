//! Result table component for the search result panels

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::binder::ResultPanel;
use crate::tui::ui::Styles;

/// Configuration for result table display
#[derive(Debug, Clone)]
pub struct ResultTableConfig {
    pub title: String,
    pub max_column_width: usize,
}

impl ResultTableConfig {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            max_column_width: 24,
        }
    }

    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width;
        self
    }
}

/// Renders a [`ResultPanel`] as a scrollable list of padded rows
pub struct ResultTable {
    pub config: ResultTableConfig,
    pub scroll_offset: usize,
}

impl ResultTable {
    pub fn new(config: ResultTableConfig) -> Self {
        Self {
            config,
            scroll_offset: 0,
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize, panel: &ResultPanel) {
        let rows = panel.table().map(|t| t.row_count()).unwrap_or(0);
        self.scroll_offset = (self.scroll_offset + amount).min(rows.saturating_sub(1));
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    /// Column widths fitted to the content, capped at the configured maximum
    fn column_widths(&self, panel: &ResultPanel) -> Vec<usize> {
        let Some(table) = panel.table() else {
            return Vec::new();
        };

        table
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                table
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .chain(std::iter::once(column.width()))
                    .max()
                    .unwrap_or(0)
                    .min(self.config.max_column_width)
            })
            .collect()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, panel: &ResultPanel) {
        let widths = self.column_widths(panel);
        let mut items = Vec::new();

        let title = match panel.table() {
            Some(table) => {
                items.push(ListItem::new(row_line(&table.columns, &widths, Styles::title())));
                items.extend(
                    table
                        .rows
                        .iter()
                        .skip(self.scroll_offset)
                        .map(|row| ListItem::new(row_line(row, &widths, Style::default()))),
                );
                format!("{} - {} ({})", self.config.title, table.heading, table.row_count())
            }
            None => format!("{} (Empty)", self.config.title),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border());

        f.render_widget(List::new(items).block(block), area);
    }
}

fn row_line(cells: &[String], widths: &[usize], style: Style) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", style));
        }
        spans.push(Span::styled(fit(cell, *width), style));
    }
    Line::from(spans)
}

/// Truncate or pad `text` to exactly `width` columns
fn fit(text: &str, width: usize) -> String {
    let mut fitted = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        fitted.push(c);
        used += w;
    }
    fitted.push_str(&" ".repeat(width - used));
    fitted
}
