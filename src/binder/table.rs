//! Result tables rendered into the search result panels

use unicode_width::UnicodeWidthStr;

use crate::models::{Item, Wishlist, WishlistStatus};

const WISHLIST_COLUMNS: [&str; 4] = ["ID", "Name", "UserID", "Status"];
const ITEM_COLUMNS: [&str; 4] = ["ID", "Wishlist ID", "Product Name", "Product ID"];

/// A titled table of records with fixed columns
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub heading: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(heading: &str, columns: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn wishlists(wishlists: &[Wishlist]) -> Self {
        let mut table = Self::new("Wishlists", &WISHLIST_COLUMNS);
        table.rows = wishlists
            .iter()
            .map(|w| {
                vec![
                    w.id.to_string(),
                    w.name.clone(),
                    w.user_id.clone(),
                    WishlistStatus::from_flag(w.status).as_segment().to_string(),
                ]
            })
            .collect();
        table
    }

    pub fn items(items: &[Item]) -> Self {
        let mut table = Self::new("Items", &ITEM_COLUMNS);
        table.rows = items
            .iter()
            .map(|i| {
                vec![
                    i.id.to_string(),
                    i.wishlist_id.to_string(),
                    i.product_name.clone(),
                    i.product_id.clone(),
                ]
            })
            .collect();
        table
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<h4>{}</h4>", escape_html(&self.heading));
        html.push_str(r#"<table class="table-striped" cellpadding="10">"#);

        html.push_str("<tr>");
        for column in &self.columns {
            html.push_str(&format!(r#"<th style="width:20%">{}</th>"#, escape_html(column)));
        }
        html.push_str("</tr>");

        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>");
        }

        html.push_str("</table>");
        html
    }

    /// Plain text rendering with padded columns
    pub fn to_text(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .chain(std::iter::once(column.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = vec![self.heading.clone(), format_row(&self.columns, &widths)];
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        lines.extend(self.rows.iter().map(|row| format_row(row, &widths)));
        lines.join("\n")
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{}{}", cell, " ".repeat(width.saturating_sub(cell.width()))))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A result container (`search_results` or `search_results_items`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPanel {
    table: Option<Table>,
}

impl ResultPanel {
    pub fn show(&mut self, table: Table) {
        self.table = Some(table);
    }

    pub fn clear(&mut self) {
        self.table = None;
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_none()
    }

    /// Inner HTML of the container
    pub fn to_html(&self) -> String {
        self.table.as_ref().map(Table::to_html).unwrap_or_default()
    }
}
