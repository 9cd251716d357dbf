//! Form field component for user input
//!
//! The text itself lives in the binder's view state; a field only tracks
//! focus and the cursor, and edits the value it is handed.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::binder::FieldId;
use crate::tui::ui::Styles;

/// Width reserved for the label column
const LABEL_WIDTH: usize = 14;

/// Type of form field
#[derive(Debug, Clone, PartialEq)]
pub enum FormFieldType {
    Text,
    Dropdown,
}

/// Individual form field
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: FieldId,
    pub label: String,
    pub placeholder: String,
    pub field_type: FormFieldType,
    pub is_focused: bool,
    /// Cursor position in characters
    pub cursor_position: usize,
    pub dropdown_options: Vec<String>,
}

impl FormField {
    pub fn new(field: FieldId, field_type: FormFieldType) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            placeholder: String::new(),
            field_type,
            is_focused: false,
            cursor_position: 0,
            dropdown_options: Vec::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_dropdown_options(mut self, options: &[&str]) -> Self {
        self.dropdown_options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn insert_char(&mut self, value: &mut String, c: char) {
        if self.field_type == FormFieldType::Dropdown {
            return; // Dropdowns only change through cycle_option
        }
        self.clamp_cursor(value);
        value.insert(byte_index(value, self.cursor_position), c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self, value: &mut String) {
        self.clamp_cursor(value);
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            value.remove(byte_index(value, self.cursor_position));
        }
    }

    pub fn delete_char_forward(&mut self, value: &mut String) {
        self.clamp_cursor(value);
        if self.cursor_position < value.chars().count() {
            value.remove(byte_index(value, self.cursor_position));
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self, value: &str) {
        if self.cursor_position < value.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_to_end(&mut self, value: &str) {
        self.cursor_position = value.chars().count();
    }

    /// Step through the dropdown options, starting from the current value
    pub fn cycle_option(&mut self, value: &mut String, forward: bool) {
        if self.field_type != FormFieldType::Dropdown || self.dropdown_options.is_empty() {
            return;
        }

        let count = self.dropdown_options.len();
        let next = match self.dropdown_options.iter().position(|o| o == value.trim()) {
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
            None => 0,
        };
        *value = self.dropdown_options[next].clone();
        self.move_cursor_to_end(value);
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor_position = self.cursor_position.min(value.chars().count());
    }

    /// Render the field as a single `label  value` line
    pub fn render(&self, f: &mut Frame, area: Rect, value: &str) {
        let label_style = if self.is_focused {
            Styles::active_border()
        } else {
            Styles::inactive()
        };

        let (text, text_style) = if value.is_empty() && !self.placeholder.is_empty() {
            (self.placeholder.as_str(), Styles::inactive())
        } else if self.is_focused {
            (value, Styles::focused_value())
        } else {
            (value, Styles::default())
        };

        let mut spans = vec![
            Span::styled(format!("{:<width$}", self.label, width = LABEL_WIDTH), label_style),
            Span::styled(text.to_string(), text_style),
        ];
        if self.field_type == FormFieldType::Dropdown && self.is_focused {
            spans.push(Span::styled("  ↑/↓", Styles::inactive()));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);

        // Render cursor if focused and not a dropdown
        if self.is_focused && self.field_type != FormFieldType::Dropdown {
            let prefix: String = value.chars().take(self.cursor_position).collect();
            let cursor_x = area.x + (LABEL_WIDTH + prefix.width()) as u16;
            if cursor_x < area.x + area.width {
                f.set_cursor(cursor_x, area.y);
            }
        }
    }
}

/// Byte offset of the character at `char_pos`, or the end of the string
fn byte_index(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_multibyte_text() {
        let mut field = FormField::new(FieldId::WishlistName, FormFieldType::Text);
        let mut value = String::new();

        for c in "Café".chars() {
            field.insert_char(&mut value, c);
        }
        field.move_cursor_left();
        field.insert_char(&mut value, 'x');
        assert_eq!(value, "Cafxé");

        field.delete_char_forward(&mut value);
        assert_eq!(value, "Cafx");
        field.delete_char(&mut value);
        assert_eq!(value, "Caf");
        assert_eq!(field.cursor_position, 3);
    }

    #[test]
    fn test_cursor_clamped_after_value_replaced() {
        let mut field = FormField::new(FieldId::WishlistId, FormFieldType::Text);
        let mut value = "12345".to_string();
        field.move_cursor_to_end(&value);

        value = "7".to_string();
        field.insert_char(&mut value, '1');
        assert_eq!(value, "71");
    }

    #[test]
    fn test_dropdown_cycles_options() {
        let mut field = FormField::new(FieldId::WishlistStatus, FormFieldType::Dropdown)
            .with_dropdown_options(&["true", "false"]);
        let mut value = String::new();

        field.insert_char(&mut value, 'x');
        assert_eq!(value, "");

        field.cycle_option(&mut value, true);
        assert_eq!(value, "true");
        field.cycle_option(&mut value, true);
        assert_eq!(value, "false");
        field.cycle_option(&mut value, false);
        assert_eq!(value, "true");
    }
}
