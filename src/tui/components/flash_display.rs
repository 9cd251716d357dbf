//! Flash line showing the outcome of the last action

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::binder::{FlashArea, FlashKind, FlashMessage};
use crate::tui::ui::Styles;

/// Renders the binder's [`FlashArea`]
#[derive(Debug, Clone, Default)]
pub struct FlashDisplay {
    pub show_timestamp: bool,
}

impl FlashDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamp = true;
        self
    }

    pub fn render(&self, f: &mut Frame, area: Rect, flash: &FlashArea) {
        let (content, style) = match flash.current() {
            Some(message) => (self.format_message(message), kind_style(message.kind)),
            None => ("Ready".to_string(), Styles::default()),
        };

        let block = Block::default()
            .title("Flash")
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border());

        f.render_widget(Paragraph::new(content).style(style).block(block), area);
    }

    fn format_message(&self, message: &FlashMessage) -> String {
        let prefix = match message.kind {
            FlashKind::Info => "ℹ",
            FlashKind::Success => "✓",
            FlashKind::Error => "✗",
        };

        if self.show_timestamp {
            format!(
                "{} [{}] {}",
                prefix,
                message.timestamp.format("%H:%M:%S"),
                message.text
            )
        } else {
            format!("{} {}", prefix, message.text)
        }
    }
}

fn kind_style(kind: FlashKind) -> Style {
    match kind {
        FlashKind::Info => Styles::info(),
        FlashKind::Success => Styles::success(),
        FlashKind::Error => Styles::error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_prefixes() {
        let display = FlashDisplay::new();
        assert_eq!(
            display.format_message(&FlashMessage::success("Success".to_string())),
            "✓ Success"
        );
        assert_eq!(
            display.format_message(&FlashMessage::error("Not Found".to_string())),
            "✗ Not Found"
        );
    }

    #[test]
    fn test_format_message_with_timestamp() {
        let display = FlashDisplay::new().with_timestamps();
        let text = display.format_message(&FlashMessage::info("hello".to_string()));
        assert!(text.starts_with("ℹ ["));
        assert!(text.ends_with("] hello"));
    }
}
