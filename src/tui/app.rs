//! Main TUI application state and key handling

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info};

use crate::api::WishlistApi;
use crate::binder::{Action, FieldId, FormBinder};
use crate::tui::components::{FlashDisplay, FormField, FormFieldType, ResultTable, ResultTableConfig};
use crate::tui::ui;

/// Function key bound to `action`, counting up from F2 in button order
pub fn action_key(action: Action) -> u8 {
    Action::ALL
        .iter()
        .position(|a| *a == action)
        .map(|i| i as u8 + 2)
        .unwrap_or(0)
}

/// Action bound to function key `F{n}`
pub fn action_for_key(n: u8) -> Option<Action> {
    n.checked_sub(2)
        .and_then(|i| Action::ALL.get(i as usize))
        .copied()
}

/// Main TUI application state
pub struct App<A> {
    pub binder: FormBinder<A>,
    pub fields: Vec<FormField>,
    pub current_field: usize,
    pub results_table: ResultTable,
    pub items_table: ResultTable,
    pub flash_display: FlashDisplay,
    /// Blocking message from a rejected action
    pub alert: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl<A: WishlistApi> App<A> {
    pub fn new(api: A) -> Self {
        let mut fields = vec![
            FormField::new(FieldId::WishlistId, FormFieldType::Text)
                .with_placeholder("id to retrieve, update or delete"),
            FormField::new(FieldId::WishlistName, FormFieldType::Text),
            FormField::new(FieldId::WishlistUserId, FormFieldType::Text),
            FormField::new(FieldId::WishlistItems, FormFieldType::Text),
            FormField::new(FieldId::WishlistStatus, FormFieldType::Dropdown)
                .with_dropdown_options(&["true", "false"]),
            FormField::new(FieldId::ItemId, FormFieldType::Text)
                .with_placeholder("blank lists every item"),
            FormField::new(FieldId::ItemWishlistId, FormFieldType::Text),
            FormField::new(FieldId::ItemProductId, FormFieldType::Text),
            FormField::new(FieldId::ItemProductName, FormFieldType::Text),
        ];
        fields[0].set_focus(true);

        Self {
            binder: FormBinder::new(api),
            fields,
            current_field: 0,
            results_table: ResultTable::new(ResultTableConfig::new("Search Results")),
            items_table: ResultTable::new(ResultTableConfig::new("Search Results Items")),
            flash_display: FlashDisplay::new().with_timestamps(),
            alert: None,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.current_field)
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key).await?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle keyboard input events
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.alert = None;
            }
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::Esc if self.show_help => self.show_help = false,
            KeyCode::F(n) => {
                if let Some(action) = action_for_key(n) {
                    self.perform(action).await;
                }
            }
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::PageDown => {
                let view = self.binder.view();
                self.results_table.scroll_down(5, &view.search_results);
                self.items_table.scroll_down(5, &view.search_results_items);
            }
            KeyCode::PageUp => {
                self.results_table.scroll_up(5);
                self.items_table.scroll_up(5);
            }
            _ => self.edit_focused_field(key),
        }

        Ok(())
    }

    /// Run an action through the binder, raising an alert if it is rejected
    pub async fn perform(&mut self, action: Action) {
        debug!("Key bound to {:?} pressed", action);
        if let Err(e) = self.binder.perform(action).await {
            info!("{} rejected: {}", action.label(), e);
            self.alert = Some(e.to_string());
            return;
        }

        self.results_table.reset_scroll();
        self.items_table.reset_scroll();
        let view = self.binder.view();
        for field in &mut self.fields {
            field.move_cursor_to_end(view.field(field.field));
        }
    }

    fn focus_next(&mut self) {
        self.set_focus((self.current_field + 1) % self.fields.len());
    }

    fn focus_previous(&mut self) {
        let count = self.fields.len();
        self.set_focus((self.current_field + count - 1) % count);
    }

    fn set_focus(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(self.current_field) {
            field.set_focus(false);
        }
        self.current_field = index;
        if let Some(field) = self.fields.get_mut(self.current_field) {
            field.set_focus(true);
        }
    }

    fn edit_focused_field(&mut self, key: KeyEvent) {
        let Some(field) = self.fields.get_mut(self.current_field) else {
            return;
        };
        let value = self.binder.view_mut().field_mut(field.field);

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.insert_char(value, c)
            }
            KeyCode::Backspace => field.delete_char(value),
            KeyCode::Delete => field.delete_char_forward(value),
            KeyCode::Left => field.move_cursor_left(),
            KeyCode::Right => field.move_cursor_right(value),
            KeyCode::Home => field.move_cursor_to_start(),
            KeyCode::End => field.move_cursor_to_end(value),
            KeyCode::Up => field.cycle_option(value, false),
            KeyCode::Down => field.cycle_option(value, true),
            _ => {}
        }
    }
}
