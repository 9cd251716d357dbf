//! Terminal front end: both forms, both result panels and the flash line on
//! one screen, with every button bound to a function key

pub mod app;
pub mod components;
pub mod ui;

pub use app::App;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};

use crate::api::HttpWishlistApi;
use crate::config::Config;

/// Run the interactive screen against the service named in `config`
pub async fn run_tui(config: &Config) -> Result<()> {
    let api = HttpWishlistApi::new(config)?;
    info!("Starting wishlist TUI against {}", api.base_url());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(api);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!("Wishlist TUI exited successfully"),
        Err(e) => error!("Wishlist TUI encountered an error: {}", e),
    }
    result
}
