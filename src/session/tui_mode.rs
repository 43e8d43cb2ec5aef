//! TUI mode execution

use super::SessionStore;
use super::messages::{print_session_exit_success, print_session_starting};
use crate::api::AdminApi;
use crate::environment::Environment;
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};

/// Runs the dashboard until the operator quits.
///
/// The terminal is restored even when the UI loop fails.
pub async fn run_tui_mode(
    store: Box<dyn SessionStore>,
    api: Arc<dyn AdminApi>,
    environment: Environment,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting(&environment.api_url());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(store, api, environment, UIConfig::new(with_background));
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    print_session_exit_success();
    Ok(())
}
