//! Terminal setup, teardown and the main loop.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::app::App;
use crate::error::{AppError, Result};
use crate::events::EventHandler;
use crate::table::TableRow;

/// Owns the terminal in raw mode and restores it on drop.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// A panic hook restores the terminal before the panic message prints.
    pub fn new() -> Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode().map_err(|e| AppError::terminal(format!("raw mode: {}", e)))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        debug!("Terminal initialized");
        Ok(Self { terminal })
    }

    /// Get mutable access to the terminal for rendering.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the application until it asks to quit.
pub fn run<R: TableRow + Clone + 'static>(app: &mut App<R>) -> Result<()> {
    let mut guard = TerminalGuard::new()?;
    let events = EventHandler::new();
    info!("Entering main loop");

    while !app.should_quit() {
        guard.terminal().draw(|frame| app.view(frame))?;
        let event = events.next()?;
        app.update(event);
    }

    info!("Leaving main loop");
    Ok(())
}
