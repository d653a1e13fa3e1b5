//! Entering and leaving full-screen mode.
//!
//! `enter` and `leave` are symmetric: raw mode, the alternate screen and
//! bracketed paste are switched together. `leave` runs from the runtime's
//! `Drop` and from the panic hook, so it must tolerate being called twice.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type FormTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switches the terminal into full-screen mode and wraps it for ratatui.
///
/// Installs the restoring panic hook first. If any step fails, whatever was
/// already switched is switched back before returning the error.
pub fn enter() -> Result<FormTerminal> {
    install_panic_hook();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let switched = execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(io::stdout()))
                .context("Failed to create terminal")
        });

    if switched.is_err() {
        let _ = leave();
    }
    switched
}

/// Returns the terminal to line mode.
pub fn leave() -> Result<()> {
    // Disable paste before leaving raw mode
    let _ = execute!(io::stdout(), DisableBracketedPaste);
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave();
        previous(info);
    }));
}
