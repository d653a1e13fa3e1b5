//! Full-screen TUI for the absence message generator.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr, stdout};
use std::sync::Arc;

use absence_core::clipboard::SystemClipboard;
use absence_core::config::Config;
use anyhow::Result;
pub use features::{form, toast};
pub use runtime::TuiRuntime;

/// Runs the interactive form until the user quits.
pub async fn run_interactive(config: &Config) -> Result<()> {
    // The form renders to stdout
    if !stdout().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `absence compose ...` for non-interactive use."
        );
    }

    tracing::info!(clipboard = config.clipboard.as_str(), "starting interactive session");

    let clipboard = Arc::new(SystemClipboard::new(config.clipboard));
    let mut runtime = TuiRuntime::new(clipboard)?;
    runtime.run()?;

    // Terminal is restored once the runtime is dropped
    drop(runtime);
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
