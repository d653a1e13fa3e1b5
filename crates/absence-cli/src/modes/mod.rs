//! Runtime execution modes.
//!
//! - `tui`: Full-screen interactive form (optional feature)

#[cfg(feature = "tui")]
pub use absence_tui::run_interactive;

#[cfg(not(feature = "tui"))]
pub async fn run_interactive(_config: &absence_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!(
        "TUI support is disabled in this build (feature \"tui\"). Use `absence compose` instead."
    );
}
