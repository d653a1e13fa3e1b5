//! CLI entry and dispatch.

use absence_core::{config, logging};
use anyhow::{Context, Result};
use clap::Parser;

mod commands;

use commands::compose::{ComposeOptions, SalutationArg, TimeOfDayArg};

#[derive(Parser)]
#[command(name = "absence")]
#[command(version)]
#[command(about = "Compose and copy an absence excuse message")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Prints the message for the given fields without the interactive form
    Compose {
        /// Time of day for the greeting
        #[arg(long, value_enum)]
        time_of_day: Option<TimeOfDayArg>,

        /// How to address the recipient
        #[arg(long, value_enum)]
        salutation: Option<SalutationArg>,

        /// The class that was missed
        #[arg(long)]
        subject: Option<String>,

        /// Reason for the absence (completes "... class as <reason>.")
        #[arg(long)]
        reason: Option<String>,

        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Your roll number
        #[arg(long)]
        roll_no: Option<String>,

        /// Also copy the message to the clipboard
        #[arg(long, conflicts_with = "preview")]
        copy: bool,

        /// Show the template with placeholders for missing fields
        #[arg(long)]
        preview: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    // Held until exit so buffered log lines are flushed
    let _log_guard = logging::init(&config::paths::logs_dir(), &config.log_filter)
        .context("init logging")?;

    // default to the interactive form
    let Some(command) = cli.command else {
        return crate::modes::run_interactive(&config).await;
    };

    match command {
        Commands::Compose {
            time_of_day,
            salutation,
            subject,
            reason,
            name,
            roll_no,
            copy,
            preview,
        } => commands::compose::run(
            &ComposeOptions {
                time_of_day,
                salutation,
                subject,
                reason,
                name,
                roll_no,
                copy,
                preview,
            },
            &config,
        ),

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
