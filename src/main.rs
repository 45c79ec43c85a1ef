mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use commands::OutputOptions;
use scratchpad::config::Settings;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let settings = Settings::load(cli.config.as_deref())?;
    settings.validate()?;

    let out = OutputOptions { json: cli.json };

    match cli.command {
        Commands::Amazon { url } => commands::amazon(&settings, url, out).await,
        Commands::Clubs { url } => commands::clubs(&settings, url, out).await,
        Commands::Squad { club, url, csv } => {
            commands::squad(&settings, club, url, csv, out).await
        }
        Commands::Dashboard { host, port } => commands::serve_dashboard(&settings, host, port).await,
        Commands::Exercises { action } => commands::exercise_command(&action, out),
        Commands::Config => commands::show_config(&settings, out),
    }
}
