use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod formatters;

#[derive(Parser)]
#[command(name = "scratchpad")]
#[command(
    version,
    about = "Page scrapers, a word-matching dashboard and algorithm exercises"
)]
#[command(
    long_about = "A personal toolbox: scrape a product page or a football squad page, run a small dashboard for comparing two spreadsheet columns, or run textbook algorithm exercises on their sample inputs."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Path to a TOML config file (defaults to $SCRATCHPAD_CONFIG or the user config dir)
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape a product page for its title and price
    Amazon {
        /// Product page URL (defaults to the configured product URL)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// List the clubs linked from the Premier League clubs page
    Clubs {
        /// Clubs index URL (defaults to the configured clubs URL)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Scrape the squad page of one club
    Squad {
        /// Position of the club on the clubs page (0 = first)
        #[arg(short, long, default_value_t = 0)]
        club: usize,

        /// Clubs index URL (defaults to the configured clubs URL)
        #[arg(short, long)]
        url: Option<String>,

        /// Write players as CSV instead of a table
        #[arg(long)]
        csv: bool,
    },

    /// Run the word-matching dashboard web server
    Dashboard {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Algorithm exercises
    Exercises {
        #[command(subcommand)]
        action: ExerciseCommands,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// List available exercises
    List,

    /// Run one exercise on its sample input
    Run {
        /// Exercise name (see `exercises list`)
        name: String,
    },

    /// Run every exercise on its sample input
    RunAll,
}
