mod commands;
mod config;
mod render;
mod source;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::convert::Target;
use commands::sidebar::SidebarAction;

#[derive(Parser)]
#[command(name = "dashcal")]
#[command(about = "Browse the dashboard calendar from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with its events
    Month {
        /// Year to show (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Events file or API URL (overrides events_source from config)
        #[arg(long)]
        source: Option<String>,

        /// Only show the weeks the month touches
        #[arg(long)]
        compact: bool,
    },
    /// List a day's events and step through them
    Day {
        /// Day to show (YYYY-MM-DD)
        date: NaiveDate,

        /// Steps through the day's events; negative steps go backwards
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        step: i32,

        /// Events file or API URL (overrides events_source from config)
        #[arg(long)]
        source: Option<String>,
    },
    /// Convert a JSON array of events between the wire and UI shapes
    Convert {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = Target::Ui)]
        to: Target,
    },
    /// Show or change whether the department sidebar is collapsed
    Sidebar {
        #[arg(value_enum, default_value_t = SidebarAction::Show)]
        action: SidebarAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load_config()?;

    match cli.command {
        Commands::Month {
            year,
            month,
            source,
            compact,
        } => commands::month::run(year, month, source, compact, &config).await,
        Commands::Day { date, step, source } => {
            commands::day::run(date, step, source, &config).await
        }
        Commands::Convert { file, to } => commands::convert::run(&file, to),
        Commands::Sidebar { action } => commands::sidebar::run(action, &config),
    }
}
