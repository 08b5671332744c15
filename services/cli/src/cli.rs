use crate::commands::{self, Command};
use app_tracker::config::AppConfig;
use app_tracker::error::AppError;
use app_tracker::telemetry;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "app-tracker",
    about = "Track applications, their deadlines, and the documents they require",
    version
)]
struct Cli {
    /// Override the configured JSON store
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// Print the mutations made by the command
    #[arg(long, global = true)]
    events: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(store) = cli.store {
        config.store.path = store;
    }

    telemetry::init(&config.telemetry)?;
    tracing::debug!(?config.environment, store = %config.store.path.display(), "tracker configured");

    let command = cli.command.unwrap_or_default();
    let stdout = io::stdout();
    commands::execute(command, &config.store.path, cli.events, &mut stdout.lock())
}
