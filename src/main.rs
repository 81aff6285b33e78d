//! TechWatch - IT Equipment Inventory Manager

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use techwatch::{
    repository::Repository,
    services::Services,
    settings::{Settings, SETTINGS_FILE},
    shell::Shell,
};

#[derive(Parser)]
#[command(name = "techwatch", version, about = "TechWatch - IT Equipment Inventory Manager")]
struct Cli {
    /// Settings file path
    #[arg(long, default_value = SETTINGS_FILE)]
    settings: PathBuf,

    /// Directory for the append-only log file
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Append-only line log: timestamp, severity, message
    let file_appender = tracing_appender::rolling::never(&cli.log_dir, "inventory.log");
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "techwatch=info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false),
        )
        .init();

    tracing::info!("Starting TechWatch v{}", env!("CARGO_PKG_VERSION"));

    // Settings are loaded once and threaded through explicitly
    let settings = Settings::load(&cli.settings);

    let repository = Repository::new();
    let services = Services::new(repository);

    let mut shell = Shell::new(services, settings, cli.settings)?;
    shell.run()
}
