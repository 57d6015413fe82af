mod commands;
mod prompt;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

/// Environment variable holding the log filter, e.g. `TYPESYNC_LOG=debug`.
const LOG_ENV: &str = "TYPESYNC_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    Cli::parse().run()
}

// Logs go to stderr so they never mix with the preview on stdout.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
