mod sync;

use clap::Parser;
use eyre::Result;
use sync::SyncCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for typesync_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "typesync")]
#[command(version)]
#[command(about = "Regenerate TypeScript shared types from Rust definitions")]
pub(crate) struct Cli {
    #[command(flatten)]
    sync: SyncCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.sync.run()
    }
}
