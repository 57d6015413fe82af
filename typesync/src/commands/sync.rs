use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tracing::debug;
use typesync_config::{DEFAULT_ROOT_DEPTH, Manifest, ProjectRoot};
use typesync_core::Orchestrator;

use super::UnwrapOrExit;
use crate::{
    prompt::PromptConfirm,
    reports::{OutcomeReport, PreviewReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct SyncCommand {
    /// Project root (defaults to --depth levels above the executable)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Levels above the executable's directory to the project root
    #[arg(long, default_value_t = DEFAULT_ROOT_DEPTH)]
    pub depth: usize,

    /// Path to typesync.toml (defaults to <root>/typesync.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Preview the translated output without prompting or writing
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncCommand {
    pub fn run(&self) -> Result<()> {
        let root = self.project_root().unwrap_or_exit();
        let manifest = Manifest::discover(&root, self.config.as_deref()).unwrap_or_exit();
        let config = manifest.resolve(&root);
        debug!(
            root = %root.path().display(),
            source = %config.source_path.display(),
            destination = %config.destination_path.display(),
            "resolved paths"
        );
        let orchestrator = Orchestrator::new(config);

        if self.dry_run {
            let preview = orchestrator.prepare()?;
            PreviewReport::new(&preview).render(&mut TerminalOutput::new());
            return Ok(());
        }

        let outcome = orchestrator.run(&mut PromptConfirm::stdio())?;
        OutcomeReport::new(&outcome).render(&mut TerminalOutput::new());
        Ok(())
    }

    fn project_root(&self) -> typesync_config::Result<ProjectRoot> {
        match &self.root {
            Some(root) => Ok(ProjectRoot::new(root)),
            None => ProjectRoot::from_current_exe(self.depth),
        }
    }
}
