//! The confirm-gated conversion of one source file into one destination file.

use std::path::{Path, PathBuf};

use eyre::Result;
use tracing::{debug, info};

use crate::{file::OutputFile, source::SourceText, translator::LineTranslator};

/// Paths for a single sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Rust file holding the shared type definitions.
    pub source_path: PathBuf,
    /// TypeScript file that gets overwritten.
    pub destination_path: PathBuf,
}

impl SyncConfig {
    pub fn new(source_path: impl Into<PathBuf>, destination_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            destination_path: destination_path.into(),
        }
    }
}

/// Translated output that has not been written yet.
#[derive(Debug, Clone)]
pub struct Preview {
    /// Where the lines will be written.
    pub destination: PathBuf,
    /// Translated lines, in source order, each with its terminator.
    pub lines: Vec<String>,
    /// Attribute and import lines dropped from the source.
    pub dropped: usize,
}

impl Preview {
    /// The full text that would be written.
    pub fn content(&self) -> String {
        self.lines.concat()
    }
}

/// Decides whether a previewed translation gets written.
pub trait Confirm {
    fn confirm(&mut self, preview: &Preview) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&Preview) -> bool,
{
    fn confirm(&mut self, preview: &Preview) -> Result<bool> {
        Ok(self(preview))
    }
}

/// Result of a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The destination was overwritten with `lines` lines.
    Written { destination: PathBuf, lines: usize },
    /// Confirmation was declined; the destination was not touched.
    Skipped { destination: PathBuf },
}

impl SyncOutcome {
    pub fn destination(&self) -> &Path {
        match self {
            SyncOutcome::Written { destination, .. } | SyncOutcome::Skipped { destination } => {
                destination
            }
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, SyncOutcome::Written { .. })
    }
}

/// Drives read, filter, translate, confirm and write.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: SyncConfig,
    translator: LineTranslator,
}

impl Orchestrator {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            translator: LineTranslator::new(),
        }
    }

    /// Read and translate the source without touching the destination.
    pub fn prepare(&self) -> Result<Preview> {
        let source = SourceText::read(&self.config.source_path)?;
        let lines = self.translator.translate_all(source.declaration_lines());
        let dropped = source.housekeeping_count();

        debug!(
            source = %source.path().display(),
            translated = lines.len(),
            dropped,
            "prepared translation"
        );

        Ok(Preview {
            destination: self.config.destination_path.clone(),
            lines,
            dropped,
        })
    }

    /// Write a prepared preview to the destination.
    pub fn commit(&self, preview: &Preview) -> Result<SyncOutcome> {
        let file = OutputFile::new(&preview.destination, preview.lines.clone());
        file.write()?;

        info!(destination = %file.path().display(), lines = file.lines().len(), "wrote destination");

        Ok(SyncOutcome::Written {
            destination: preview.destination.clone(),
            lines: preview.lines.len(),
        })
    }

    /// Prepare, ask `confirm`, and write only if it agrees.
    pub fn run(&self, confirm: &mut dyn Confirm) -> Result<SyncOutcome> {
        let preview = self.prepare()?;

        if confirm.confirm(&preview)? {
            self.commit(&preview)
        } else {
            debug!(destination = %preview.destination.display(), "write declined");
            Ok(SyncOutcome::Skipped {
                destination: preview.destination,
            })
        }
    }
}
