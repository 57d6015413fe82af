//! Sync command report data structures.

use std::path::Path;

use typesync_core::{Preview, SyncOutcome};

use super::output::{Output, Report};

/// The translated file content shown before asking to write it.
#[derive(Debug)]
pub struct PreviewReport<'a> {
    pub content: String,
    pub destination: &'a Path,
}

impl<'a> PreviewReport<'a> {
    pub fn new(preview: &'a Preview) -> Self {
        Self {
            content: preview.content(),
            destination: &preview.destination,
        }
    }
}

impl Report for PreviewReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        out.section("Preparing to write");
        out.separator();
        out.verbatim(&self.content);
        out.separator();
        out.newline();
        out.preformatted(&format!("to {}", self.destination.display()));
        out.newline();
    }
}

/// Whether the destination was written.
#[derive(Debug)]
pub struct OutcomeReport<'a> {
    pub outcome: &'a SyncOutcome,
}

impl<'a> OutcomeReport<'a> {
    pub fn new(outcome: &'a SyncOutcome) -> Self {
        Self { outcome }
    }
}

impl Report for OutcomeReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        match self.outcome {
            SyncOutcome::Written { .. } => out.preformatted("Completed Write."),
            SyncOutcome::Skipped { .. } => out.preformatted("Skipped Write."),
        }
    }
}
