use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A translated file waiting to be written.
pub struct OutputFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl OutputFile {
    /// Create an output file from translated lines. Each line carries its own
    /// terminator.
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joined file content.
    pub fn content(&self) -> String {
        self.lines.concat()
    }

    /// Write the file, replacing anything already there.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content())
    }
}

/// Missing parent directories are an error, not created.
fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))
}
