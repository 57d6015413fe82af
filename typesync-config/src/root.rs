//! Project root resolution.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Levels between the executable's directory and the project root, for a
/// tool built at `<root>/<tool>/target/<profile>/`.
pub const DEFAULT_ROOT_DEPTH: usize = 3;

/// Name of the optional config file at the project root.
pub const CONFIG_FILE_NAME: &str = "typesync.toml";

/// Directory that configured paths are relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    path: PathBuf,
}

impl ProjectRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The directory `depth` levels above `anchor`. Depth 0 is `anchor` itself.
    pub fn from_anchor(anchor: &Path, depth: usize) -> Result<Self> {
        anchor
            .ancestors()
            .nth(depth)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                Box::new(Error::RootNotFound {
                    anchor: anchor.to_path_buf(),
                    depth,
                })
            })
    }

    /// The directory `depth` levels above the running executable's directory.
    pub fn from_current_exe(depth: usize) -> Result<Self> {
        let exe = std::env::current_exe()
            .and_then(|p| p.canonicalize())
            .map_err(|e| {
                Box::new(Error::Io {
                    path: PathBuf::from("<current executable>"),
                    source: e,
                })
            })?;
        let dir = exe.parent().unwrap_or(&exe);
        Self::from_anchor(dir, depth)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Join a configured path onto the root. Absolute paths replace it.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path.join(relative)
    }

    pub fn config_path(&self) -> PathBuf {
        self.join(CONFIG_FILE_NAME)
    }
}
