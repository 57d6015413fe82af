//! The `typesync.toml` model.

use std::{path::Path, str::FromStr};

use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;
use typesync_core::SyncConfig;

use crate::{Error, Result, root::ProjectRoot};

/// Default location of the Rust shared types, relative to the project root.
pub const DEFAULT_SOURCE: &str = "server/src/shared_types.rs";

/// Default location of the generated TypeScript types, relative to the project root.
pub const DEFAULT_DESTINATION: &str = "frontend/src/utils/shared-types.ts";

/// Root manifest for typesync.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Source and destination files
    #[serde(default)]
    pub paths: PathsConfig,
}

/// The `[paths]` table.
///
/// Values are wrapped in Spanned to preserve source location for error reporting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    pub source: Option<Spanned<String>>,
    pub destination: Option<Spanned<String>>,
}

impl PathsConfig {
    /// Configured source path, or [`DEFAULT_SOURCE`].
    pub fn source(&self) -> &str {
        self.source.as_ref().map_or(DEFAULT_SOURCE, |s| s.get_ref().as_str())
    }

    /// Configured destination path, or [`DEFAULT_DESTINATION`].
    pub fn destination(&self) -> &str {
        self.destination
            .as_ref()
            .map_or(DEFAULT_DESTINATION, |s| s.get_ref().as_str())
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "typesync.toml")
    }
}

impl Manifest {
    /// Parse a typesync.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Load the manifest for a project.
    ///
    /// An explicit path must exist. Otherwise `<root>/typesync.toml` is used
    /// when present, and the defaults when not.
    pub fn discover(root: &ProjectRoot, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = root.config_path();
        if path.is_file() {
            tracing::debug!(path = %path.display(), "using config file");
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the configured paths against the project root.
    pub fn resolve(&self, root: &ProjectRoot) -> SyncConfig {
        SyncConfig::new(
            root.join(self.paths.source()),
            root.join(self.paths.destination()),
        )
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let paths = &manifest.paths;

    for (key, value) in [("source", &paths.source), ("destination", &paths.destination)] {
        if let Some(value) = value {
            if value.get_ref().trim().is_empty() {
                return Err(Error::validation_at(
                    format!("paths.{key} must not be empty"),
                    src,
                    filename,
                    span_of(value),
                ));
            }
        }
    }

    // The defaults differ, so a clash always involves at least one configured value.
    if Path::new(paths.source()) == Path::new(paths.destination()) {
        if let Some(value) = paths.destination.as_ref().or(paths.source.as_ref()) {
            return Err(Error::validation_at(
                "paths.destination must differ from paths.source",
                src,
                filename,
                span_of(value),
            ));
        }
    }
    Ok(())
}

fn span_of(value: &Spanned<String>) -> SourceSpan {
    value.span().into()
}
