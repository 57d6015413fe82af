// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod root;

pub use error::{Error, Result};
pub use manifest::{DEFAULT_DESTINATION, DEFAULT_SOURCE, Manifest, PathsConfig};
pub use root::{CONFIG_FILE_NAME, DEFAULT_ROOT_DEPTH, ProjectRoot};
