//! Core of typesync: translate Rust shared type definitions into TypeScript.
//!
//! The translation is a line-oriented substitution pipeline. Each line is
//! classified, run through its rule group, optionally through the
//! optional-field rules, and finally through the style rules. No parsing is
//! involved, so anything the rules do not anticipate passes through as-is.

mod file;
mod rules;
mod source;
mod sync;
mod translator;

pub use file::OutputFile;
pub use rules::{Rule, RuleGroup};
pub use source::{SourceText, is_housekeeping};
pub use sync::{Confirm, Orchestrator, Preview, SyncConfig, SyncOutcome};
pub use translator::{LineClass, LineTranslator};
