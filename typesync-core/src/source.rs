//! Reading Rust source files into lines.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Line prefixes with no TypeScript counterpart: attributes and imports.
const HOUSEKEEPING_PREFIXES: [&str; 2] = ["#", "use"];

/// Whether a line is an attribute or import line that is dropped before
/// translation.
///
/// The check is a raw prefix test on the unindented line, so an indented
/// `#[serde(...)]` is kept and a top-level `user_id` line is dropped.
pub fn is_housekeeping(line: &str) -> bool {
    HOUSEKEEPING_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// The full text of a source file with line terminators normalized to `\n`.
#[derive(Debug, Clone)]
pub struct SourceText {
    path: PathBuf,
    text: String,
}

impl SourceText {
    /// Read a file from disk.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let raw = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read source file {}", path.display()))?;
        Ok(Self::new(path, &raw))
    }

    /// Build from text already in memory.
    pub fn new(path: impl Into<PathBuf>, raw: &str) -> Self {
        Self {
            path: path.into(),
            text: normalize_newlines(raw),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All lines, each keeping its `\n` terminator. The last line has none if
    /// the file does not end with a newline.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split_inclusive('\n')
    }

    /// Lines that take part in translation, in file order.
    pub fn declaration_lines(&self) -> impl Iterator<Item = &str> {
        self.lines().filter(|l| !is_housekeeping(l))
    }

    /// Number of lines dropped by [`is_housekeeping`].
    pub fn housekeeping_count(&self) -> usize {
        self.lines().filter(|l| is_housekeeping(l)).count()
    }
}

/// Convert `\r\n` and lone `\r` terminators to `\n`.
fn normalize_newlines(raw: &str) -> String {
    if !raw.contains('\r') {
        return raw.to_string();
    }
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_is_housekeeping() {
        assert!(is_housekeeping("#[derive(Debug)]\n"));
        assert!(is_housekeeping("use serde::Serialize;\n"));
        assert!(is_housekeeping("user_id: u8,\n"));
        assert!(!is_housekeeping("    #[serde(default)]\n"));
        assert!(!is_housekeeping("pub struct Foo {\n"));
        assert!(!is_housekeeping("\n"));
    }

    #[test]
    fn test_lines_keep_terminators() {
        let src = SourceText::new("a.rs", "a\nb\n\nc");
        let lines: Vec<_> = src.lines().collect();
        assert_eq!(lines, ["a\n", "b\n", "\n", "c"]);
    }

    #[test]
    fn test_crlf_normalized() {
        let src = SourceText::new("a.rs", "a\r\nb\rc\r\n");
        let lines: Vec<_> = src.lines().collect();
        assert_eq!(lines, ["a\n", "b\n", "c\n"]);
    }

    #[test]
    fn test_declaration_lines_filter() {
        let src = SourceText::new(
            "a.rs",
            "use serde::Serialize;\n\n#[derive(Serialize)]\npub struct A {\n}\n",
        );
        let lines: Vec<_> = src.declaration_lines().collect();
        assert_eq!(lines, ["\n", "pub struct A {\n", "}\n"]);
        assert_eq!(src.housekeeping_count(), 2);
    }

    #[test]
    fn test_empty_file() {
        let src = SourceText::new("a.rs", "");
        assert_eq!(src.lines().count(), 0);
    }

    #[test]
    fn test_read_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types.rs");
        fs::write(&path, "pub struct A {}\r\n").unwrap();

        let src = SourceText::read(&path).unwrap();
        assert_eq!(src.path(), path);
        assert_eq!(src.lines().collect::<Vec<_>>(), ["pub struct A {}\n"]);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let err = SourceText::read(temp.path().join("missing.rs")).unwrap_err();
        assert!(err.to_string().contains("missing.rs"));
    }
}
