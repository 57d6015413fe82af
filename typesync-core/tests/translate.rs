//! End-to-end translation tests.
//!
//! `fixtures/shared_types.rs` and `fixtures/shared-types.ts` are a real pair of
//! server and frontend type files that were kept in sync by this translation.

use std::fs;

use tempfile::TempDir;
use typesync_core::{LineTranslator, Orchestrator, Preview, SourceText, SyncConfig};

const FIXTURE_RS: &str = include_str!("fixtures/shared_types.rs");
const FIXTURE_TS: &str = include_str!("fixtures/shared-types.ts");

fn translate_source(text: &str) -> String {
    let source = SourceText::new("shared_types.rs", text);
    LineTranslator::new()
        .translate_all(source.declaration_lines())
        .concat()
}

#[test]
fn test_fixture_translates_to_committed_typescript() {
    assert_eq!(translate_source(FIXTURE_RS), FIXTURE_TS);
}

#[test]
fn test_fixture_line_counts() {
    let source = SourceText::new("shared_types.rs", FIXTURE_RS);
    let total = source.lines().count();
    let kept = source.declaration_lines().count();

    assert_eq!(total, 71);
    assert_eq!(total - source.housekeeping_count(), kept);
    assert_eq!(kept, FIXTURE_TS.lines().count());
}

#[test]
fn test_fixture_through_orchestrator() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("shared_types.rs");
    let destination = temp.path().join("shared-types.ts");
    fs::write(&source, FIXTURE_RS).unwrap();

    let orchestrator = Orchestrator::new(SyncConfig::new(&source, &destination));
    orchestrator.run(&mut |_: &Preview| true).unwrap();

    assert_eq!(fs::read_to_string(&destination).unwrap(), FIXTURE_TS);
}

#[test]
fn test_player_struct() {
    let output = translate_source(
        "pub struct Player {\n    pub name: String,\n    pub health: Option<u8>,\n}\n",
    );

    insta::assert_snapshot!(output.trim_end(), @r"
export type Player = {
     name: string,
     health?: number,
}
");
}

#[test]
fn test_enum_with_attributes() {
    let output = translate_source(
        "#[derive(Serialize_repr)]\n#[repr(u8)]\npub enum Code {\n    First = 1,\n    Second,\n}\n",
    );

    insta::assert_snapshot!(output.trim_end(), @r"
export enum Code {
    First = 1,
    Second,
}
");
}

#[test]
fn test_declined_run_leaves_destination_unchanged() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("shared_types.rs");
    let destination = temp.path().join("shared-types.ts");
    fs::write(&source, FIXTURE_RS).unwrap();
    fs::write(&destination, b"// hand edited\r\n").unwrap();

    let orchestrator = Orchestrator::new(SyncConfig::new(&source, &destination));
    orchestrator.run(&mut |_: &Preview| false).unwrap();

    assert_eq!(fs::read(&destination).unwrap(), b"// hand edited\r\n");
}

#[test]
fn test_missing_destination_parent_fails_after_confirm() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("shared_types.rs");
    let destination = temp.path().join("frontend").join("shared-types.ts");
    fs::write(&source, FIXTURE_RS).unwrap();

    let orchestrator = Orchestrator::new(SyncConfig::new(&source, &destination));
    let err = orchestrator.run(&mut |_: &Preview| true).unwrap_err();

    assert!(format!("{err:#}").contains("shared-types.ts"));
    assert!(!destination.exists());
}
