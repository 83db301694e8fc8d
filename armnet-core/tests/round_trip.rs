use std::path::PathBuf;

use armnet_core::{format_json, parse, parse_file, write, write_file};
use pretty_assertions::assert_eq;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn write_then_parse_preserves_rules() {
    let first = parse_file(&fixture("fixtures/nsg-rules.json")).expect("initial parse");

    let written = write(&first).expect("write should succeed");
    let second = parse(&written).expect("re-parse should succeed");

    assert_eq!(first, second);
}

#[test]
fn write_file_and_format_json_agree() {
    let rules = parse_file(&fixture("fixtures/nsg-rules.json")).expect("parse");
    let out_dir = tempfile::tempdir().expect("tempdir should be created");
    let out_path = out_dir.path().join("rules.json");

    write_file(&rules, &out_path).expect("write_file should succeed");
    let on_disk = std::fs::read_to_string(&out_path).expect("read back");

    assert_eq!(on_disk.trim_end(), format_json(&rules));
    assert!(!on_disk.contains("null"));
}
