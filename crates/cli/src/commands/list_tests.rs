// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

use std::io::Write;

use super::*;

fn write_file(dir: &std::path::Path, name: &str, source: &str) {
    let mut file = std::fs::File::create(dir.join(name)).unwrap();
    file.write_all(source.as_bytes()).unwrap();
}

#[test]
fn finds_xml_files_recursively_and_ignores_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.xml", "(workspace (var0 uint 0)) (procedure (sequence (message \"hi\")))");
    write_file(dir.path(), "notes.txt", "not a procedure");
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();
    write_file(&nested, "b.xml", "(workspace (var0 uint 1)) (procedure (sequence))");

    let files = find_procedure_files(dir.path()).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|p| p.extension().unwrap() == "xml"));
}

#[test]
fn summarizes_a_valid_procedure() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "a.xml",
        "(workspace (var0 uint 0) (var1 uint 0)) (procedure (sequence (message \"hi\") (copy var0 var1)))",
    );

    let summary = summarize(&dir.path().join("a.xml"));
    assert!(summary.parse_error.is_none());
    assert_eq!(summary.variable_count, 2);
    assert_eq!(summary.instruction_count, 3); // sequence + message + copy
}

#[test]
fn reports_a_parse_error_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "broken.xml", "(workspace (var0 uint 0)) (procedure");

    let summary = summarize(&dir.path().join("broken.xml"));
    assert!(summary.parse_error.is_some());
}

#[test]
fn handle_reports_empty_directory_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = handle(dir.path(), OutputFormat::Text);
    assert!(result.is_ok());
}
