//! Integration tests for both pipelines.
//!
//! These tests run the checker over real directory trees and the extractor
//! over real markdown files, from disk through to the final text output.

use std::{fs, path::Path};

use codecheck::{
    assembler::assembler::assemble,
    checker::checker::{check_files, check_tree, write_report, CheckConfig, REPORT_HEADER},
    errors::errors::ErrorImpl,
    markdown::markdown::{ExtractConfig, Extractor},
};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn java_tree() -> tempfile::TempDir {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let root = temp.path();

    write(
        root,
        "src/main/java/org/example/UrlParser.java",
        "package org.example;\n\
         \n\
         /** Parses a URL. */\n\
         public class UrlParser {\n\
         \x20 static final int MAX_URL_LENGTH = 2048;\n\
         \x20 String parseURL(String s) { return s; }\n\
         }\n",
    );
    write(
        root,
        "src/main/java/org/example/Clean.java",
        "package org.example;\nclass Clean { int getId() { return 0; } }\n",
    );
    write(
        root,
        "src/main/java/org/example/a/Http.java",
        "class Http {\n  void sendHTTPRequest() {}\n}\n",
    );
    write(root, "src/main/java/org/example/notes.txt", "ignoredHTTPThing\n");

    temp
}

fn config_for(temp: &tempfile::TempDir) -> CheckConfig {
    CheckConfig {
        root: temp.path().join("src/main/java"),
        ..CheckConfig::default()
    }
}

#[test]
fn test_check_tree_finds_violations() {
    let temp = java_tree();
    let report = check_tree(&config_for(&temp)).unwrap();

    assert!(report.is_dodgy());
    assert_eq!(report.files_scanned, 3);

    let found: Vec<(String, usize, Vec<String>)> = report
        .violations
        .iter()
        .map(|v| {
            (
                v.path.file_name().unwrap().to_string_lossy().into_owned(),
                v.line,
                v.acronyms.clone(),
            )
        })
        .collect();

    assert_eq!(
        found,
        vec![
            ("UrlParser.java".to_string(), 6, vec!["URL".to_string()]),
            ("Http.java".to_string(), 2, vec!["HTTP".to_string()]),
        ]
    );
}

#[test]
fn test_check_tree_is_idempotent() {
    let temp = java_tree();
    let config = config_for(&temp);

    let mut first = Vec::new();
    let first_report = check_tree(&config).unwrap();
    write_report(&first_report, &mut first).unwrap();

    let mut second = Vec::new();
    let second_report = check_tree(&config).unwrap();
    write_report(&second_report, &mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
    assert!(String::from_utf8(first).unwrap().starts_with(REPORT_HEADER));
}

#[test]
fn test_clean_tree() {
    let temp = tempfile::tempdir().unwrap();
    write(temp.path(), "src/main/java/A.java", "class A { int MAX_SIZE_3; }\n");

    let report = check_tree(&config_for(&temp)).unwrap();

    assert!(!report.is_dodgy());
    assert_eq!(report.files_scanned, 1);
}

#[test]
fn test_missing_root_is_an_error() {
    let temp = tempfile::tempdir().unwrap();

    let error = check_tree(&config_for(&temp)).unwrap_err();

    assert_eq!(error.get_error_name(), "Walk");
}

#[test]
fn test_line_numbers_restart_per_file() {
    let temp = tempfile::tempdir().unwrap();
    write(temp.path(), "a.java", "\n\n\nint aURL;\n");
    write(temp.path(), "b.java", "int bURL;\n");

    let report = check_files(&[temp.path().join("a.java"), temp.path().join("b.java")]).unwrap();

    assert_eq!(report.violations[0].line, 4);
    assert_eq!(report.violations[1].line, 1);
}

#[test]
fn test_latin1_source_is_still_checked() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("Legacy.java");
    fs::write(&path, b"// M\xfcller\nint getURLx;\n").unwrap();

    let report = check_files(&[path.clone()]).unwrap();

    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].line, 2);
    assert_eq!(report.violations[0].token, "getURLx");
    assert_eq!(report.violations[0].acronyms, vec!["URL"]);
}

#[test]
fn test_check_files_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("Missing.java");

    let error = check_files(&[missing.clone()]).unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::Io { .. }));
    assert_eq!(error.get_path(), Some(missing.as_path()));
}

#[test]
fn test_extract_and_assemble_from_files() {
    let temp = tempfile::tempdir().unwrap();
    write(
        temp.path(),
        "README.md",
        "# Usage\n\n```java\nimport java.util.List;\nimport org.owasp.url.UrlClassifier;\n\npublic class Example {\n  List<String> xs;\n}\n```\n",
    );
    write(
        temp.path(),
        "docs/more.md",
        "More.\n\n```java\nimport java.util.List;\n\nclass Other {}\n```\n",
    );

    let paths = vec![temp.path().join("README.md"), temp.path().join("docs/more.md")];
    let config = ExtractConfig::default();
    let documents = Extractor::new(&config).unwrap().load_all(&paths).unwrap();
    let java = assemble(&documents, &config);

    let readme = temp.path().join("README.md");
    let more = temp.path().join("docs/more.md");
    let expected = format!(
        "package com.example;\n\
         \n\
         import java.util.List;\n\
         import org.owasp.url.UrlClassifier;\n\
         \n\
         class Snippets {{\n\
         \x20 // {}:3\n\
         \n\
         \n\
         \n\
         \x20 static public class Example {{\n\
         \x20   List<String> xs;\n\
         \x20 }}\n\
         \n\
         \x20 // {}:3\n\
         \n\
         \n\
         \x20 static class Other {{}}\n\
         }}\n",
        readme.display(),
        more.display()
    );

    assert_eq!(java, expected);
    assert_eq!(java.matches("import java.util.List;").count(), 1);
}

#[test]
fn test_extract_missing_document() {
    let temp = tempfile::tempdir().unwrap();
    let extractor = Extractor::new(&ExtractConfig::default()).unwrap();

    let error = extractor.load(&temp.path().join("nope.md")).unwrap_err();

    assert_eq!(error.get_error_name(), "Io");
}
