//! Binary tests for the tabex CLI

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tabex() -> Command {
    Command::cargo_bin("tabex").unwrap()
}

#[test]
fn test_help_lists_commands() {
    tabex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("formats"));
}

#[test]
fn test_formats_command() {
    tabex()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("csv"))
        .stdout(predicate::str::contains("xls"))
        .stdout(predicate::str::contains("pdf"))
        .stdout(predicate::str::contains("html"));
}

#[test]
fn test_export_csv_appends_extension() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("products");

    tabex()
        .args(["export", "test-data/products.yaml"])
        .arg(&output)
        .args(["--format", "csv", "--title", "Stock Levels"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Export Complete"));

    let content = fs::read_to_string(dir.path().join("products.csv")).unwrap();
    assert!(content.starts_with("# Stock Levels\n"));
    assert!(content.contains("\"Washer, flat\""));
    assert!(content.contains("# Total rows: 4\n"));
}

#[test]
fn test_export_with_config_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("inventory.xls");

    tabex()
        .args(["export", "test-data/products.yaml"])
        .arg(&output)
        .args(["--config", "test-data/export.yaml"])
        .assert()
        .success();

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("<Worksheet ss:Name=\"Inventory Report\">"));
    assert!(xml.contains(">Main warehouse<"));
    // native order: Name before Stock
    let name = xml.find(">Name<").unwrap();
    let stock = xml.find(">Stock<").unwrap();
    assert!(name < stock);
    assert!(!xml.contains(">Supplier<"));
}

#[test]
fn test_export_json_to_printable_report() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("customers.pdf");

    tabex()
        .args(["export", "test-data/customers.json"])
        .arg(&output)
        .args(["--no-header", "--no-footer", "--columns", "Name"])
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("window.print()"));
    assert!(html.contains("<td>O'Brien</td>"));
    assert!(!html.contains("<th>ID</th>"));
}

#[test]
fn test_export_unknown_format_fails() {
    let dir = TempDir::new().unwrap();

    tabex()
        .args(["export", "test-data/products.yaml"])
        .arg(dir.path().join("out"))
        .args(["--format", "docx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported export format"));
}

#[test]
fn test_export_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    tabex()
        .args(["export", "test-data/missing.yaml"])
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
