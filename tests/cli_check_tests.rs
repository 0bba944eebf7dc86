//! End-to-end tests for `asciimap check` and `asciimap scan` commands.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the asciimap binary
fn asciimap_bin() -> &'static str {
    env!("CARGO_BIN_EXE_asciimap")
}

#[test]
fn test_check_clean_fixture() {
    let input = temp_keymap_dir();

    let output = Command::new(asciimap_bin())
        .args(["check", "-p", input.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All symbols resolved"), "stdout: {stdout}");
    assert!(!input.path().join("keymap.c").exists());
}

#[test]
fn test_check_json_lists_unresolved() {
    let input = temp_keymap_dir();
    let mut document = keymap_json();
    let table = document["symbol_to_keycode"].as_object_mut().unwrap();
    table.remove("Space");
    table.remove("q");
    write_keymap_json(input.path(), &document);

    let output = Command::new(asciimap_bin())
        .args(["check", "--json", "-p", input.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], false);
    assert_eq!(result["layers"], 2);
    assert_eq!(result["keys"], 5);

    // q on BASE, Space on BASE and NUM
    let unresolved = result["unresolved"].as_array().unwrap();
    assert_eq!(unresolved.len(), 3);
    assert_eq!(unresolved[0]["layer"], "BASE");
    assert_eq!(unresolved[0]["key"], 0);
    assert_eq!(unresolved[0]["symbol"], "q");
    assert_eq!(unresolved[2]["layer"], "NUM");
    assert_eq!(unresolved[2]["layer_index"], 1);

    assert_eq!(result["missing_symbols"], serde_json::json!(["Space", "q"]));
}

#[test]
fn test_scan_json_shows_footprints_and_symbols() {
    let input = temp_keymap_dir();

    let output = Command::new(asciimap_bin())
        .args(["scan", "--json", "-p", input.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let footprints = result["footprints"].as_array().unwrap();
    assert_eq!(footprints.len(), 6);
    assert_eq!(
        footprints[3],
        serde_json::json!({ "index": 3, "row": 3, "col_start": 2, "col_end": 5 })
    );
    assert_eq!(
        footprints[4],
        serde_json::json!({ "index": 3, "row": 3, "col_start": 8, "col_end": 11 })
    );

    let base = &result["layers"][0];
    assert_eq!(base["name"], "BASE");
    let keys = base["keys"].as_array().unwrap();
    assert_eq!(keys.len(), 5);
    assert_eq!(keys[3]["symbol"], "Space");
    assert_eq!(keys[3]["resolution"]["state"], "resolved");
    assert_eq!(keys[3]["resolution"]["keycode"], "KC_SPC");
}

#[test]
fn test_scan_text_output() {
    let input = temp_keymap_dir();

    let output = Command::new(asciimap_bin())
        .args(["scan", "-p", input.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Footprints (6):"), "stdout: {stdout}");
    assert!(stdout.contains("Layer NUM:"), "stdout: {stdout}");
    assert!(stdout.contains("Bsp"), "stdout: {stdout}");
}
