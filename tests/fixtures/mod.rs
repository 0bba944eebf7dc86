//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Bare keyboard artwork: three keys on top, a wide key and a small key below.
pub const EMPTY: [&str; 5] = [
    "+-----+-----+-----+",
    "|     |     |     |",
    "+-----+-----+-----+",
    "|           |     |",
    "+-----------+-----+",
];

/// Key indices; key 3 is drawn as two regions.
pub const TEMPLATE: [&str; 5] = [
    "+-----+-----+-----+",
    "| 000 | 001 | 002 |",
    "+-----+-----+-----+",
    "| 003   003 | 004 |",
    "+-----------+-----+",
];

/// Base layer; "Space" is split across key 3's two regions.
pub const BASE: [&str; 5] = [
    "+-----+-----+-----+",
    "|  q  |  w  |  e  |",
    "+-----+-----+-----+",
    "| Spa   ce  | Ent |",
    "+-----------+-----+",
];

/// Number layer.
pub const NUM: [&str; 5] = [
    "+-----+-----+-----+",
    "|  1  |  2  |  3  |",
    "+-----+-----+-----+",
    "| Spa   ce  | Bsp |",
    "+-----------+-----+",
];

/// Default keymap.json document for the fixture drawings.
///
/// `number_of_keys` is 6 so key 5 is never drawn and stays transparent.
pub fn keymap_json() -> Value {
    json!({
        "number_of_keys": 6,
        "symbol_to_keycode": {
            "q": "KC_Q",
            "w": "KC_W",
            "e": "KC_E",
            "Space": "KC_SPC",
            "Ent": "KC_ENT",
            "1": "KC_1",
            "2": "KC_2",
            "3": "KC_3",
            "Bsp": "KC_BSPC"
        },
        "layer.empty": { "name": "EMPTY", "layer": "empty.txt" },
        "layer.template": { "name": "TEMPLATE", "layer": "template.txt" },
        "layers": [
            { "name": "BASE", "layer": "base.txt" },
            { "name": "NUM", "layer": "num.txt" }
        ],
        "keymap.c.pre": [
            "#include QMK_KEYBOARD_H",
            "#include \"layers.h\"",
            "",
            "const uint16_t PROGMEM keymaps[][MATRIX_ROWS][MATRIX_COLS] = {"
        ],
        "keymap.c.layer": [
            "    [${LAYER_NAME}] = LAYOUT(",
            "        ____000____, ____001____, ____002____,",
            "        ____003____, ____004____, ____005____",
            "    ),"
        ],
        "keymap.c.post": ["};"],
        "layers.h.pre": ["#pragma once", "", "enum layers {"],
        "layers.h.post": ["};"]
    })
}

/// Writes drawing lines to `dir/name`, one per line.
pub fn write_drawing(dir: &Path, name: &str, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(dir.join(name), content).expect("Failed to write drawing");
}

/// Writes a keymap.json document to `dir`.
pub fn write_keymap_json(dir: &Path, document: &Value) {
    let text = serde_json::to_string_pretty(document).expect("Failed to serialize keymap.json");
    fs::write(dir.join("keymap.json"), text).expect("Failed to write keymap.json");
}

/// Creates a temp input folder holding the complete fixture.
pub fn temp_keymap_dir() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    write_keymap_json(dir, &keymap_json());
    write_drawing(dir, "empty.txt", &EMPTY);
    write_drawing(dir, "template.txt", &TEMPLATE);
    write_drawing(dir, "base.txt", &BASE);
    write_drawing(dir, "num.txt", &NUM);
    temp_dir
}

/// Creates a fresh output folder path (not yet existing) inside `temp_dir`.
pub fn output_dir(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("out")
}

/// Expected `keymap.c` for the unmodified fixture.
pub fn expected_keymap_c() -> String {
    [
        "#include QMK_KEYBOARD_H",
        "#include \"layers.h\"",
        "",
        "const uint16_t PROGMEM keymaps[][MATRIX_ROWS][MATRIX_COLS] = {",
        "    [BASE] = LAYOUT(",
        "               KC_Q,        KC_W,        KC_E,",
        "             KC_SPC,      KC_ENT,    KC_TRANS",
        "    ),",
        "    [NUM] = LAYOUT(",
        "               KC_1,        KC_2,        KC_3,",
        "             KC_SPC,     KC_BSPC,    KC_TRANS",
        "    ),",
        "};",
        "",
    ]
    .join("\n")
}

/// Expected `layers.h` for the unmodified fixture.
pub fn expected_layers_h() -> String {
    "#pragma once\n\nenum layers {\n    BASE = 0,\n    NUM = 1,\n};\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_drawings_share_width() {
        for drawing in [&EMPTY, &TEMPLATE, &BASE, &NUM] {
            for (row, line) in drawing.iter().enumerate() {
                assert_eq!(line.chars().count(), EMPTY[row].chars().count());
            }
        }
    }

    #[test]
    fn test_fixture_dir_has_all_files() {
        let temp_dir = temp_keymap_dir();
        for name in ["keymap.json", "empty.txt", "template.txt", "base.txt", "num.txt"] {
            assert!(temp_dir.path().join(name).exists(), "{name} missing");
        }
    }
}
