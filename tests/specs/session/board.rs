//! `pairs board` specs

use crate::prelude::*;
use std::collections::HashMap;

fn board_json(difficulty: &str, seed: &str) -> serde_json::Value {
    pairs()
        .args(&[
            "board",
            "--difficulty",
            difficulty,
            "--seed",
            seed,
            "--format",
            "json",
        ])
        .passes()
        .json()
}

#[test]
fn every_key_appears_exactly_twice() {
    let board = board_json("4", "7");
    assert_eq!(board["width"], 6);
    assert_eq!(board["height"], 6);

    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in board["rows"].as_array().unwrap() {
        for cell in row.as_array().unwrap() {
            *counts
                .entry(cell["key"].as_str().unwrap().to_string())
                .or_default() += 1;
        }
    }
    assert_eq!(counts.len(), 18);
    assert!(counts.values().all(|&n| n == 2));
}

#[test]
fn same_seed_same_layout() {
    assert_eq!(board_json("2", "99"), board_json("2", "99"));
}

#[test]
fn text_board_has_header_and_rows() {
    let run = pairs()
        .args(&["board", "--difficulty", "1", "--seed", "3"])
        .passes();
    let stdout = run.stdout();
    // header + 3 rows of a 4x3 level
    assert_eq!(stdout.lines().count(), 4);
    assert!(!stdout.contains("--"));
}

#[test]
fn board_uses_configured_catalog() {
    let project = Project::empty();
    project.file("tiny.toml", TINY_CONFIG);

    project
        .pairs()
        .args(&["--config", "tiny.toml", "board", "--difficulty", "0"])
        .passes()
        .stdout_has("sun")
        .stdout_has("moon");
}
