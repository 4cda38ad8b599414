//! `pairs play` specs
//!
//! Sessions use long time budgets and a seed so outcomes depend only on
//! the input lines.

use crate::prelude::*;

fn board_for(seed: &str) -> serde_json::Value {
    pairs()
        .args(&[
            "board",
            "--difficulty",
            "1",
            "--seed",
            seed,
            "--format",
            "json",
        ])
        .passes()
        .json()
}

#[test]
fn quit_abandons_session() {
    pairs()
        .args(&["play", "--difficulty", "0", "--player", "ada"])
        .stdin("quit\n")
        .passes()
        .stdout_has("ada starts difficulty 0")
        .stdout_has("ada quit: score 0");
}

#[test]
fn end_of_input_abandons_session() {
    pairs()
        .args(&["play", "--difficulty", "0", "--player", "ada"])
        .stdin("")
        .passes()
        .stdout_has("ada quit");
}

#[test]
fn matching_every_pair_wins() {
    let board = board_for("5");
    let moves = winning_moves(&board);

    pairs()
        .args(&[
            "play",
            "--difficulty",
            "1",
            "--seed",
            "5",
            "--player",
            "ada",
        ])
        .stdin(&moves)
        .passes()
        .stdout_has("match! +")
        .stdout_has("moves left: 6")
        .stdout_has("ada won: score")
        .stdout_has("6 moves left");
}

#[test]
fn json_stream_ends_with_summary() {
    let board = board_for("8");
    let moves = winning_moves(&board);

    let run = pairs()
        .args(&[
            "play",
            "--difficulty",
            "1",
            "--seed",
            "8",
            "--format",
            "json",
        ])
        .stdin(&moves)
        .passes();
    let lines = run.json_lines();

    assert_eq!(lines[0]["type"], "session_start");
    let ended = lines
        .iter()
        .find(|l| l["type"] == "session_ended")
        .unwrap();
    assert_eq!(ended["did_win"], true);
    assert_eq!(ended["moves_left"], 6);

    let summary = lines.last().unwrap();
    assert_eq!(summary["type"], "summary");
    assert_eq!(summary["outcome"], "won");
    assert_eq!(summary["score"], ended["final_score"]);
}

#[test]
fn mismatch_then_quit_keeps_counters() {
    let board = board_for("5");
    let rows = board["rows"].as_array().unwrap();
    let first = &rows[0][0];
    // find a cell with a different key
    let other = rows
        .iter()
        .flat_map(|r| r.as_array().unwrap())
        .find(|c| c["key"] != first["key"])
        .unwrap();
    let input = format!(
        "0 0\n{} {}\nquit\n",
        other["row"], other["column"]
    );

    pairs()
        .args(&["play", "--difficulty", "1", "--seed", "5", "--player", "bob"])
        .stdin(&input)
        .passes()
        .stdout_has("no match")
        .stdout_has("moves left: 11")
        .stdout_has("bob quit: score 0, 11 moves left");
}

#[test]
fn pause_blocks_selection() {
    pairs()
        .args(&["play", "--difficulty", "0", "--seed", "1"])
        .stdin("pause\n0 0\n0 1\nresume\nquit\n")
        .passes()
        .stdout_has("paused")
        .stdout_has("resumed")
        .stdout_lacks("moves left: 3")
        .stdout_has("4 moves left");
}

#[test]
fn bad_input_is_reported_and_skipped() {
    pairs()
        .args(&["play", "--difficulty", "0"])
        .stdin("flip\n9 9\nquit\n")
        .passes()
        .stderr_has("unrecognized input: flip")
        .stderr_has("no cell at (9, 9)");
}

#[test]
fn journal_records_every_event() {
    let project = Project::empty();
    project
        .pairs()
        .args(&[
            "play",
            "--difficulty",
            "0",
            "--journal",
            "events.jsonl",
        ])
        .stdin("quit\n")
        .passes();

    let journal = project.read("events.jsonl");
    let names: Vec<String> = journal
        .lines()
        .map(|l| {
            let record: serde_json::Value = serde_json::from_str(l).unwrap();
            record["name"].as_str().unwrap().to_string()
        })
        .filter(|n| n != "timer:tick")
        .collect();
    assert_eq!(
        names,
        vec![
            "session:start",
            "timer:started",
            "moves:changed",
            "session:quit"
        ]
    );
}
