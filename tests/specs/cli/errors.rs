//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_difficulty_fails_with_suggestions() {
    pairs()
        .args(&["board", "--difficulty", "42"])
        .fails()
        .code(1)
        .stderr_has("cannot start difficulty 42")
        .stderr_has("unknown difficulty 42")
        .stderr_has("pairs levels");
}

#[test]
fn play_rejects_unknown_difficulty_before_reading_input() {
    pairs()
        .args(&["play", "--difficulty", "9"])
        .stdin("0 0\n")
        .fails()
        .stderr_has("cannot start difficulty 9");
}

#[test]
fn missing_config_file_fails() {
    let project = Project::empty();
    project
        .pairs()
        .args(&["--config", "absent.toml", "levels"])
        .fails()
        .stderr_has("cannot use config absent.toml")
        .stderr_has("failed to read config");
}

#[test]
fn invalid_config_is_rejected() {
    let project = Project::empty();
    project.file(
        "odd.toml",
        "[[level]]\ngrid_width = 3\ngrid_height = 3\nrequired_matches = 1\nmove_budget = 2\ntime_budget = \"5s\"\n",
    );
    project
        .pairs()
        .args(&["--config", "odd.toml", "levels"])
        .fails()
        .stderr_has("odd number of cells");
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    pairs().fails().code(2);
}
