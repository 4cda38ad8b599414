//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    pairs()
        .args(&["--help"])
        .passes()
        .stdout_has("levels")
        .stdout_has("board")
        .stdout_has("play");
}

#[test]
fn play_help_lists_input_options() {
    pairs()
        .args(&["play", "--help"])
        .passes()
        .stdout_has("--difficulty")
        .stdout_has("--tick-ms")
        .stdout_has("--journal");
}

#[test]
fn version_flag_prints_version() {
    pairs().args(&["--version"]).passes().stdout_has("pairs");
}

#[test]
fn binary_is_built_for_specs() {
    assert!(pairs_binary().is_file());
    pairs().args(&["--help"]).passes();
}
