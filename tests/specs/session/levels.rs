//! `pairs levels` specs

use crate::prelude::*;

#[test]
fn lists_builtin_levels() {
    let run = pairs().args(&["levels"]).passes();
    let stdout = run.stdout();
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.lines().next().unwrap().contains("2x2"));
    assert!(stdout.lines().last().unwrap().contains("6x6"));
}

#[test]
fn lists_levels_as_json() {
    let levels = pairs().args(&["levels", "--format", "json"]).passes().json();
    let levels = levels.as_array().unwrap();

    assert_eq!(levels.len(), 5);
    assert_eq!(levels[0]["difficulty"], 0);
    assert_eq!(levels[0]["grid_width"], 2);
    assert_eq!(levels[0]["time_budget"], "10s");
    assert_eq!(levels[4]["required_matches"], 18);
}

#[test]
fn lists_levels_from_config() {
    let project = Project::empty();
    project.file("tiny.toml", TINY_CONFIG);

    project
        .pairs()
        .args(&["--config", "tiny.toml", "levels"])
        .passes()
        .stdout_has("2x2")
        .stdout_has("30s")
        .stdout_lacks("6x6");
}
