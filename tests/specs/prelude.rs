//! Shared helpers for CLI specs.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

pub use predicates::prelude::*;

/// Small config: one 2x2 level and a two-key catalog
pub const TINY_CONFIG: &str = r#"
[[level]]
grid_width = 2
grid_height = 2
required_matches = 2
move_budget = 4
time_budget = "30s"

[[catalog]]
key = "sun"
content = "S"

[[catalog]]
key = "moon"
content = "M"
"#;

/// Scratch directory for config files and journals
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    /// `pairs` running inside this project
    pub fn pairs(&self) -> CliBuilder {
        let mut builder = pairs();
        builder.cmd.current_dir(self.path());
        builder
    }
}

pub struct CliBuilder {
    cmd: Command,
}

/// Path of a freshly built `pairs` binary.
///
/// The spec package does not own the binary, so cargo neither builds it nor
/// exports its path here. It is built once per run into its own target
/// directory, since the running `cargo test` still holds the main one.
pub fn pairs_binary() -> &'static Path {
    static BINARY: OnceLock<PathBuf> = OnceLock::new();
    BINARY.get_or_init(|| {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let target = std::env::var_os("CARGO_TARGET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("target"))
            .join("specs");
        let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
        let status = std::process::Command::new(cargo)
            .current_dir(root)
            .args(["build", "--quiet", "-p", "pairs", "--bin", "pairs", "--target-dir"])
            .arg(&target)
            .status()
            .unwrap();
        assert!(status.success(), "building pairs failed");
        target
            .join("debug")
            .join(format!("pairs{}", std::env::consts::EXE_SUFFIX))
    })
}

/// `pairs` in the test's working directory
pub fn pairs() -> CliBuilder {
    let mut cmd = Command::new(pairs_binary());
    cmd.env_remove("RUST_LOG");
    CliBuilder { cmd }
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().failure())
    }
}

pub struct RunAssert(assert_cmd::assert::Assert);

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stderr).into_owned()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        Self(self.0.stdout(predicate::str::contains(expected)))
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        Self(self.0.stdout(predicate::str::contains(unexpected).not()))
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        Self(self.0.stderr(predicate::str::contains(expected)))
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn code(self, code: i32) -> Self {
        Self(self.0.code(code))
    }

    /// Stdout parsed as one JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }

    /// Stdout parsed as JSON lines
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }
}

/// Input lines selecting every pair of a `board --format json` layout
pub fn winning_moves(board: &serde_json::Value) -> String {
    let cells: Vec<&serde_json::Value> = board["rows"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|row| row.as_array().unwrap())
        .collect();

    let mut done = vec![false; cells.len()];
    let mut input = String::new();
    for i in 0..cells.len() {
        if done[i] {
            continue;
        }
        let j = (i + 1..cells.len())
            .find(|&j| !done[j] && cells[j]["key"] == cells[i]["key"])
            .unwrap();
        done[i] = true;
        done[j] = true;
        for cell in [cells[i], cells[j]] {
            input.push_str(&format!("{} {}\n", cell["row"], cell["column"]));
        }
    }
    input
}
