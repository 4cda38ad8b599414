// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pairs levels`

use crate::output::{self, OutputFormat};
use clap::Args;
use pairs_core::{GameConfig, LevelDefinition};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct LevelsArgs {
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct LevelRow {
    pub difficulty: usize,
    #[serde(flatten)]
    pub level: LevelDefinition,
}

impl fmt::Display for LevelRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = &self.level;
        write!(
            f,
            "{:<3} {:>2}x{:<2} {:>3} matches {:>3} moves {:>5}s",
            self.difficulty,
            level.grid_width,
            level.grid_height,
            level.required_matches,
            level.move_budget,
            level.time_budget.as_secs_f64()
        )
    }
}

pub fn handle(config: &GameConfig, args: LevelsArgs) -> anyhow::Result<()> {
    let rows: Vec<LevelRow> = config
        .levels
        .iter()
        .enumerate()
        .map(|(difficulty, level)| LevelRow {
            difficulty,
            level: level.clone(),
        })
        .collect();
    output::print_list(&rows, args.format);
    Ok(())
}
