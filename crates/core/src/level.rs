// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Level definitions, indexed by difficulty

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable configuration for one difficulty tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Matches needed to win
    pub required_matches: u32,
    /// Completed pair comparisons allowed
    pub move_budget: u32,
    #[serde(with = "humantime_serde")]
    pub time_budget: Duration,
}

impl LevelDefinition {
    pub fn new(
        grid_width: usize,
        grid_height: usize,
        required_matches: u32,
        move_budget: u32,
        time_budget: Duration,
    ) -> Self {
        Self {
            grid_width,
            grid_height,
            required_matches,
            move_budget,
            time_budget,
        }
    }

    /// Square level that must be fully cleared
    pub fn square(side: usize, move_budget: u32, time_budget: Duration) -> Self {
        let pairs = (side * side / 2) as u32;
        Self::new(side, side, pairs, move_budget, time_budget)
    }

    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }

    pub fn pair_count(&self) -> usize {
        self.cell_count() / 2
    }
}

/// Ordered level definitions; index = difficulty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelTable {
    levels: Vec<LevelDefinition>,
}

impl LevelTable {
    pub fn new(levels: Vec<LevelDefinition>) -> Self {
        Self { levels }
    }

    pub fn get(&self, difficulty: usize) -> Option<&LevelDefinition> {
        self.levels.get(difficulty)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDefinition> {
        self.levels.iter()
    }

    /// Largest number of distinct keys any level needs
    pub fn max_pairs(&self) -> usize {
        self.levels
            .iter()
            .map(LevelDefinition::pair_count)
            .max()
            .unwrap_or(0)
    }
}

impl Default for LevelDefinition {
    fn default() -> Self {
        Self::square(2, 4, Duration::from_secs(10))
    }
}

impl From<Vec<LevelDefinition>> for LevelTable {
    fn from(levels: Vec<LevelDefinition>) -> Self {
        Self::new(levels)
    }
}
