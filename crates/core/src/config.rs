// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Game configuration
//!
//! Levels and the piece catalog, loaded from TOML:
//!
//! ```toml
//! [[level]]
//! grid_width = 2
//! grid_height = 2
//! required_matches = 2
//! move_budget = 4
//! time_budget = "10s"
//!
//! [[catalog]]
//! key = "fox"
//! content = "F"
//! ```
//!
//! A missing `level` or `catalog` section falls back to the built-in one.

use crate::board::{check_grid, BoardGenerator, Catalog, CatalogEntry};
use crate::level::{LevelDefinition, LevelTable};
use crate::session::SessionMachine;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Levels plus the catalog their boards draw keys from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(rename = "level", default = "default_levels")]
    pub levels: LevelTable,
    #[serde(default = "default_catalog")]
    pub catalog: Vec<CatalogEntry>,
}

impl GameConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), levels = config.levels.len(), "config loaded");
        Ok(config)
    }

    /// Check every level can be played with this catalog
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::Invalid("no levels defined".to_string()));
        }
        let catalog = self.catalog();
        for (difficulty, level) in self.levels.iter().enumerate() {
            let pairs = check_grid(&catalog, level.grid_width, level.grid_height)
                .map_err(|e| ConfigError::Invalid(format!("level {difficulty}: {e}")))?;
            if level.required_matches == 0 {
                return Err(ConfigError::Invalid(format!(
                    "level {difficulty}: required matches is zero"
                )));
            }
            if level.required_matches as usize > pairs {
                return Err(ConfigError::Invalid(format!(
                    "level {difficulty}: needs {} matches but has {pairs} pairs",
                    level.required_matches
                )));
            }
            if level.move_budget == 0 {
                return Err(ConfigError::Invalid(format!(
                    "level {difficulty}: move budget is zero"
                )));
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.catalog.clone())
    }

    /// Session machine over this configuration; `seed` makes boards reproducible
    pub fn machine(&self, seed: Option<u64>) -> SessionMachine {
        let generator = match seed {
            Some(seed) => BoardGenerator::with_seed(self.catalog(), seed),
            None => BoardGenerator::new(self.catalog()),
        };
        SessionMachine::new(self.levels.clone(), generator)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            catalog: default_catalog(),
        }
    }
}

fn default_levels() -> LevelTable {
    let level = |w, h, required, moves, secs| {
        LevelDefinition::new(w, h, required, moves, Duration::from_secs(secs))
    };
    LevelTable::new(vec![
        level(2, 2, 2, 4, 10),
        level(4, 3, 6, 12, 45),
        level(4, 4, 8, 16, 60),
        level(5, 4, 10, 20, 75),
        level(6, 6, 18, 36, 150),
    ])
}

const DEFAULT_KEYS: [&str; 24] = [
    "ant", "bee", "cat", "dog", "eel", "fox", "gnu", "hen", "ibis", "jay", "kiwi", "lynx",
    "mole", "newt", "owl", "pig", "quail", "rat", "seal", "toad", "urchin", "vole", "wolf", "yak",
];

fn default_catalog() -> Vec<CatalogEntry> {
    DEFAULT_KEYS
        .iter()
        .zip('A'..='Z')
        .map(|(key, glyph)| CatalogEntry::new(*key, glyph.to_string()))
        .collect()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
