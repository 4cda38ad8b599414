// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing errors with context and suggestions

use pairs_core::{LevelTable, SessionError};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct PairsError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl PairsError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// A session could not be started at `difficulty`
    pub fn cannot_start(difficulty: usize, levels: &LevelTable, cause: &SessionError) -> Self {
        let err = PairsError::new(format!("cannot start difficulty {difficulty}"))
            .with_context(cause.to_string());
        match cause {
            SessionError::UnknownDifficulty { .. } if levels.is_empty() => {
                err.with_suggestion("Add a [[level]] section to the config")
            }
            SessionError::UnknownDifficulty { .. } => err
                .with_suggestion(format!(
                    "Pick a difficulty between 0 and {}",
                    levels.len() - 1
                ))
                .with_suggestion("List levels with: pairs levels"),
            SessionError::Board(_)
            | SessionError::UnreachableGoal { .. }
            | SessionError::NoGoal => {
                err.with_suggestion("Fix the level or catalog in the config")
            }
        }
    }
}

impl fmt::Display for PairsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            write!(f, "\n\nsuggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                write!(f, "\n  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for PairsError {}
