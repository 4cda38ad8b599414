// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Match scoring policies

use std::fmt::Debug;
use std::time::Duration;

/// Inputs available when a match is scored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchContext {
    /// Move budget minus moves made, before counting this move
    pub moves_remaining: u32,
    pub time_remaining: Duration,
}

/// Decides how many points a match is worth
pub trait ScoringPolicy: Debug {
    fn match_delta(&self, context: MatchContext) -> u32;
}

/// `ceil(moves_remaining * seconds_remaining)`
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedScoring;

impl ScoringPolicy for WeightedScoring {
    fn match_delta(&self, context: MatchContext) -> u32 {
        let raw = f64::from(context.moves_remaining) * context.time_remaining.as_secs_f64();
        // float-to-int `as` saturates
        raw.ceil() as u32
    }
}

/// One point per match
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatScoring;

impl ScoringPolicy for FlatScoring {
    fn match_delta(&self, _context: MatchContext) -> u32 {
        1
    }
}
