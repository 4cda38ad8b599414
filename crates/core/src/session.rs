// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session state machine
//!
//! A session is one play-through of a level: the board, the pending first
//! selection, and the move/match/score counters.
//!
//! ```text
//! Inactive --start--> Active --win/loss--> Ended
//!     ^                  |                   |
//!     +------quit--------+-------quit--------+
//! ```
//!
//! Operations never publish directly. They return the effects to run, and
//! the caller runs them once it no longer borrows the machine, so handlers
//! reacting to those effects may call straight back in.
//!
//! Out-of-order calls (selecting while inactive, quitting twice, ticks after
//! the end) are ignored rather than reported.

use crate::board::{check_grid, Board, BoardError, BoardGenerator, Piece, PieceId};
use crate::effect::{Effect, Event};
use crate::level::{LevelDefinition, LevelTable};
use crate::scoring::{MatchContext, ScoringPolicy, WeightedScoring};
use std::time::Duration;
use thiserror::Error;

/// Lifecycle state of the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Inactive,
    Active,
    Ended,
}

/// Configuration errors that reject a start request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown difficulty {difficulty} ({available} levels defined)")]
    UnknownDifficulty { difficulty: usize, available: usize },
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
    #[error("level needs {required} matches but its board only has {pairs} pairs")]
    UnreachableGoal { required: u32, pairs: usize },
    #[error("level requires no matches, so it is won before any move")]
    NoGoal,
}

/// Run-time aggregate of one play-through
#[derive(Debug, Clone)]
pub struct Session {
    pub player_name: String,
    pub difficulty: usize,
    pub level: LevelDefinition,
    pub board: Board,
    pub first_selection: Option<PieceId>,
    pub moves_made: u32,
    pub matches_made: u32,
    pub score: u32,
    /// Last remaining time announced by the timer
    pub time_remaining: Duration,
    pub paused: bool,
    /// Set once the session has ended
    pub did_win: Option<bool>,
}

impl Session {
    pub fn moves_remaining(&self) -> u32 {
        self.level.move_budget.saturating_sub(self.moves_made)
    }

    pub fn is_won(&self) -> bool {
        self.matches_made >= self.level.required_matches
    }

    fn moves_exhausted(&self) -> bool {
        self.moves_made >= self.level.move_budget
    }
}

/// Owns one session end-to-end
#[derive(Debug)]
pub struct SessionMachine {
    levels: LevelTable,
    generator: BoardGenerator,
    scoring: Box<dyn ScoringPolicy>,
    state: SessionState,
    session: Option<Session>,
}

impl SessionMachine {
    pub fn new(levels: LevelTable, generator: BoardGenerator) -> Self {
        Self {
            levels,
            generator,
            scoring: Box::new(WeightedScoring),
            state: SessionState::Inactive,
            session: None,
        }
    }

    /// Replace the scoring policy
    pub fn with_scoring(mut self, scoring: impl ScoringPolicy + 'static) -> Self {
        self.scoring = Box::new(scoring);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    pub fn generator(&self) -> &BoardGenerator {
        &self.generator
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.generator.pool().get(id)
    }

    /// Pieces of the current board, row-major
    pub fn board_pieces(&self) -> Vec<&Piece> {
        self.session
            .iter()
            .flat_map(|s| s.board.pieces())
            .filter_map(|&id| self.piece(id))
            .collect()
    }

    /// Resolve the level for `difficulty` and check it can be played
    pub fn check_start(&self, difficulty: usize) -> Result<&LevelDefinition, SessionError> {
        let level = self
            .levels
            .get(difficulty)
            .ok_or(SessionError::UnknownDifficulty {
                difficulty,
                available: self.levels.len(),
            })?;
        let pairs = check_grid(self.generator.catalog(), level.grid_width, level.grid_height)?;
        if level.required_matches == 0 {
            return Err(SessionError::NoGoal);
        }
        if level.required_matches as usize > pairs {
            return Err(SessionError::UnreachableGoal {
                required: level.required_matches,
                pairs,
            });
        }
        Ok(level)
    }

    /// Start a session at `difficulty`.
    ///
    /// Everything is validated before any state changes, so a rejected start
    /// leaves the machine as it was. Starting over an existing session
    /// releases its board first.
    pub fn on_start(
        &mut self,
        difficulty: usize,
        player_name: &str,
    ) -> Result<Vec<Effect>, SessionError> {
        let level = self.check_start(difficulty)?.clone();

        if let Some(previous) = self.session.take() {
            tracing::debug!(player = %previous.player_name, "replacing running session");
            self.generator.release(&previous.board);
        }

        let board = self.generator.generate(level.grid_width, level.grid_height)?;
        let budget = level.time_budget;
        let moves = level.move_budget;

        tracing::info!(
            player = player_name,
            difficulty,
            width = level.grid_width,
            height = level.grid_height,
            "session started"
        );

        self.session = Some(Session {
            player_name: player_name.to_string(),
            difficulty,
            level,
            board,
            first_selection: None,
            moves_made: 0,
            matches_made: 0,
            score: 0,
            time_remaining: budget,
            paused: false,
            did_win: None,
        });
        self.state = SessionState::Active;

        Ok(vec![
            Effect::StartTimer { budget },
            Effect::Emit(Event::TimerStarted { budget }),
            Effect::Emit(Event::MovesChanged {
                moves_remaining: moves,
            }),
        ])
    }

    /// Handle a player selecting `id`.
    ///
    /// The first selection of a pair is only recorded. The second completes a
    /// move: matching keys score and stay face up, anything else flips both
    /// pieces back.
    pub fn on_piece_selected(&mut self, id: PieceId) -> Vec<Effect> {
        if self.state != SessionState::Active {
            tracing::debug!(%id, state = ?self.state, "selection ignored: no active session");
            return vec![];
        }
        let Some(session) = self.session.as_mut() else {
            return vec![];
        };
        if !session.board.contains(id) {
            tracing::warn!(%id, "selection ignored: piece is not on the board");
            return vec![];
        }
        let pool = self.generator.pool_mut();
        match pool.get_mut(id) {
            Some(piece) if piece.is_selectable() => piece.revealed = true,
            _ => {
                tracing::debug!(%id, "selection ignored: piece not selectable");
                return vec![];
            }
        }

        let Some(first) = session.first_selection.take() else {
            session.first_selection = Some(id);
            return vec![];
        };

        let is_match = match (pool.get(first), pool.get(id)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        };

        let mut effects = Vec::new();
        if is_match {
            let context = MatchContext {
                moves_remaining: session.moves_remaining(),
                time_remaining: session.time_remaining,
            };
            let delta = self.scoring.match_delta(context);
            session.matches_made += 1;
            session.score = session.score.saturating_add(delta);
            for pid in [first, id] {
                if let Some(piece) = pool.get_mut(pid) {
                    piece.interactable = false;
                }
            }
            tracing::debug!(%first, second = %id, delta, score = session.score, "pair matched");
            effects.push(Effect::Emit(Event::ScoreChanged {
                score: session.score,
                delta,
            }));
        } else {
            for pid in [first, id] {
                if let Some(piece) = pool.get_mut(pid) {
                    piece.revealed = false;
                }
            }
            tracing::debug!(%first, second = %id, "pair mismatched");
            effects.push(Effect::Emit(Event::PairMismatched { first, second: id }));
        }

        session.moves_made += 1;
        effects.push(Effect::Emit(Event::MovesChanged {
            moves_remaining: session.moves_remaining(),
        }));

        if session.is_won() {
            effects.extend(self.end(true));
        } else if session.moves_exhausted() {
            effects.extend(self.end(false));
        }
        effects
    }

    /// Record the time announced by a timer tick
    pub fn on_timer_tick(&mut self, remaining: Duration) -> Vec<Effect> {
        if self.state != SessionState::Active {
            return vec![];
        }
        if let Some(session) = self.session.as_mut() {
            session.time_remaining = remaining;
        }
        if remaining.is_zero() {
            return self.on_timer_zero();
        }
        vec![]
    }

    /// Countdown expired: lose unless the goal is already met
    pub fn on_timer_zero(&mut self) -> Vec<Effect> {
        if self.state != SessionState::Active {
            return vec![];
        }
        let Some(session) = self.session.as_mut() else {
            return vec![];
        };
        session.time_remaining = Duration::ZERO;
        if session.is_won() {
            return vec![];
        }
        tracing::debug!("time expired");
        self.end(false)
    }

    /// Toggle interaction on every face-down piece; counters and the timer
    /// are untouched
    pub fn on_pause(&mut self, paused: bool) {
        if self.state != SessionState::Active {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.paused = paused;
        let pool = self.generator.pool_mut();
        for &id in session.board.pieces() {
            if let Some(piece) = pool.get_mut(id) {
                if !piece.revealed {
                    piece.interactable = !paused;
                }
            }
        }
        tracing::debug!(paused, "pause toggled");
    }

    /// Abandon the session from any state and return its board to the pool.
    ///
    /// Calling this again is a no-op.
    pub fn on_quit(&mut self) -> Vec<Effect> {
        self.state = SessionState::Inactive;
        let Some(session) = self.session.take() else {
            return vec![];
        };
        self.generator.release(&session.board);
        tracing::info!(player = %session.player_name, "session quit");
        vec![Effect::StopTimer]
    }

    fn end(&mut self, did_win: bool) -> Vec<Effect> {
        let Some(session) = self.session.as_mut() else {
            return vec![];
        };
        session.first_selection = None;
        session.did_win = Some(did_win);

        let pool = self.generator.pool_mut();
        for &id in session.board.pieces() {
            if let Some(piece) = pool.get_mut(id) {
                piece.interactable = false;
            }
        }
        self.state = SessionState::Ended;

        tracing::info!(
            player = %session.player_name,
            score = session.score,
            did_win,
            "session ended"
        );

        // timer first, so a handler restarting from the end event keeps its countdown
        vec![
            Effect::StopTimer,
            Effect::Emit(Event::SessionEnded {
                final_score: session.score,
                time_remaining: session.time_remaining,
                moves_left: session.moves_remaining(),
                did_win,
            }),
        ]
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
