// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Final score recording
//!
//! `ScoreRecorder` follows sessions on the bus and hands each finished
//! session's result to a `ScoreSink`. Quitting drops the unfinished record.

use crate::effect::{Event, EventKind};
use crate::events::{EventBus, HandlerError, HandlerResult, SubscriberId};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

const RECORDER: &str = "score-recorder";

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("score rejected: {0}")]
    Rejected(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of one finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_name: String,
    pub difficulty: usize,
    pub score: u32,
    pub did_win: bool,
    pub moves_left: u32,
    #[serde(with = "humantime_serde")]
    pub time_remaining: Duration,
}

/// Adapter trait for score persistence
pub trait ScoreSink {
    fn save(&self, score: &PlayerScore) -> Result<(), SinkError>;
}

/// In-process leaderboard
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreSink {
    scores: Rc<RefCell<Vec<PlayerScore>>>,
}

impl MemoryScoreSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every saved score, in save order
    pub fn all(&self) -> Vec<PlayerScore> {
        self.scores.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.scores.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.borrow().is_empty()
    }

    /// Best `n` scores, highest first; ties keep save order
    pub fn top(&self, n: usize) -> Vec<PlayerScore> {
        let mut scores = self.all();
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores.truncate(n);
        scores
    }
}

impl ScoreSink for MemoryScoreSink {
    fn save(&self, score: &PlayerScore) -> Result<(), SinkError> {
        self.scores.borrow_mut().push(score.clone());
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Pending {
    player_name: String,
    difficulty: usize,
}

/// Records finished sessions into a sink while attached to a bus
pub struct ScoreRecorder {
    bus: EventBus,
}

impl ScoreRecorder {
    pub fn attach(bus: &EventBus, sink: impl ScoreSink + 'static) -> Self {
        let pending: Rc<RefCell<Option<Pending>>> = Rc::new(RefCell::new(None));
        let sink = Rc::new(sink);

        let open = Rc::clone(&pending);
        bus.subscribe(EventKind::SessionStart, RECORDER, move |event| {
            if let Event::SessionStart {
                difficulty,
                player_name,
            } = event
            {
                *open.borrow_mut() = Some(Pending {
                    player_name: player_name.clone(),
                    difficulty: *difficulty,
                });
            }
            Ok(())
        });

        let dropped = Rc::clone(&pending);
        bus.subscribe(EventKind::SessionQuit, RECORDER, move |_| {
            if let Some(p) = dropped.borrow_mut().take() {
                tracing::debug!(player = %p.player_name, "unfinished score dropped");
            }
            Ok(())
        });

        let finish = Rc::clone(&pending);
        bus.subscribe(EventKind::SessionEnded, RECORDER, move |event| {
            finalize(&finish, sink.as_ref(), event)
        });

        Self { bus: bus.clone() }
    }
}

fn finalize(
    pending: &RefCell<Option<Pending>>,
    sink: &dyn ScoreSink,
    event: &Event,
) -> HandlerResult {
    let Event::SessionEnded {
        final_score,
        time_remaining,
        moves_left,
        did_win,
    } = event
    else {
        return Ok(());
    };
    let Some(open) = pending.borrow_mut().take() else {
        return Err(HandlerError::other("session ended without a recorded start"));
    };

    let score = PlayerScore {
        player_name: open.player_name,
        difficulty: open.difficulty,
        score: *final_score,
        did_win: *did_win,
        moves_left: *moves_left,
        time_remaining: *time_remaining,
    };
    sink.save(&score).map_err(HandlerError::new)?;
    tracing::info!(player = %score.player_name, score = score.score, "score recorded");
    Ok(())
}

impl Drop for ScoreRecorder {
    fn drop(&mut self) {
        let id = SubscriberId::new(RECORDER);
        for kind in [
            EventKind::SessionStart,
            EventKind::SessionQuit,
            EventKind::SessionEnded,
        ] {
            self.bus.unsubscribe(kind, &id);
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
