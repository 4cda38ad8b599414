// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for state machine orchestration

use crate::board::PieceId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Effects are side effects that the session machine requests
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Emit an event for other components to observe
    Emit(Event),
    /// Start the countdown with the given budget
    StartTimer { budget: Duration },
    /// Stop the countdown
    StopTimer,
}

/// Events flowing through the bus.
///
/// Inbound requests (`SessionStart`, `SessionQuit`, `PauseToggled`,
/// `PieceSelected`) are raised by collaborators; the rest are published by
/// the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    // Session requests
    SessionStart {
        difficulty: usize,
        player_name: String,
    },
    SessionQuit,
    PauseToggled {
        paused: bool,
    },
    PieceSelected {
        piece: PieceId,
    },

    // Timer events
    TimerStarted {
        #[serde(with = "seconds")]
        budget: Duration,
    },
    TimerTick {
        #[serde(with = "seconds")]
        remaining: Duration,
    },

    // Progress events
    MovesChanged {
        moves_remaining: u32,
    },
    ScoreChanged {
        score: u32,
        delta: u32,
    },
    /// Both pieces should be flipped face down again
    PairMismatched {
        first: PieceId,
        second: PieceId,
    },
    SessionEnded {
        final_score: u32,
        #[serde(with = "seconds")]
        time_remaining: Duration,
        moves_left: u32,
        did_win: bool,
    },
}

/// Closed set of event categories used as subscription keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    SessionStart,
    SessionQuit,
    PauseToggled,
    PieceSelected,
    TimerStarted,
    TimerTick,
    MovesChanged,
    ScoreChanged,
    PairMismatched,
    SessionEnded,
}

impl EventKind {
    pub const ALL: [EventKind; 10] = [
        EventKind::SessionStart,
        EventKind::SessionQuit,
        EventKind::PauseToggled,
        EventKind::PieceSelected,
        EventKind::TimerStarted,
        EventKind::TimerTick,
        EventKind::MovesChanged,
        EventKind::ScoreChanged,
        EventKind::PairMismatched,
        EventKind::SessionEnded,
    ];

    /// Stable name in "category:action" form
    pub fn name(self) -> &'static str {
        match self {
            EventKind::SessionStart => "session:start",
            EventKind::SessionQuit => "session:quit",
            EventKind::PauseToggled => "session:pause",
            EventKind::PieceSelected => "piece:selected",
            EventKind::TimerStarted => "timer:started",
            EventKind::TimerTick => "timer:tick",
            EventKind::MovesChanged => "moves:changed",
            EventKind::ScoreChanged => "score:changed",
            EventKind::PairMismatched => "pair:mismatched",
            EventKind::SessionEnded => "session:ended",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Event {
    /// Category tag of this event
    pub fn kind(&self) -> EventKind {
        match self {
            Event::SessionStart { .. } => EventKind::SessionStart,
            Event::SessionQuit => EventKind::SessionQuit,
            Event::PauseToggled { .. } => EventKind::PauseToggled,
            Event::PieceSelected { .. } => EventKind::PieceSelected,
            Event::TimerStarted { .. } => EventKind::TimerStarted,
            Event::TimerTick { .. } => EventKind::TimerTick,
            Event::MovesChanged { .. } => EventKind::MovesChanged,
            Event::ScoreChanged { .. } => EventKind::ScoreChanged,
            Event::PairMismatched { .. } => EventKind::PairMismatched,
            Event::SessionEnded { .. } => EventKind::SessionEnded,
        }
    }

    /// Get the event name for logging
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Durations travel as fractional seconds
mod seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
