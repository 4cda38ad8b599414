#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! pairs-core: session engine for memory-matching puzzles
//!
//! This crate provides:
//! - A synchronous, re-entrant event bus and a JSON-lines event journal
//! - Board generation over a recycled piece pool
//! - A fixed-step countdown timer
//! - A pure session state machine returning effects, and the engine that
//!   wires it to the bus

pub mod board;
pub mod config;
pub mod effect;
pub mod engine;
pub mod events;
pub mod level;
pub mod record;
pub mod scoring;
pub mod session;
pub mod timer;

// Re-exports
pub use board::{
    Board, BoardError, BoardGenerator, Catalog, CatalogEntry, MatchKey, Piece, PieceId, PiecePool,
    Position,
};
pub use config::{ConfigError, GameConfig};
pub use effect::{Effect, Event, EventKind};
pub use engine::Engine;
pub use events::{EventBus, EventLog, EventRecord, HandlerError, JournalError, SubscriberId};
pub use level::{LevelDefinition, LevelTable};
pub use record::{MemoryScoreSink, PlayerScore, ScoreRecorder, ScoreSink, SinkError};
pub use scoring::{FlatScoring, MatchContext, ScoringPolicy, WeightedScoring};
pub use session::{Session, SessionError, SessionMachine, SessionState};
pub use timer::{Timer, TimerState};
