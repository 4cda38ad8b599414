// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pieces and their identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a piece inside the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece-{}", self.0)
    }
}

/// Opaque key shared by exactly two pieces of a board
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchKey(pub String);

impl MatchKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MatchKey {
    fn from(s: &str) -> Self {
        MatchKey(s.to_string())
    }
}

/// Grid cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One grid cell's interactable piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub key: MatchKey,
    pub position: Position,
    /// Face up: selected and awaiting its partner, or matched
    pub revealed: bool,
    pub interactable: bool,
    /// Checked out of the pool for a board
    pub active: bool,
    /// Board that last checked the piece out
    pub(crate) lease: u64,
}

impl Piece {
    pub(crate) fn new(id: PieceId) -> Self {
        Self {
            id,
            key: MatchKey::default(),
            position: Position::default(),
            revealed: false,
            interactable: false,
            active: false,
            lease: 0,
        }
    }

    /// Prepare the piece for a new board
    pub(crate) fn reset(&mut self, key: MatchKey, position: Position, lease: u64) {
        self.key = key;
        self.lease = lease;
        self.position = position;
        self.revealed = false;
        self.interactable = true;
        self.active = true;
    }

    /// Two pieces match when their keys are equal, whichever pieces they are
    pub fn matches(&self, other: &Piece) -> bool {
        self.key == other.key
    }

    /// Whether a player may currently select the piece
    pub fn is_selectable(&self) -> bool {
        self.active && self.interactable && !self.revealed
    }
}
