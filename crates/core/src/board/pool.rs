// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Piece pool
//!
//! Pieces are created once and recycled across sessions. A board only holds
//! `PieceId`s into the pool; the pool remains the single owner of piece data.

use super::{Piece, PieceId};

/// Arena of pieces, active (on a board) or idle
#[derive(Debug, Default)]
pub struct PiecePool {
    pieces: Vec<Piece>,
}

impl PiecePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool pre-warmed with `capacity` idle pieces
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pieces: (0..capacity).map(|i| Piece::new(PieceId(i))).collect(),
        }
    }

    /// Check out an idle piece, creating one only when none is idle.
    ///
    /// The returned piece is marked active; the caller initializes it.
    pub fn acquire(&mut self) -> PieceId {
        if let Some(piece) = self.pieces.iter_mut().find(|p| !p.active) {
            piece.active = true;
            return piece.id;
        }

        let id = PieceId(self.pieces.len());
        let mut piece = Piece::new(id);
        piece.active = true;
        self.pieces.push(piece);
        tracing::debug!(%id, total = self.pieces.len(), "pool grew");
        id
    }

    /// Return a piece to the pool. Releasing an idle piece is a no-op.
    pub fn release(&mut self, id: PieceId) {
        if let Some(piece) = self.pieces.get_mut(id.0) {
            piece.active = false;
            piece.revealed = false;
            piece.interactable = false;
        }
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.0)
    }

    /// Total pieces ever created
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.active).count()
    }

    pub fn idle_count(&self) -> usize {
        self.len() - self.active_count()
    }
}
