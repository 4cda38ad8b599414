// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Board generator
//!
//! A board of `width * height` cells takes `width * height / 2` keys from the
//! catalog, doubles each one, shuffles the resulting multiset (Fisher-Yates)
//! and lays it out row-major.

use super::{BoardError, Catalog, MatchKey, PieceId, PiecePool, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Pieces laid out on a grid, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    lease: u64,
    width: usize,
    height: usize,
    cells: Vec<PieceId>,
}

impl Board {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Piece ids in row-major order
    pub fn pieces(&self) -> &[PieceId] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.cells.len() / 2
    }

    /// Piece at a grid position
    pub fn at(&self, position: Position) -> Option<PieceId> {
        if position.row >= self.height || position.column >= self.width {
            return None;
        }
        self.cells.get(position.row * self.width + position.column).copied()
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.cells.contains(&id)
    }

    pub fn position_of(&self, id: PieceId) -> Option<Position> {
        self.cells
            .iter()
            .position(|&c| c == id)
            .map(|i| Position::new(i / self.width, i % self.width))
    }
}

/// Builds boards from a catalog and recycles their pieces
#[derive(Debug)]
pub struct BoardGenerator {
    catalog: Catalog,
    pool: PiecePool,
    rng: StdRng,
    next_lease: u64,
}

impl BoardGenerator {
    /// Generator seeded from OS entropy
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Generator producing a reproducible sequence of boards
    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Catalog, rng: StdRng) -> Self {
        Self {
            catalog,
            pool: PiecePool::new(),
            rng,
            next_lease: 0,
        }
    }

    /// Replace the pool, e.g. with a pre-warmed one
    pub fn with_pool(mut self, pool: PiecePool) -> Self {
        self.pool = pool;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pool(&self) -> &PiecePool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut PiecePool {
        &mut self.pool
    }

    /// Check that a `width x height` board can be built; returns its pair count
    pub fn validate(&self, width: usize, height: usize) -> Result<usize, BoardError> {
        check_grid(&self.catalog, width, height)
    }

    /// Shuffled key sequence for a board, without touching the pool
    pub fn shuffled_keys(
        &mut self,
        width: usize,
        height: usize,
    ) -> Result<Vec<MatchKey>, BoardError> {
        let pairs = self.validate(width, height)?;
        let selected = self.catalog.select(pairs)?;

        let mut keys: Vec<MatchKey> = selected
            .iter()
            .flat_map(|k| [k.clone(), k.clone()])
            .collect();
        keys.shuffle(&mut self.rng);
        Ok(keys)
    }

    /// Build a board, checking pieces out of the pool.
    ///
    /// Every piece starts hidden and interactable.
    pub fn generate(&mut self, width: usize, height: usize) -> Result<Board, BoardError> {
        let keys = self.shuffled_keys(width, height)?;
        self.next_lease += 1;
        let lease = self.next_lease;

        let mut cells = Vec::with_capacity(keys.len());
        for (index, key) in keys.into_iter().enumerate() {
            let id = self.pool.acquire();
            if let Some(piece) = self.pool.get_mut(id) {
                piece.reset(key, Position::new(index / width, index % width), lease);
            }
            cells.push(id);
        }

        tracing::debug!(width, height, pool = self.pool.len(), "board generated");
        Ok(Board {
            lease,
            width,
            height,
            cells,
        })
    }

    /// Return a board's pieces to the pool.
    ///
    /// Releasing twice is a no-op, even after the pieces were handed to a
    /// newer board.
    pub fn release(&mut self, board: &Board) {
        for &id in board.pieces() {
            let owned = self
                .pool
                .get(id)
                .is_some_and(|p| p.active && p.lease == board.lease);
            if owned {
                self.pool.release(id);
            }
        }
    }
}

/// Check that `catalog` can fill a `width x height` board; returns its pair count
pub fn check_grid(catalog: &Catalog, width: usize, height: usize) -> Result<usize, BoardError> {
    let cells = width * height;
    if cells == 0 {
        return Err(BoardError::EmptyGrid);
    }
    if cells % 2 != 0 {
        return Err(BoardError::OddCellCount { width, height });
    }
    let pairs = cells.div_ceil(2);
    let available = catalog.usable().len();
    if available < pairs {
        return Err(BoardError::CatalogTooSmall {
            required: pairs,
            available,
        });
    }
    Ok(pairs)
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
