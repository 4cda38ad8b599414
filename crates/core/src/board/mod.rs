// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Board generation and piece storage
//!
//! - `Catalog` - externally supplied matching keys and their visual content
//! - `PiecePool` - arena owning every piece across sessions
//! - `BoardGenerator` - builds shuffled, perfectly paired boards from the pool

mod catalog;
mod generator;
mod piece;
mod pool;

pub use catalog::{Catalog, CatalogEntry};
pub use generator::{check_grid, Board, BoardGenerator};
pub use piece::{MatchKey, Piece, PieceId, Position};
pub use pool::PiecePool;

use thiserror::Error;

/// Configuration errors raised while building a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("grid {width}x{height} has an odd number of cells")]
    OddCellCount { width: usize, height: usize },
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("catalog has {available} distinct keys, board needs {required}")]
    CatalogTooSmall { required: usize, available: usize },
}
