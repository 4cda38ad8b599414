// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pairs board` and the board rendering shared with `pairs play`

use crate::error::PairsError;
use crate::output::{self, OutputFormat};
use clap::Args;
use pairs_core::{GameConfig, Piece, SessionMachine};
use serde::Serialize;
use std::fmt;

const HIDDEN: &str = "--";

#[derive(Args)]
pub struct BoardArgs {
    /// Level to generate
    #[arg(long, short)]
    pub difficulty: usize,
    /// Shuffle seed for a reproducible layout
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct CellView {
    pub row: usize,
    pub column: usize,
    pub key: String,
    pub content: String,
    pub revealed: bool,
}

/// Board layout, row-major
#[derive(Debug, Serialize)]
pub struct BoardView {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Vec<CellView>>,
    /// Show every key, not only revealed ones
    #[serde(skip)]
    pub reveal_all: bool,
}

impl BoardView {
    /// View of the machine's current board
    pub fn of(machine: &SessionMachine, reveal_all: bool) -> Option<Self> {
        let session = machine.session()?;
        let catalog = machine.generator().catalog();
        let width = session.board.width();
        let cells: Vec<CellView> = machine
            .board_pieces()
            .into_iter()
            .map(|piece: &Piece| CellView {
                row: piece.position.row,
                column: piece.position.column,
                key: piece.key.to_string(),
                content: catalog.content(&piece.key).unwrap_or_default().to_string(),
                revealed: piece.revealed,
            })
            .collect();
        let rows = chunk(cells, width);
        Some(Self {
            width,
            height: session.board.height(),
            rows,
            reveal_all,
        })
    }
}

fn chunk(cells: Vec<CellView>, width: usize) -> Vec<Vec<CellView>> {
    let mut rows = Vec::new();
    let mut row = Vec::with_capacity(width);
    for cell in cells {
        row.push(cell);
        if row.len() == width {
            rows.push(std::mem::replace(&mut row, Vec::with_capacity(width)));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |cell: &CellView| -> String {
            if self.reveal_all || cell.revealed {
                cell.key.clone()
            } else {
                HIDDEN.to_string()
            }
        };
        let pad = self
            .rows
            .iter()
            .flatten()
            .map(|c| label(c).len())
            .max()
            .unwrap_or(0);

        write!(f, "   ")?;
        for column in 0..self.width {
            write!(f, " {:<pad$}", column)?;
        }
        for (index, row) in self.rows.iter().enumerate() {
            write!(f, "\n{:<3}", index)?;
            for cell in row {
                write!(f, " {:<pad$}", label(cell))?;
            }
        }
        Ok(())
    }
}

pub fn handle(config: &GameConfig, args: BoardArgs) -> anyhow::Result<()> {
    let mut machine = config.machine(args.seed);
    machine
        .on_start(args.difficulty, "board")
        .map_err(|e| PairsError::cannot_start(args.difficulty, &config.levels, &e))?;

    if let Some(view) = BoardView::of(&machine, true) {
        output::print(&view, args.format);
    }
    Ok(())
}
