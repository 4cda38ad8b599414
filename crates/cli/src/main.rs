// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! pairs - terminal driver for memory-matching sessions

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{board, levels, play};
use pairs_core::GameConfig;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pairs", version, about = "Memory-matching puzzle sessions")]
struct Cli {
    /// Game configuration file (TOML); built-in levels when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the configured levels
    Levels(levels::LevelsArgs),
    /// Print a generated board
    Board(board::BoardArgs),
    /// Play a session, reading moves from stdin
    Play(play::PlayArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Levels(args) => levels::handle(&config, args),
        Commands::Board(args) => board::handle(&config, args),
        Commands::Play(args) => play::handle(&config, args).await,
    }
}

/// Logs go to stderr so stdout stays parseable; `RUST_LOG` overrides the level
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path).map_err(|e| {
            anyhow::Error::new(
                error::PairsError::new(format!("cannot use config {}", path.display()))
                    .with_context(e.to_string())
                    .with_suggestion("Compare with the built-in levels: pairs levels"),
            )
        }),
        None => Ok(GameConfig::default()),
    }
}
