// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pairs play`: one interactive session
//!
//! The timer is driven by a fixed-step interval while stdin is read
//! concurrently. Input lines:
//!
//! - `R C` select the cell at row R, column C
//! - `pause` / `resume`
//! - `board` print the board again
//! - `quit` (or end of input)

use super::board::BoardView;
use crate::error::PairsError;
use crate::output::{self, OutputFormat};
use anyhow::Context;
use clap::Args;
use pairs_core::{
    Engine, Event, EventBus, EventLog, GameConfig, HandlerError, MemoryScoreSink, PlayerScore,
    Position, ScoreRecorder, Session, SessionState,
};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Args)]
pub struct PlayArgs {
    /// Level to play
    #[arg(long, short)]
    pub difficulty: usize,
    #[arg(long, default_value = "player")]
    pub player: String,
    /// Shuffle seed for a reproducible layout
    #[arg(long)]
    pub seed: Option<u64>,
    /// Length of one timer step in milliseconds
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,
    /// Append every event to this JSON-lines journal
    #[arg(long)]
    pub journal: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(Position),
    Pause,
    Resume,
    Show,
    Quit,
    Blank,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Command::Blank,
            ["pause"] => Command::Pause,
            ["resume"] => Command::Resume,
            ["board"] => Command::Show,
            ["quit"] | ["q"] => Command::Quit,
            [row, column] => match (row.parse(), column.parse()) {
                (Ok(row), Ok(column)) => Command::Select(Position::new(row, column)),
                _ => Command::Unknown(line.trim().to_string()),
            },
            _ => Command::Unknown(line.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Won,
    Lost,
    Quit,
}

/// Final line of a `play` run
#[derive(Debug, Serialize)]
pub struct Summary {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub player: String,
    pub outcome: Outcome,
    pub score: u32,
    pub moves_left: u32,
    pub time_remaining: f64,
}

impl Summary {
    fn finished(score: &PlayerScore) -> Self {
        Self {
            kind: "summary",
            player: score.player_name.clone(),
            outcome: if score.did_win {
                Outcome::Won
            } else {
                Outcome::Lost
            },
            score: score.score,
            moves_left: score.moves_left,
            time_remaining: score.time_remaining.as_secs_f64(),
        }
    }

    fn abandoned(player: &str, session: Option<&Session>) -> Self {
        Self {
            kind: "summary",
            player: player.to_string(),
            outcome: Outcome::Quit,
            score: session.map_or(0, |s| s.score),
            moves_left: session.map_or(0, Session::moves_remaining),
            time_remaining: session.map_or(0.0, |s| s.time_remaining.as_secs_f64()),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.outcome {
            Outcome::Won => "won",
            Outcome::Lost => "lost",
            Outcome::Quit => "quit",
        };
        write!(
            f,
            "{} {}: score {}, {} moves left, {:.1}s remaining",
            self.player, verb, self.score, self.moves_left, self.time_remaining
        )
    }
}

/// Text rendering of an event; `None` for events not worth a line
pub fn describe(event: &Event) -> Option<String> {
    match event {
        Event::SessionStart {
            difficulty,
            player_name,
        } => Some(format!("{player_name} starts difficulty {difficulty}")),
        Event::TimerStarted { budget } => Some(format!("time: {}s", budget.as_secs_f64())),
        Event::MovesChanged { moves_remaining } => Some(format!("moves left: {moves_remaining}")),
        Event::ScoreChanged { score, delta } => Some(format!("match! +{delta} (score {score})")),
        Event::PairMismatched { .. } => Some("no match".to_string()),
        Event::PauseToggled { paused: true } => Some("paused".to_string()),
        Event::PauseToggled { paused: false } => Some("resumed".to_string()),
        Event::TimerTick { remaining } if remaining.is_zero() => Some("time is up".to_string()),
        _ => None,
    }
}

fn attach_printer(bus: &EventBus, format: OutputFormat) {
    let announced = Cell::new(u64::MAX);
    bus.observe("printer", move |event| {
        match format {
            OutputFormat::Json => output::print_line(event),
            OutputFormat::Text => {
                if let Event::TimerTick { remaining } = event {
                    // once per whole second
                    let secs = remaining.as_secs_f64().ceil() as u64;
                    if secs != announced.replace(secs) && secs > 0 {
                        println!("{secs}s left");
                    }
                }
                if let Some(line) = describe(event) {
                    println!("{line}");
                }
            }
        }
        Ok(())
    });
}

fn attach_journal(bus: &EventBus, path: PathBuf) -> anyhow::Result<()> {
    let log = EventLog::open(path.clone())
        .with_context(|| format!("cannot open journal {}", path.display()))?;
    let log = RefCell::new(log);
    bus.observe("journal", move |event| {
        log.borrow_mut()
            .append(event)
            .map(|_| ())
            .map_err(HandlerError::new)
    });
    Ok(())
}

fn show_board(engine: &Engine, format: OutputFormat) {
    if format == OutputFormat::Text {
        if let Some(view) = engine.with_machine(|m| BoardView::of(m, false)) {
            println!("{view}");
        }
    }
}

/// Apply one input line; returns false once the player has quit
fn apply(engine: &Engine, command: Command, format: OutputFormat) -> bool {
    match command {
        Command::Select(position) => {
            let target = engine.with_machine(|m| m.session().and_then(|s| s.board.at(position)));
            match target {
                Some(piece) => {
                    engine.select(piece);
                    show_board(engine, format);
                }
                None => eprintln!("no cell at {position}"),
            }
        }
        Command::Pause => engine.pause(true),
        Command::Resume => engine.pause(false),
        Command::Show => show_board(engine, format),
        Command::Quit => return false,
        Command::Blank => {}
        Command::Unknown(line) => eprintln!("unrecognized input: {line}"),
    }
    true
}

/// Fixed-step interval whose first tick is one step away
fn countdown(step: Duration) -> tokio::time::Interval {
    tokio::time::interval_at(tokio::time::Instant::now() + step, step)
}

pub async fn handle(config: &GameConfig, args: PlayArgs) -> anyhow::Result<()> {
    let bus = EventBus::new();
    let engine = Engine::new(bus.clone(), config.machine(args.seed));
    let scores = MemoryScoreSink::new();
    let _recorder = ScoreRecorder::attach(&bus, scores.clone());

    if let Some(path) = args.journal.clone() {
        attach_journal(&bus, path)?;
    }
    attach_printer(&bus, args.format);

    engine
        .start(args.difficulty, &args.player)
        .map_err(|e| PairsError::cannot_start(args.difficulty, &config.levels, &e))?;
    show_board(&engine, args.format);

    let step = Duration::from_millis(args.tick_ms.max(1));
    let mut interval = countdown(step);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut abandoned = None;

    while engine.state() == SessionState::Active {
        tokio::select! {
            _ = interval.tick() => engine.tick(step),
            line = lines.next_line() => {
                let keep_playing = match line.context("failed to read input")? {
                    Some(line) => apply(&engine, Command::parse(&line), args.format),
                    None => false,
                };
                if !keep_playing {
                    abandoned = Some(engine.session());
                    engine.quit();
                }
            }
        }
    }

    let summary = match (abandoned, scores.all().last()) {
        (None, Some(score)) => Summary::finished(score),
        (Some(session), _) => Summary::abandoned(&args.player, session.as_ref()),
        (None, None) => Summary::abandoned(&args.player, None),
    };
    match args.format {
        OutputFormat::Json => output::print_line(&summary),
        OutputFormat::Text => println!("{summary}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod tests;
