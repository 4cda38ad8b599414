// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine wiring the session machine and timer to the event bus
//!
//! The engine listens for `SessionStart`, `SessionQuit`, `PauseToggled` and
//! `TimerTick`. While a session is running it also listens for
//! `PieceSelected`; that listener is added on start and removed on quit.
//!
//! The direct entry points (`start`, `select`, `pause`, `quit`) publish the
//! matching input event, so journals and other observers see every input
//! whichever way it arrived. `tick` drives the timer from a fixed-step
//! scheduler.

mod executor;

pub use executor::Executor;

use crate::board::{Piece, PieceId};
use crate::effect::{Effect, Event, EventKind};
use crate::events::{EventBus, HandlerError, HandlerResult, SubscriberId};
use crate::session::{Session, SessionError, SessionMachine, SessionState};
use crate::timer::{Timer, TimerState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

const ENGINE: &str = "engine";
const SELECTION: &str = "engine:selection";

/// Kinds the engine listens to for its whole lifetime
const INPUTS: [EventKind; 4] = [
    EventKind::SessionStart,
    EventKind::SessionQuit,
    EventKind::PauseToggled,
    EventKind::TimerTick,
];

struct Inner {
    bus: EventBus,
    machine: RefCell<SessionMachine>,
    timer: Timer,
}

impl Inner {
    /// Run machine effects once the machine borrow has been released
    fn run(&self, effects: Vec<Effect>) {
        Executor::new(&self.bus, &self.timer).execute_all(effects);
    }

    fn start(self: &Rc<Self>, difficulty: usize, player_name: &str) -> Result<(), SessionError> {
        let effects = self.machine.borrow_mut().on_start(difficulty, player_name)?;
        self.listen_for_selection();
        self.run(effects);
        Ok(())
    }

    fn select(&self, piece: PieceId) {
        let effects = self.machine.borrow_mut().on_piece_selected(piece);
        self.run(effects);
    }

    fn pause(&self, paused: bool) {
        self.machine.borrow_mut().on_pause(paused);
    }

    fn quit(&self) {
        self.bus
            .unsubscribe(EventKind::PieceSelected, &SubscriberId::new(SELECTION));
        let effects = self.machine.borrow_mut().on_quit();
        self.run(effects);
    }

    fn timer_tick(&self, remaining: Duration) {
        let effects = self.machine.borrow_mut().on_timer_tick(remaining);
        self.run(effects);
    }

    fn listen_for_selection(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        self.bus
            .subscribe(EventKind::PieceSelected, SELECTION, move |event| {
                with_inner(&weak, |inner| {
                    if let Event::PieceSelected { piece } = event {
                        inner.select(*piece);
                    }
                    Ok(())
                })
            });
    }

    fn handle(self: &Rc<Self>, event: &Event) -> HandlerResult {
        match event {
            Event::SessionStart {
                difficulty,
                player_name,
            } => self
                .start(*difficulty, player_name)
                .map_err(HandlerError::new),
            Event::SessionQuit => {
                self.quit();
                Ok(())
            }
            Event::PauseToggled { paused } => {
                self.pause(*paused);
                Ok(())
            }
            Event::TimerTick { remaining } => {
                self.timer_tick(*remaining);
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Run `f` if the engine is still alive; a dropped engine ignores events
fn with_inner<F>(weak: &Weak<Inner>, f: F) -> HandlerResult
where
    F: FnOnce(&Rc<Inner>) -> HandlerResult,
{
    match weak.upgrade() {
        Some(inner) => f(&inner),
        None => Ok(()),
    }
}

/// Session engine bound to an event bus
pub struct Engine {
    inner: Rc<Inner>,
}

impl Engine {
    pub fn new(bus: EventBus, machine: SessionMachine) -> Self {
        let inner = Rc::new(Inner {
            timer: Timer::new(bus.clone()),
            machine: RefCell::new(machine),
            bus,
        });

        for kind in INPUTS {
            let weak = Rc::downgrade(&inner);
            inner.bus.subscribe(kind, ENGINE, move |event| {
                with_inner(&weak, |inner| inner.handle(event))
            });
        }

        Self { inner }
    }

    pub fn bus(&self) -> &EventBus {
        &self.inner.bus
    }

    /// Start a session, replacing any current one.
    ///
    /// Configuration errors are returned before anything is published.
    pub fn start(&self, difficulty: usize, player_name: &str) -> Result<(), SessionError> {
        self.inner.machine.borrow().check_start(difficulty)?;
        self.inner.bus.publish(&Event::SessionStart {
            difficulty,
            player_name: player_name.to_string(),
        });
        Ok(())
    }

    pub fn select(&self, piece: PieceId) {
        self.inner.bus.publish(&Event::PieceSelected { piece });
    }

    pub fn pause(&self, paused: bool) {
        self.inner.bus.publish(&Event::PauseToggled { paused });
    }

    pub fn quit(&self) {
        self.inner.bus.publish(&Event::SessionQuit);
    }

    /// Advance the countdown by one fixed step
    pub fn tick(&self, dt: Duration) {
        self.inner.timer.tick(dt);
    }

    pub fn state(&self) -> SessionState {
        self.inner.machine.borrow().state()
    }

    pub fn timer_state(&self) -> TimerState {
        self.inner.timer.state()
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Option<Session> {
        self.inner.machine.borrow().session().cloned()
    }

    /// Snapshot of the current board's pieces, row-major
    pub fn board_pieces(&self) -> Vec<Piece> {
        self.inner
            .machine
            .borrow()
            .board_pieces()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Read access to the machine.
    ///
    /// `f` must not call back into the engine.
    pub fn with_machine<R>(&self, f: impl FnOnce(&SessionMachine) -> R) -> R {
        f(&self.inner.machine.borrow())
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        for kind in INPUTS {
            self.inner.bus.unsubscribe(kind, &SubscriberId::new(ENGINE));
        }
        self.inner
            .bus
            .unsubscribe(EventKind::PieceSelected, &SubscriberId::new(SELECTION));
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
