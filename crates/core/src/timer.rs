// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Countdown timer
//!
//! The timer does not own a clock. An external fixed-step scheduler calls
//! `tick(dt)` once per simulation step; each tick while running publishes a
//! `TimerTick` with the time remaining, clamped to `[0, target]`.
//!
//! State lives in `Cell`s so a handler reacting to a tick may stop or restart
//! the timer while that tick is still being published.

use crate::effect::Event;
use crate::events::EventBus;
use std::cell::Cell;
use std::time::Duration;

/// Whether the countdown is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
}

pub struct Timer {
    bus: EventBus,
    elapsed: Cell<Duration>,
    target: Cell<Duration>,
    running: Cell<bool>,
}

impl Timer {
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            elapsed: Cell::new(Duration::ZERO),
            target: Cell::new(Duration::ZERO),
            running: Cell::new(false),
        }
    }

    /// Idle -> Running with a fresh countdown of `target`
    pub fn start(&self, target: Duration) {
        tracing::debug!(?target, "timer started");
        self.target.set(target);
        self.elapsed.set(Duration::ZERO);
        self.running.set(true);
    }

    /// Advance by one step of length `dt`; no-op while idle
    pub fn tick(&self, dt: Duration) {
        if !self.running.get() {
            return;
        }

        let elapsed = self.elapsed.get().saturating_add(dt);
        self.elapsed.set(elapsed);

        if elapsed >= self.target.get() {
            self.running.set(false);
            tracing::debug!("timer reached zero");
            self.bus.publish(&Event::TimerTick {
                remaining: Duration::ZERO,
            });
        } else {
            self.bus.publish(&Event::TimerTick {
                remaining: self.remaining(),
            });
        }
    }

    /// Running -> Idle, whatever the elapsed time
    pub fn stop(&self) {
        if self.running.replace(false) {
            tracing::debug!(elapsed = ?self.elapsed.get(), "timer stopped");
        }
    }

    pub fn state(&self) -> TimerState {
        if self.running.get() {
            TimerState::Running
        } else {
            TimerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    pub fn target(&self) -> Duration {
        self.target.get()
    }

    /// Time left, within `[0, target]`
    pub fn remaining(&self) -> Duration {
        self.target.get().saturating_sub(self.elapsed.get())
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
