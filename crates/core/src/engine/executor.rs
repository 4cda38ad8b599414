// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor that processes effects from the session machine

use crate::effect::Effect;
use crate::events::EventBus;
use crate::timer::Timer;

/// Executes effects against the bus and the timer
pub struct Executor<'a> {
    bus: &'a EventBus,
    timer: &'a Timer,
}

impl<'a> Executor<'a> {
    pub fn new(bus: &'a EventBus, timer: &'a Timer) -> Self {
        Self { bus, timer }
    }

    /// Execute a single effect
    pub fn execute(&self, effect: Effect) {
        match effect {
            Effect::Emit(event) => {
                tracing::trace!(event = event.name(), "event emitted");
                self.bus.publish(&event);
            }
            Effect::StartTimer { budget } => self.timer.start(budget),
            Effect::StopTimer => self.timer.stop(),
        }
    }

    /// Execute multiple effects in order
    pub fn execute_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.execute(effect);
        }
    }
}
