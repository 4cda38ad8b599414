// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for routing events to subscribers
//!
//! Delivery is synchronous and re-entrant: handlers run on the publisher's
//! call stack and may publish, subscribe or unsubscribe themselves. Each
//! `publish` call works from a snapshot of the registrations taken before
//! the first handler runs.

use super::subscription::{Handler, HandlerResult, Registration, SubscriberId};
use crate::effect::{Event, EventKind};
use std::cell::RefCell;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

#[derive(Default)]
struct Registry {
    by_kind: HashMap<EventKind, Vec<Registration>>,
    /// Observers receive every event (journaling, printing)
    observers: Vec<Registration>,
}

/// The event bus routes events to subscribers of their kind
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    /// Subscribe `handler` to events of `kind`.
    ///
    /// Subscribing an id that is already registered for `kind` replaces the
    /// previous handler in place, keeping its delivery position.
    pub fn subscribe<F>(&self, kind: EventKind, id: impl Into<SubscriberId>, handler: F)
    where
        F: Fn(&Event) -> HandlerResult + 'static,
    {
        let registration = Registration {
            id: id.into(),
            handler: Rc::new(handler),
        };
        let mut registry = self.registry.borrow_mut();
        upsert(registry.by_kind.entry(kind).or_default(), registration);
    }

    /// Unsubscribe `id` from `kind`; absent registrations are ignored
    pub fn unsubscribe(&self, kind: EventKind, id: &SubscriberId) {
        let mut registry = self.registry.borrow_mut();
        if let Some(list) = registry.by_kind.get_mut(&kind) {
            list.retain(|r| &r.id != id);
            if list.is_empty() {
                registry.by_kind.remove(&kind);
            }
        }
    }

    /// Register an observer that receives every event before the kind's
    /// subscribers, so it sees an event ahead of anything its handlers publish
    pub fn observe<F>(&self, id: impl Into<SubscriberId>, handler: F)
    where
        F: Fn(&Event) -> HandlerResult + 'static,
    {
        let registration = Registration {
            id: id.into(),
            handler: Rc::new(handler),
        };
        upsert(&mut self.registry.borrow_mut().observers, registration);
    }

    /// Remove an observer; absent observers are ignored
    pub fn unobserve(&self, id: &SubscriberId) {
        self.registry
            .borrow_mut()
            .observers
            .retain(|r| &r.id != id);
    }

    /// Publish an event to every handler registered for its kind.
    ///
    /// Handler failures and panics are logged and isolated; they never reach
    /// the publisher or skip later handlers.
    pub fn publish(&self, event: &Event) {
        let kind = event.kind();

        let snapshot: Vec<Registration> = {
            let registry = self.registry.borrow();
            registry
                .observers
                .iter()
                .chain(registry.by_kind.get(&kind).into_iter().flatten())
                .cloned()
                .collect()
        };

        tracing::trace!(event = kind.name(), handlers = snapshot.len(), "publish");

        for registration in snapshot {
            deliver(&registration.id, &registration.handler, event);
        }
    }

    /// Get count of handlers subscribed to `kind`
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.registry
            .borrow()
            .by_kind
            .get(&kind)
            .map_or(0, Vec::len)
    }

    /// Check whether `id` is subscribed to `kind`
    pub fn is_subscribed(&self, kind: EventKind, id: &SubscriberId) -> bool {
        self.registry
            .borrow()
            .by_kind
            .get(&kind)
            .is_some_and(|list| list.iter().any(|r| &r.id == id))
    }

    /// List subscriber ids for `kind` in delivery order
    pub fn list_subscriptions(&self, kind: EventKind) -> Vec<SubscriberId> {
        self.registry
            .borrow()
            .by_kind
            .get(&kind)
            .map(|list| list.iter().map(|r| r.id.clone()).collect())
            .unwrap_or_default()
    }
}

fn upsert(list: &mut Vec<Registration>, registration: Registration) {
    match list.iter_mut().find(|r| r.id == registration.id) {
        Some(existing) => existing.handler = registration.handler,
        None => list.push(registration),
    }
}

fn deliver(id: &SubscriberId, handler: &Handler, event: &Event) {
    match catch_unwind(AssertUnwindSafe(|| handler(event))) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            tracing::warn!(subscriber = %id, event = event.name(), error = %e, "handler failed");
        }
        Err(_) => {
            tracing::warn!(subscriber = %id, event = event.name(), "handler panicked");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
