// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system for loose coupling and observability
//!
//! This module provides:
//! - `EventBus` - Deliver events to the subscribers of their kind
//! - `EventLog` - JSON-lines journal of published events
//! - `SubscriberId` - Identity of a registration, used to replace or remove it

mod bus;
mod log;
mod subscription;

pub use bus::EventBus;
pub use log::{EventLog, EventRecord, JournalError};
pub use subscription::{Handler, HandlerError, HandlerResult, SubscriberId};
