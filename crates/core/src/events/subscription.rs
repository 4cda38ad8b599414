// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriber identity and handler types

use crate::effect::Event;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Subscriber handle for replacing and unsubscribing handlers.
///
/// Identity of a registration is the pair (event kind, subscriber id).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(pub String);

impl SubscriberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SubscriberId {
    fn from(s: &str) -> Self {
        SubscriberId(s.to_string())
    }
}

impl From<String> for SubscriberId {
    fn from(s: String) -> Self {
        SubscriberId(s)
    }
}

/// Failure reported by a handler; logged by the bus, never propagated
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("{0}")]
    Other(String),
}

impl HandlerError {
    /// Wrap whatever error the subscriber's own work produced
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        HandlerError::Failed(Box::new(source))
    }

    pub fn other(message: impl Into<String>) -> Self {
        HandlerError::Other(message.into())
    }
}

/// Result of a single handler invocation
pub type HandlerResult = Result<(), HandlerError>;

/// A registered event handler
pub type Handler = Rc<dyn Fn(&Event) -> HandlerResult>;

/// A handler bound to its subscriber id
#[derive(Clone)]
pub(crate) struct Registration {
    pub(crate) id: SubscriberId,
    pub(crate) handler: Handler,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").field("id", &self.id).finish()
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
