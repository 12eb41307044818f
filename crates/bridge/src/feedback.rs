//! Flash-message queue consumed by whatever renders the page.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

/// One user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Flash {
    Success(String),
    Error(String),
}

impl Flash {
    pub fn message(&self) -> &str {
        match self {
            Flash::Success(message) | Flash::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Flash::Error(_))
    }
}

/// Ordered queue of flashes, shared between bridges.
#[derive(Debug, Default)]
pub struct Feedback {
    flashes: Mutex<Vec<Flash>>,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Flash::Success(message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Flash::Error(message.into()));
    }

    pub fn push(&self, flash: Flash) {
        self.lock().push(flash);
    }

    /// Current flashes without consuming them.
    pub fn snapshot(&self) -> Vec<Flash> {
        self.lock().clone()
    }

    /// Take all queued flashes, leaving the queue empty.
    pub fn drain(&self) -> Vec<Flash> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Flash>> {
        self.flashes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
