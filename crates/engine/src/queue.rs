// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Event queue: a thread-safe FIFO of domain events.
//!
//! `push` is called from the engine thread and must never block beyond
//! a short lock; it fires the caller-supplied `wake` hook so the UI
//! scheduler knows to drain. `pop` never blocks — an empty queue yields
//! [`DomainEvent::Empty`], itself a valid in-band signal.

use std::collections::VecDeque;
use std::sync::Arc;

use oac_core::DomainEvent;
use parking_lot::Mutex;

/// The "wake the UI scheduler" hook threaded through the event queue and
/// the request-reply bridge. Callers supply this; it is the concrete
/// rendering of a `schedule_on_ui` primitive rather than any one
/// hard-coded event loop.
pub type WakeFn = Arc<dyn Fn() + Send + Sync>;

/// Thread-safe FIFO of [`DomainEvent`]s.
pub struct EventQueue {
    inner: Mutex<VecDeque<DomainEvent>>,
    wake: Option<WakeFn>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { inner: Mutex::new(VecDeque::new()), wake: None }
    }

    /// Builds a queue that notifies `wake` on every push.
    pub fn with_wake(wake: WakeFn) -> Self {
        Self { inner: Mutex::new(VecDeque::new()), wake: Some(wake) }
    }

    /// Appends an event and notifies the wake hook, if any. Never blocks
    /// beyond the short internal lock.
    pub fn push(&self, event: DomainEvent) {
        self.inner.lock().push_back(event);
        if let Some(wake) = &self.wake {
            wake();
        }
    }

    /// Pops the oldest event, or [`DomainEvent::Empty`] if the queue is
    /// drained. Never blocks.
    pub fn pop(&self) -> DomainEvent {
        self.inner.lock().pop_front().unwrap_or(DomainEvent::Empty)
    }

    /// Number of events currently queued, for diagnostics.
    pub fn size(&self) -> usize {
        self.inner.lock().len()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
