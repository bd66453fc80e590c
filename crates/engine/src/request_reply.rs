// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Request/reply bridge: lets the engine thread block on a question only
//! the UI domain can answer (user value, user choice) without stalling
//! the UI itself.
//!
//! The question is posted as a [`DomainEvent`] and the engine blocks on a
//! [`Condvar`] until the UI thread calls [`RequestReplyBridge::reply`].
//! Generic over the reply payload so the same bridge type serves both
//! "get user value" (reply = `AnyValue`) and "get user choice" (reply =
//! `i32`).

use std::time::Duration;

use parking_lot::{Condvar, Mutex};

enum Slot<Reply> {
    Empty,
    Pending,
    Answered(Reply),
    Canceled,
}

/// A single outstanding question, answered at most once.
pub struct RequestReplyBridge<Reply> {
    slot: Mutex<Slot<Reply>>,
    cv: Condvar,
}

impl<Reply> RequestReplyBridge<Reply> {
    pub fn new() -> Self {
        Self { slot: Mutex::new(Slot::Empty), cv: Condvar::new() }
    }

    /// Opens the bridge for a new question. Must be called before
    /// `ask` from the same thread that will call `ask`; any reply left
    /// over from a previous round is discarded.
    pub fn open(&self) {
        *self.slot.lock() = Slot::Pending;
    }

    /// Blocks the calling (engine) thread until a reply arrives, the
    /// bridge is canceled, or `timeout` elapses. Returns `None` on
    /// cancellation or timeout.
    pub fn ask(&self, timeout: Option<Duration>) -> Option<Reply> {
        let mut guard = self.slot.lock();
        loop {
            match &*guard {
                Slot::Answered(_) => {
                    let previous = std::mem::replace(&mut *guard, Slot::Empty);
                    return match previous {
                        Slot::Answered(reply) => Some(reply),
                        _ => unreachable!(),
                    };
                }
                Slot::Canceled => {
                    *guard = Slot::Empty;
                    return None;
                }
                Slot::Empty => return None,
                Slot::Pending => {}
            }

            match timeout {
                Some(duration) => {
                    let result = self.cv.wait_for(&mut guard, duration);
                    if result.timed_out() {
                        *guard = Slot::Empty;
                        return None;
                    }
                }
                None => self.cv.wait(&mut guard),
            }
        }
    }

    /// Called from the UI thread once the user has answered.
    pub fn reply(&self, reply: Reply) {
        let mut guard = self.slot.lock();
        if matches!(&*guard, Slot::Pending) {
            *guard = Slot::Answered(reply);
            self.cv.notify_all();
        }
    }

    /// Called when the job stops or the dialog is dismissed without an
    /// answer; wakes the waiting engine thread with `None`.
    pub fn cancel(&self) {
        let mut guard = self.slot.lock();
        if matches!(&*guard, Slot::Pending) {
            *guard = Slot::Canceled;
            self.cv.notify_all();
        }
    }

    /// True while a question is outstanding and unanswered.
    pub fn is_pending(&self) -> bool {
        matches!(&*self.slot.lock(), Slot::Pending)
    }
}

impl<Reply> Default for RequestReplyBridge<Reply> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "request_reply_tests.rs"]
mod tests;
