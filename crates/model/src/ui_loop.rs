// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! `UiScheduler`: the concrete `schedule_on_ui` primitive callers
//! supply. A single-threaded executor draining a queue of
//! posted closures — deliberately not tied to any GUI toolkit's event
//! loop (Non-goal).

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use oac_engine::WakeFn;

type UiTask = Box<dyn FnOnce() + Send>;

/// Owns the posted-closure queue. Lives on the UI thread; [`Self::drain`]
/// is the single entry point a real event loop's idle/repaint callback
/// would call once per tick.
pub struct UiScheduler {
    tasks_tx: Sender<UiTask>,
    tasks_rx: Receiver<UiTask>,
}

impl UiScheduler {
    pub fn new() -> Self {
        let (tasks_tx, tasks_rx) = channel();
        Self { tasks_tx, tasks_rx }
    }

    /// A cloneable, cross-thread handle for posting work onto this
    /// scheduler.
    pub fn handle(&self) -> UiSchedulerHandle {
        UiSchedulerHandle { tasks_tx: self.tasks_tx.clone() }
    }

    /// Runs every task currently queued, in post order. Does not block
    /// waiting for more; a real event loop calls this once per wakeup.
    pub fn drain(&self) {
        while let Ok(task) = self.tasks_rx.try_recv() {
            task();
        }
    }
}

impl Default for UiScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Cross-thread handle to a [`UiScheduler`]'s posted-closure queue.
#[derive(Clone)]
pub struct UiSchedulerHandle {
    tasks_tx: Sender<UiTask>,
}

impl UiSchedulerHandle {
    pub fn schedule_on_ui(&self, task: impl FnOnce() + Send + 'static) {
        let _ = self.tasks_tx.send(Box::new(task));
    }

    /// Adapts this handle into the `wake: Arc<dyn Fn() + Send + Sync>`
    /// hook `oac-engine`'s queue and request/reply bridge expect: every
    /// invocation posts `task`
    /// onto this scheduler instead of running it immediately, so engine
    /// callbacks never execute item mutations off the UI thread.
    pub fn wake_fn(&self, task: Arc<dyn Fn() + Send + Sync>) -> WakeFn {
        let handle = self.clone();
        Arc::new(move || {
            let task = task.clone();
            handle.schedule_on_ui(move || task());
        })
    }
}

#[cfg(test)]
#[path = "ui_loop_tests.rs"]
mod tests;
