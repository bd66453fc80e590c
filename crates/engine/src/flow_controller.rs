// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Flow controller: the shared gate between the engine thread and UI
//! commands that paces ticks.

use std::time::{Duration, Instant};

use oac_core::WaitingMode;
use parking_lot::{Condvar, Mutex};

struct State {
    waiting_mode: WaitingMode,
    step_token: bool,
    interrupted: bool,
}

/// Gate called by the engine thread once per tick; commanded by the UI
/// thread to pause, single-step, run freely, or interrupt.
pub struct FlowController {
    state: Mutex<State>,
    cv: Condvar,
}

impl FlowController {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                waiting_mode: WaitingMode::Proceed,
                step_token: false,
                interrupted: false,
            }),
            cv: Condvar::new(),
        }
    }

    /// Called by the engine at every tick.
    pub fn wait_if_necessary(&self) {
        let mode = self.state.lock().waiting_mode;
        match mode {
            WaitingMode::Proceed => {}
            WaitingMode::SleepFor(duration) => self.sleep_interruptible(duration),
            WaitingMode::WaitForRelease => self.wait_for_release(),
        }
    }

    fn sleep_interruptible(&self, duration: Duration) {
        let mut guard = self.state.lock();
        if guard.interrupted {
            return;
        }
        let deadline = Instant::now() + duration;
        loop {
            let now = Instant::now();
            if now >= deadline || guard.interrupted {
                return;
            }
            let timeout = deadline - now;
            let result = self.cv.wait_for(&mut guard, timeout);
            if result.timed_out() {
                return;
            }
        }
    }

    fn wait_for_release(&self) {
        let mut guard = self.state.lock();
        loop {
            if guard.interrupted {
                return;
            }
            if guard.step_token {
                guard.step_token = false;
                return;
            }
            self.cv.wait(&mut guard);
        }
    }

    /// Deposits one step token. Idempotent: depositing while a token is
    /// already pending is a no-op. A token deposited while the engine is
    /// not currently waiting is remembered for the next
    /// `wait_if_necessary` call in `WaitForRelease` mode.
    pub fn step_request(&self) {
        let mut guard = self.state.lock();
        guard.step_token = true;
        self.cv.notify_all();
    }

    /// Changes the waiting mode. Legal at any time; the *next* tick
    /// observes the new mode.
    pub fn set_waiting_mode(&self, mode: WaitingMode) {
        let mut guard = self.state.lock();
        guard.waiting_mode = mode;
        self.cv.notify_all();
    }

    pub fn waiting_mode(&self) -> WaitingMode {
        self.state.lock().waiting_mode
    }

    /// Releases all waiters immediately and flags interrupted. Interrupt
    /// takes precedence over a pending step token.
    pub fn interrupt(&self) {
        let mut guard = self.state.lock();
        guard.interrupted = true;
        self.cv.notify_all();
    }

    /// Clears the interrupted flag and any stale step token; called when
    /// a new run begins.
    pub fn reset(&self) {
        let mut guard = self.state.lock();
        guard.interrupted = false;
        guard.step_token = false;
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "flow_controller_tests.rs"]
mod tests;
