// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! The flow controller's waiting mode.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaitingMode {
    /// No wait: the engine thread proceeds to the next tick immediately.
    Proceed,
    /// Sleep up to a fixed delay per tick, interruptible.
    SleepFor(Duration),
    /// Block until a step token is consumed or an interrupt is signaled.
    WaitForRelease,
}

impl Default for WaitingMode {
    fn default() -> Self {
        WaitingMode::Proceed
    }
}
