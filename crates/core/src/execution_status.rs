// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Instruction execution status and breakpoint state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    NotStarted,
    Running,
    Success,
    Failure,
}

crate::simple_display! {
    ExecutionStatus {
        NotStarted => "not_started",
        Running => "running",
        Success => "success",
        Failure => "failure",
    }
}

/// Breakpoint assignment on an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BreakpointStatus {
    #[default]
    Unset,
    Set,
    Disabled,
}

impl BreakpointStatus {
    pub fn is_active(self) -> bool {
        matches!(self, BreakpointStatus::Set)
    }
}

/// Snapshot of an instruction's state as reported by the engine: its
/// execution status plus whether a breakpoint is currently armed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionState {
    pub execution_status: ExecutionStatus,
    pub breakpoint_set: bool,
}

impl InstructionState {
    pub fn new(execution_status: ExecutionStatus, breakpoint_set: bool) -> Self {
        Self { execution_status, breakpoint_set }
    }
}

#[cfg(test)]
#[path = "execution_status_tests.rs"]
mod tests;
