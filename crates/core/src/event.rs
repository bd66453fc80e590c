// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Domain events: the typed union flowing from the automation
//! engine thread into the event queue and out through the dispatcher.
//!
//! All variants carry only value-type data, safe to copy across threads,
//! plus an empty sentinel that is itself a valid in-band "queue drained"
//! signal.

use serde::{Deserialize, Serialize};

use crate::any_value::AnyValue;
use crate::execution_status::ExecutionStatus;
use crate::id::{InstructionIndex, VariableIndex};
use crate::job_state::JobState;
use crate::log::LogSeverity;

/// Events reported by the automation engine and carried across the
/// queue/dispatcher boundary.
///
/// `Empty` is a valid in-band signal (queue drained / shut down), not an
/// error — see [`DomainEvent::is_valid`]. Serde derives let a
/// `RemoteEvent::Domain` (`oac-wire`) carry one across the remote runner's
/// transport unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    Empty,

    InstructionStateUpdated {
        index: InstructionIndex,
        execution_status: ExecutionStatus,
        breakpoint_set: bool,
    },

    VariableUpdated {
        index: VariableIndex,
        value: AnyValue,
        connected: bool,
    },

    JobStateChanged {
        state: JobState,
    },

    Log {
        severity: LogSeverity,
        message: String,
    },

    ActiveInstructionChanged {
        /// Ordered, de-duplicated set of active instruction indices.
        indices: Vec<InstructionIndex>,
    },

    BreakpointHit {
        index: InstructionIndex,
    },
}

/// Discriminant used to route a popped event to its dispatcher callback
/// slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainEventKind {
    Empty,
    InstructionStateUpdated,
    VariableUpdated,
    JobStateChanged,
    Log,
    ActiveInstructionChanged,
    BreakpointHit,
}

impl DomainEvent {
    pub fn kind(&self) -> DomainEventKind {
        match self {
            DomainEvent::Empty => DomainEventKind::Empty,
            DomainEvent::InstructionStateUpdated { .. } => DomainEventKind::InstructionStateUpdated,
            DomainEvent::VariableUpdated { .. } => DomainEventKind::VariableUpdated,
            DomainEvent::JobStateChanged { .. } => DomainEventKind::JobStateChanged,
            DomainEvent::Log { .. } => DomainEventKind::Log,
            DomainEvent::ActiveInstructionChanged { .. } => DomainEventKind::ActiveInstructionChanged,
            DomainEvent::BreakpointHit { .. } => DomainEventKind::BreakpointHit,
        }
    }

    /// `false` only for the empty sentinel.
    pub fn is_valid(&self) -> bool {
        !matches!(self, DomainEvent::Empty)
    }

    /// Short human-readable summary, for tracing/log output.
    pub fn log_summary(&self) -> String {
        match self {
            DomainEvent::Empty => "empty".to_string(),
            DomainEvent::InstructionStateUpdated { index, execution_status, breakpoint_set } => {
                format!(
                    "instruction[{index}] -> {execution_status} (breakpoint_set={breakpoint_set})"
                )
            }
            DomainEvent::VariableUpdated { index, value, connected } => {
                format!("variable[{index}] -> {value} (connected={connected})")
            }
            DomainEvent::JobStateChanged { state } => format!("job state -> {state}"),
            DomainEvent::Log { severity, message } => format!("[{severity}] {message}"),
            DomainEvent::ActiveInstructionChanged { indices } => {
                format!("active instructions -> {indices:?}")
            }
            DomainEvent::BreakpointHit { index } => format!("breakpoint hit at instruction[{index}]"),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
