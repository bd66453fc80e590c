// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Event dispatcher: drains the queue on the UI domain and routes each
//! event, by variant, to its registered handler.
//!
//! Handlers are registered once at setup (the job handler wires all
//! six); unregistered variants are skipped.

use std::sync::Arc;

use oac_core::event::{DomainEvent, ExecutionStatus};
use oac_core::{AnyValue, InstructionIndex, JobState, LogSeverity, VariableIndex};

use crate::queue::EventQueue;

pub type InstructionStateUpdatedFn = Box<dyn FnMut(InstructionIndex, ExecutionStatus, bool) + Send>;
pub type VariableUpdatedFn = Box<dyn FnMut(VariableIndex, AnyValue, bool) + Send>;
pub type JobStateChangedFn = Box<dyn FnMut(JobState) + Send>;
pub type LogFn = Box<dyn FnMut(LogSeverity, String) + Send>;
pub type ActiveInstructionChangedFn = Box<dyn FnMut(Vec<InstructionIndex>) + Send>;
pub type BreakpointHitFn = Box<dyn FnMut(InstructionIndex) + Send>;

/// Holds one callback slot per [`DomainEvent`] variant and drains an
/// [`EventQueue`] to exhaustion in a single UI-domain step.
#[derive(Default)]
pub struct EventDispatcher {
    on_instruction_state_updated: Option<InstructionStateUpdatedFn>,
    on_variable_updated: Option<VariableUpdatedFn>,
    on_job_state_changed: Option<JobStateChangedFn>,
    on_log: Option<LogFn>,
    on_active_instruction_changed: Option<ActiveInstructionChangedFn>,
    on_breakpoint_hit: Option<BreakpointHitFn>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_instruction_state_updated(&mut self, f: InstructionStateUpdatedFn) {
        self.on_instruction_state_updated = Some(f);
    }

    pub fn set_variable_updated(&mut self, f: VariableUpdatedFn) {
        self.on_variable_updated = Some(f);
    }

    pub fn set_job_state_changed(&mut self, f: JobStateChangedFn) {
        self.on_job_state_changed = Some(f);
    }

    pub fn set_log(&mut self, f: LogFn) {
        self.on_log = Some(f);
    }

    pub fn set_active_instruction_changed(&mut self, f: ActiveInstructionChangedFn) {
        self.on_active_instruction_changed = Some(f);
    }

    pub fn set_breakpoint_hit(&mut self, f: BreakpointHitFn) {
        self.on_breakpoint_hit = Some(f);
    }

    /// Drains `queue` to exhaustion, dispatching each popped event to its
    /// registered callback. Does not re-enter itself: events posted by a
    /// handler while draining are observed on the *next* call, not this
    /// one. To guarantee that, the events present at the
    /// start of this call are popped into a batch up front; anything a
    /// handler pushes mid-batch lands back on the queue for next time.
    pub fn drain(&mut self, queue: &Arc<EventQueue>) {
        let mut batch = Vec::new();
        loop {
            let event = queue.pop();
            if !event.is_valid() {
                break;
            }
            batch.push(event);
        }

        for event in batch {
            tracing::trace!(event = %event.log_summary(), "dispatching domain event");
            self.dispatch_one(event);
        }
    }

    fn dispatch_one(&mut self, event: DomainEvent) {
        match event {
            DomainEvent::Empty => {}
            DomainEvent::InstructionStateUpdated { index, execution_status, breakpoint_set } => {
                if let Some(f) = &mut self.on_instruction_state_updated {
                    f(index, execution_status, breakpoint_set);
                }
            }
            DomainEvent::VariableUpdated { index, value, connected } => {
                if let Some(f) = &mut self.on_variable_updated {
                    f(index, value, connected);
                }
            }
            DomainEvent::JobStateChanged { state } => {
                if let Some(f) = &mut self.on_job_state_changed {
                    f(state);
                }
            }
            DomainEvent::Log { severity, message } => {
                if let Some(f) = &mut self.on_log {
                    f(severity, message);
                }
            }
            DomainEvent::ActiveInstructionChanged { indices } => {
                if let Some(f) = &mut self.on_active_instruction_changed {
                    f(indices);
                }
            }
            DomainEvent::BreakpointHit { index } => {
                if let Some(f) = &mut self.on_breakpoint_hit {
                    f(index);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
