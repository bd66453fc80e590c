// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Job observer: implements [`EngineObserver`], the automation engine's
//! notification contract, and fans occurrences out to the event queue,
//! the state condvar, and the two request/reply bridges that back
//! user-value and user-choice prompts.

use std::sync::Arc;
use std::time::Duration;

use oac_core::event::DomainEvent;
use oac_core::{AnyValue, InstructionIndex, InstructionState, JobState, LogSeverity, VariableIndex};
use parking_lot::{Condvar, Mutex};

use crate::contracts::EngineObserver;
use crate::queue::{EventQueue, WakeFn};
use crate::request_reply::RequestReplyBridge;

/// Reduces a batch of instruction indices to the subset the UI should
/// actually be told about. Replaces the default "report everything"
/// monitor once a runner installs `AncestorsActiveFilter`.
pub type ActiveInstructionFilter = Box<dyn Fn(&[InstructionIndex]) -> Vec<InstructionIndex> + Send + Sync>;

/// A user-value dialog: given the prompt id, description, and current
/// value, returns the value the user entered (or declines to answer by
/// leaving the bridge to time out / be canceled).
pub type UserValueDialog = Box<dyn Fn(u64, &str, &AnyValue) -> AnyValue + Send + Sync>;
/// A user-choice dialog: given the prompt id, option labels, and
/// metadata, returns the chosen index.
pub type UserChoiceDialog = Box<dyn Fn(u64, &[String], &AnyValue) -> i32 + Send + Sync>;

struct UserValueRequest {
    id: u64,
    description: String,
    current: AnyValue,
}

struct UserChoiceRequest {
    id: u64,
    options: Vec<String>,
    metadata: AnyValue,
}

struct Shared {
    state: JobState,
    tick_timeout: Duration,
    active_filter: Option<ActiveInstructionFilter>,
}

/// Implements [`EngineObserver`] on behalf of a single job; posts
/// [`DomainEvent`]s to `queue` and blocks the engine thread on the
/// request/reply bridges for user prompts.
pub struct JobObserver {
    queue: Arc<EventQueue>,
    wake: Option<WakeFn>,
    shared: Mutex<Shared>,
    state_cv: Condvar,
    value_bridge: RequestReplyBridge<AnyValue>,
    value_request: Mutex<Option<UserValueRequest>>,
    value_dialog: Mutex<Option<UserValueDialog>>,
    choice_bridge: RequestReplyBridge<i32>,
    choice_request: Mutex<Option<UserChoiceRequest>>,
    choice_dialog: Mutex<Option<UserChoiceDialog>>,
}

impl JobObserver {
    pub fn new(queue: Arc<EventQueue>, wake: Option<WakeFn>) -> Self {
        Self {
            queue,
            wake,
            shared: Mutex::new(Shared {
                state: JobState::Initial,
                tick_timeout: Duration::ZERO,
                active_filter: None,
            }),
            state_cv: Condvar::new(),
            value_bridge: RequestReplyBridge::new(),
            value_request: Mutex::new(None),
            value_dialog: Mutex::new(None),
            choice_bridge: RequestReplyBridge::new(),
            choice_request: Mutex::new(None),
            choice_dialog: Mutex::new(None),
        }
    }

    pub fn current_state(&self) -> JobState {
        self.shared.lock().state
    }

    /// Blocks until `state` is observed or `timeout` elapses; returns
    /// whether it was observed.
    pub fn wait_for_state(&self, state: JobState, timeout: Duration) -> bool {
        let mut guard = self.shared.lock();
        if guard.state == state {
            return true;
        }
        let result = self.state_cv.wait_for(&mut guard, timeout);
        !result.timed_out() && guard.state == state
    }

    /// Blocks until the job reaches a finished state with no bound.
    pub fn wait_for_finished(&self) {
        let mut guard = self.shared.lock();
        while !guard.state.is_finished() {
            self.state_cv.wait(&mut guard);
        }
    }

    pub fn set_tick_timeout(&self, timeout: Duration) {
        self.shared.lock().tick_timeout = timeout;
    }

    pub fn set_active_instruction_filter(&self, filter: ActiveInstructionFilter) {
        self.shared.lock().active_filter = Some(filter);
    }

    pub fn set_user_value_dialog(&self, dialog: UserValueDialog) {
        *self.value_dialog.lock() = Some(dialog);
    }

    pub fn set_user_choice_dialog(&self, dialog: UserChoiceDialog) {
        *self.choice_dialog.lock() = Some(dialog);
    }

    fn notify_ui(&self) {
        if let Some(wake) = &self.wake {
            wake();
        }
    }

    /// Replays an event that originated on a remote engine (see
    /// `oac-runtime::remote`) onto this observer's queue, verbatim,
    /// updating the same state tracking the matching [`EngineObserver`]
    /// method would update for a local job. This lets a
    /// `RemoteDomainRunner` reuse the queue/dispatcher/observer plumbing
    /// unchanged instead of re-deriving events from a thinner remote
    /// contract.
    pub fn replay_remote_event(&self, event: DomainEvent) {
        if let DomainEvent::JobStateChanged { state } = &event {
            let mut guard = self.shared.lock();
            guard.state = *state;
            self.state_cv.notify_all();
        }
        self.queue.push(event);
        self.notify_ui();
    }

    /// Called on the UI thread once woken: if a value prompt is
    /// outstanding, runs the registered dialog and replies.
    pub fn service_user_value_request(&self) {
        let request = self.value_request.lock().take();
        let Some(request) = request else { return };
        let dialog = self.value_dialog.lock();
        let answer = match dialog.as_ref() {
            Some(dialog) => dialog(request.id, &request.description, &request.current),
            None => {
                self.value_bridge.cancel();
                return;
            }
        };
        self.value_bridge.reply(answer);
    }

    /// Called on the UI thread once woken: if a choice prompt is
    /// outstanding, runs the registered dialog and replies.
    pub fn service_user_choice_request(&self) {
        let request = self.choice_request.lock().take();
        let Some(request) = request else { return };
        let dialog = self.choice_dialog.lock();
        let answer = match dialog.as_ref() {
            Some(dialog) => dialog(request.id, &request.options, &request.metadata),
            None => -1,
        };
        self.choice_bridge.reply(answer);
    }
}

impl EngineObserver for JobObserver {
    fn instruction_state_updated(&self, index: InstructionIndex, state: InstructionState) {
        self.queue.push(DomainEvent::InstructionStateUpdated {
            index,
            execution_status: state.execution_status,
            breakpoint_set: state.breakpoint_set,
        });

        if state.breakpoint_set && state.execution_status == oac_core::ExecutionStatus::Running {
            self.queue.push(DomainEvent::BreakpointHit { index });
        }

        let batch = {
            let guard = self.shared.lock();
            guard.active_filter.as_ref().map(|filter| filter(&[index]))
        };
        if let Some(indices) = batch {
            if !indices.is_empty() {
                self.queue.push(DomainEvent::ActiveInstructionChanged { indices });
            }
        }
    }

    fn variable_updated(&self, index: VariableIndex, value: AnyValue, connected: bool) {
        self.queue.push(DomainEvent::VariableUpdated { index, value, connected });
    }

    fn job_state_updated(&self, state: JobState) {
        {
            let mut guard = self.shared.lock();
            guard.state = state;
            self.state_cv.notify_all();
        }
        self.queue.push(DomainEvent::JobStateChanged { state });
    }

    fn put_value(&self, value: AnyValue, description: &str) {
        self.queue.push(DomainEvent::Log {
            severity: LogSeverity::Info,
            message: format!("Put value > {description}: {value}"),
        });
    }

    fn get_user_value(&self, id: u64, value: &mut AnyValue, description: &str) -> bool {
        self.value_bridge.open();
        *self.value_request.lock() = Some(UserValueRequest {
            id,
            description: description.to_string(),
            current: value.clone(),
        });
        self.notify_ui();

        match self.value_bridge.ask(None) {
            Some(answer) => {
                *value = answer;
                true
            }
            None => false,
        }
    }

    fn get_user_choice(&self, id: u64, options: &[String], metadata: &AnyValue) -> i32 {
        if self.choice_dialog.lock().is_none() {
            return -1;
        }
        self.choice_bridge.open();
        *self.choice_request.lock() = Some(UserChoiceRequest {
            id,
            options: options.to_vec(),
            metadata: metadata.clone(),
        });
        self.notify_ui();

        self.choice_bridge.ask(None).unwrap_or(-1)
    }

    fn message(&self, text: &str) {
        self.queue.push(DomainEvent::Log { severity: LogSeverity::Info, message: text.to_string() });
    }

    fn log(&self, severity: LogSeverity, text: &str) {
        self.queue.push(DomainEvent::Log { severity, message: text.to_string() });
    }

    fn next_instructions_updated(&self, indices: &[InstructionIndex]) {
        self.queue.push(DomainEvent::ActiveInstructionChanged { indices: indices.to_vec() });
    }

    fn procedure_ticked(&self) {
        let timeout = self.shared.lock().tick_timeout;
        if !timeout.is_zero() {
            std::thread::sleep(timeout);
        }
    }

    /// Releases both request/reply bridges with a "not-processed" reply,
    /// unblocking an engine thread parked in `get_user_value`/
    /// `get_user_choice`.
    fn cancel_pending_requests(&self) {
        self.value_bridge.cancel();
        self.choice_bridge.cancel();
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;
