// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Job service: wires the event queue, dispatcher, and observer into a
//! single unit with one UI-domain entry point.

use std::sync::Arc;
use std::time::Duration;

use oac_core::JobState;
use parking_lot::Mutex;

use crate::dispatcher::EventDispatcher;
use crate::observer::{ActiveInstructionFilter, JobObserver, UserChoiceDialog, UserValueDialog};
use crate::queue::{EventQueue, WakeFn};

/// Owns the queue/dispatcher/observer triad for one job. `job_info_io()`
/// hands the engine-facing [`JobObserver`] to whatever [`EngineJob`]
/// implementation drives this job; `service_turn()` is the single
/// UI-domain entry point a scheduler calls once per wakeup.
///
/// [`EngineJob`]: crate::contracts::EngineJob
pub struct JobService {
    queue: Arc<EventQueue>,
    observer: Arc<JobObserver>,
    dispatcher: Mutex<EventDispatcher>,
}

impl JobService {
    pub fn new(wake: Option<WakeFn>) -> Self {
        let queue = Arc::new(match wake.clone() {
            Some(wake) => EventQueue::with_wake(wake),
            None => EventQueue::new(),
        });
        let observer = Arc::new(JobObserver::new(queue.clone(), wake));
        Self { queue, observer, dispatcher: Mutex::new(EventDispatcher::new()) }
    }

    /// The engine-facing observer handle; pass this to an `EngineJob`
    /// constructor so the engine thread can report occurrences.
    pub fn job_info_io(&self) -> Arc<JobObserver> {
        self.observer.clone()
    }

    pub fn dispatcher(&self) -> &Mutex<EventDispatcher> {
        &self.dispatcher
    }

    /// Called once per UI-domain wakeup: services outstanding user
    /// prompts, then drains the event queue into the dispatcher.
    pub fn service_turn(&self) {
        self.observer.service_user_value_request();
        self.observer.service_user_choice_request();
        self.dispatcher.lock().drain(&self.queue);
    }

    pub fn job_state(&self) -> JobState {
        self.observer.current_state()
    }

    pub fn wait_for_finished(&self) {
        self.observer.wait_for_finished();
    }

    pub fn wait_for_state(&self, state: JobState, timeout: Duration) -> bool {
        self.observer.wait_for_state(state, timeout)
    }

    pub fn set_tick_timeout(&self, timeout: Duration) {
        self.observer.set_tick_timeout(timeout);
    }

    pub fn event_count(&self) -> usize {
        self.queue.size()
    }

    pub fn set_instruction_active_filter(&self, filter: ActiveInstructionFilter) {
        self.observer.set_active_instruction_filter(filter);
    }

    pub fn set_user_value_dialog(&self, dialog: UserValueDialog) {
        self.observer.set_user_value_dialog(dialog);
    }

    pub fn set_user_choice_dialog(&self, dialog: UserChoiceDialog) {
        self.observer.set_user_choice_dialog(dialog);
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
