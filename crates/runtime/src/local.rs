// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! `LocalDomainRunner`: the in-process [`DomainRunner`] —
//! an [`EngineJob`] and a [`JobService`] behind one façade, with no
//! transport in between.

use std::sync::Arc;
use std::time::Duration;

use oac_core::{InstructionIndex, JobState};
use oac_engine::{
    ActiveInstructionFilter, EngineJob, EventDispatcher, FlowController, JobInfo, JobObserver,
    JobService, UserChoiceDialog, UserValueDialog,
};
use parking_lot::Mutex;

use crate::contracts::DomainRunner;

/// Drives a job that runs on this process's own worker threads.
/// `build_job` receives the observer and flow controller a concrete
/// [`EngineJob`] (e.g. `oac_sim::SimJob`) needs to report through and
/// pace itself against.
pub struct LocalDomainRunner {
    service: Arc<JobService>,
    job: Arc<dyn EngineJob>,
}

impl LocalDomainRunner {
    pub fn new<F>(wake: Option<oac_engine::WakeFn>, build_job: F) -> Self
    where
        F: FnOnce(Arc<JobObserver>, Arc<FlowController>) -> Arc<dyn EngineJob>,
    {
        let service = Arc::new(JobService::new(wake));
        let flow = Arc::new(FlowController::new());
        let job = build_job(service.job_info_io(), flow);
        Self { service, job }
    }
}

impl DomainRunner for LocalDomainRunner {
    fn start(&self) -> bool {
        self.job.start()
    }

    fn stop(&self) -> bool {
        self.job.halt()
    }

    fn pause(&self) -> bool {
        self.job.pause()
    }

    fn step(&self) -> bool {
        self.job.step()
    }

    fn reset(&self) -> bool {
        self.job.reset()
    }

    fn set_breakpoint(&self, index: InstructionIndex) -> bool {
        self.job.set_breakpoint(index)
    }

    fn remove_breakpoint(&self, index: InstructionIndex) -> bool {
        self.job.remove_breakpoint(index)
    }

    fn job_info_io(&self) -> Arc<JobObserver> {
        self.service.job_info_io()
    }

    fn job_state(&self) -> JobState {
        self.service.job_state()
    }

    fn wait_for_finished(&self) {
        self.service.wait_for_finished();
    }

    fn wait_for_state(&self, state: JobState, timeout: Duration) -> bool {
        self.service.wait_for_state(state, timeout)
    }

    fn set_tick_timeout(&self, timeout: Duration) {
        self.service.set_tick_timeout(timeout);
    }

    fn event_count(&self) -> usize {
        self.service.event_count()
    }

    fn job_info(&self) -> JobInfo {
        self.job.job_info()
    }

    fn dispatcher(&self) -> &Mutex<EventDispatcher> {
        self.service.dispatcher()
    }

    fn service_turn(&self) {
        self.service.service_turn();
    }

    fn set_user_value_dialog(&self, dialog: UserValueDialog) {
        self.service.set_user_value_dialog(dialog);
    }

    fn set_user_choice_dialog(&self, dialog: UserChoiceDialog) {
        self.service.set_user_choice_dialog(dialog);
    }

    fn set_instruction_active_filter(&self, filter: ActiveInstructionFilter) {
        self.service.set_instruction_active_filter(filter);
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
