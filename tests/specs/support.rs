// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Shared harness for the end-to-end scenario specs:
//! wires a [`JobManager`] to a [`UiScheduler`] and an `oac-sim` job the
//! same way `oac-cli`'s `run` command does, minus the terminal output.

use std::sync::Arc;
use std::time::{Duration, Instant};

use oac_core::AnyValue;
use oac_engine::EngineJob;
use oac_model::{JobHandler, JobManager, ProcedureSource, UiScheduler};
use oac_sim::{Instruction, SimJob, SimWorkspace};

/// One job wired up for a scenario test: the scheduler must be pumped
/// (via [`Self::pump_until`]) for anything posted by the engine thread
/// to reach the job item.
pub struct Harness {
    pub scheduler: UiScheduler,
    pub manager: Arc<JobManager>,
    pub workspace: Arc<SimWorkspace>,
}

impl Harness {
    pub fn new(workspace: SimWorkspace) -> Self {
        let scheduler = UiScheduler::new();
        let manager = JobManager::new(scheduler.handle());
        Self { scheduler, manager, workspace: Arc::new(workspace) }
    }

    /// Submits `root` as a local job named `name`.
    pub fn submit(&self, name: &str, root: Instruction) -> Arc<JobHandler> {
        let workspace = self.workspace.clone();
        let procedure_name = name.to_string();
        self.manager.submit_local(name, ProcedureSource::File(format!("{name}.xml").into()), move |observer, flow| {
            SimJob::new(procedure_name, root, workspace, observer, flow) as Arc<dyn EngineJob>
        })
    }

    /// Drains the scheduler and polls `predicate` until it is true or
    /// `timeout` elapses. Returns whether `predicate` was observed true.
    pub fn pump_until(&self, timeout: Duration, mut predicate: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.scheduler.drain();
            if predicate() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }
}

pub fn var(name: &str, value: AnyValue) -> (String, AnyValue) {
    (name.to_string(), value)
}

pub const SPEC_WAIT_MAX: Duration = Duration::from_millis(1000);
