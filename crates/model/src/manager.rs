// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Job manager: the submit/remove/active-job surface a
//! UI owns, one [`JobHandler`] per live job.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use oac_core::{InstructionIndex, JobId, RuntimeError};
use oac_engine::{EngineJob, FlowController, JobObserver};
use oac_runtime::{DomainRunner, LocalDomainRunner, RemoteConnectError, RemoteDomainRunner};
use parking_lot::Mutex;

use crate::handler::JobHandler;
use crate::items::{JobItem, ProcedureSource};
use crate::job_log::JobLog;
use crate::ui_loop::UiSchedulerHandle;

/// Owns every live job's [`JobHandler`] and tracks which one is active
/// (the job UI commands target by default). Lives for the lifetime of
/// the UI process; typically held as `Arc<JobManager>` so its
/// [`Self::wake_fn`] can be handed to runner constructors before the
/// corresponding handler exists.
pub struct JobManager {
    scheduler: UiSchedulerHandle,
    jobs: Mutex<Vec<Arc<JobHandler>>>,
    active: Mutex<Option<JobId>>,
}

impl JobManager {
    pub fn new(scheduler: UiSchedulerHandle) -> Arc<Self> {
        Arc::new(Self { scheduler, jobs: Mutex::new(Vec::new()), active: Mutex::new(None) })
    }

    /// The wake hook every runner this manager constructs is given:
    /// posts a single UI task that drains every job's dispatcher, rather
    /// than threading a per-job forwarding cell through construction.
    pub fn wake_fn(self: &Arc<Self>) -> oac_engine::WakeFn {
        let manager = Arc::clone(self);
        self.scheduler.wake_fn(Arc::new(move || manager.service_turn_all()))
    }

    /// Drains every live job's event queue into its handler's dispatcher
    /// callbacks. Called once per UI-domain wakeup.
    pub fn service_turn_all(&self) {
        for handler in self.jobs.lock().iter() {
            handler.service_turn();
        }
    }

    pub fn jobs(&self) -> Vec<Arc<JobHandler>> {
        self.jobs.lock().clone()
    }

    pub fn active_job_id(&self) -> Option<JobId> {
        self.active.lock().clone()
    }

    fn register(&self, display_name: impl Into<String>, source: ProcedureSource, runner: Arc<dyn DomainRunner>) -> Arc<JobHandler> {
        let id = JobId::generate();
        let item = Arc::new(Mutex::new(JobItem::new(id.clone(), display_name, source)));
        let log = Arc::new(Mutex::new(JobLog::new()));
        let handler = Arc::new(JobHandler::new(item, runner, log));

        self.jobs.lock().push(handler.clone());
        let mut active = self.active.lock();
        if active.is_none() {
            *active = Some(id);
        }
        handler
    }

    /// Submits a job backed by an in-process [`EngineJob`].
    pub fn submit_local<F>(self: &Arc<Self>, display_name: impl Into<String>, source: ProcedureSource, build_job: F) -> Arc<JobHandler>
    where
        F: FnOnce(Arc<JobObserver>, Arc<FlowController>) -> Arc<dyn EngineJob> + 'static,
    {
        let wake = self.wake_fn();
        let runner: Arc<dyn DomainRunner> = Arc::new(LocalDomainRunner::new(Some(wake), build_job));
        self.register(display_name, source, runner)
    }

    /// Submits a job from a file path. Resolved open question: looks for an existing job on this same path before
    /// creating a new one — "set current procedure, then
    /// create-if-absent" — so resubmitting the same file regenerates
    /// that job's expanded procedure instead of stacking a duplicate
    /// entry in the job list.
    pub fn submit_file_based<F>(self: &Arc<Self>, path: impl Into<PathBuf>, build_job: F) -> Result<Arc<JobHandler>, RuntimeError>
    where
        F: FnOnce(Arc<JobObserver>, Arc<FlowController>) -> Arc<dyn EngineJob> + 'static,
    {
        let path = path.into();
        let source = ProcedureSource::File(path.clone());

        {
            let jobs = self.jobs.lock();
            if let Some(existing) = jobs.iter().find(|handler| handler.item().lock().source == source) {
                if existing.is_busy() {
                    return Err(RuntimeError::HandlerBusy);
                }
                existing.regenerate();
                return Ok(existing.clone());
            }
        }

        let display_name = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "job".to_string());
        Ok(self.submit_local(display_name, source, build_job))
    }

    /// Submits a job proxied over a remote transport.
    pub fn submit_remote(
        self: &Arc<Self>,
        display_name: impl Into<String>,
        manager_name: impl Into<String>,
        job_index: u32,
        url: &str,
    ) -> Result<Arc<JobHandler>, RemoteConnectError> {
        let wake = self.wake_fn();
        let runner = RemoteDomainRunner::connect_websocket(url, job_index, Some(wake))?;
        let source = ProcedureSource::Remote { manager: manager_name.into(), job_index };
        Ok(self.register(display_name, source, Arc::new(runner)))
    }

    /// Removes a job. Rejected while its handler is busy —
    /// a running job must be stopped first.
    pub fn remove(&self, id: &JobId) -> Result<(), RuntimeError> {
        let mut jobs = self.jobs.lock();
        let Some(position) = jobs.iter().position(|handler| handler.item().lock().id == *id) else {
            return Ok(());
        };
        if jobs[position].is_busy() {
            return Err(RuntimeError::HandlerBusy);
        }
        jobs.remove(position);
        drop(jobs);

        let mut active = self.active.lock();
        if active.as_ref() == Some(id) {
            *active = self.jobs.lock().first().map(|handler| handler.item().lock().id.clone());
        }
        Ok(())
    }

    pub fn set_active_job(&self, id: JobId) -> Result<(), RuntimeError> {
        let exists = self.jobs.lock().iter().any(|handler| handler.item().lock().id == id);
        if !exists {
            return Err(RuntimeError::JobNotInitialized);
        }
        *self.active.lock() = Some(id);
        Ok(())
    }

    pub fn has_running_jobs(&self) -> bool {
        self.jobs.lock().iter().any(|handler| handler.is_busy())
    }

    /// Stops every busy job, e.g. on application shutdown.
    pub fn stop_all_jobs(&self) {
        for handler in self.jobs.lock().iter() {
            if handler.is_busy() {
                handler.stop();
            }
        }
    }

    fn active_handler(&self) -> Result<Arc<JobHandler>, RuntimeError> {
        let active = self.active.lock().clone().ok_or(RuntimeError::JobNotInitialized)?;
        self.jobs
            .lock()
            .iter()
            .find(|handler| handler.item().lock().id == active)
            .cloned()
            .ok_or(RuntimeError::JobNotInitialized)
    }

    pub fn on_start(&self) -> Result<bool, RuntimeError> {
        Ok(self.active_handler()?.start())
    }

    pub fn on_pause(&self) -> Result<bool, RuntimeError> {
        Ok(self.active_handler()?.pause())
    }

    pub fn on_step(&self) -> Result<bool, RuntimeError> {
        Ok(self.active_handler()?.step())
    }

    pub fn on_stop(&self) -> Result<bool, RuntimeError> {
        Ok(self.active_handler()?.stop())
    }

    pub fn on_reset(&self) -> Result<bool, RuntimeError> {
        Ok(self.active_handler()?.reset())
    }

    pub fn on_toggle_breakpoint_request(&self, index: InstructionIndex) -> Result<(), RuntimeError> {
        self.active_handler()?.on_toggle_breakpoint_request(index)
    }

    pub fn set_tick_timeout(&self, timeout: Duration) -> Result<(), RuntimeError> {
        self.active_handler()?.set_tick_timeout(timeout);
        Ok(())
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
