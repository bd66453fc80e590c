// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

use std::sync::Arc;
use std::time::Duration;

use oac_core::{AnyValue, JobState, RunnerStatus, RuntimeError};
use oac_engine::EngineJob;
use oac_sim::{SequenceBuilder, SimJob, SimWorkspace};

use crate::ui_loop::UiScheduler;

use super::*;

fn build_job(observer: Arc<oac_engine::JobObserver>, flow: Arc<oac_engine::FlowController>) -> Arc<dyn EngineJob> {
    let workspace = Arc::new(SimWorkspace::with_values([("var0".to_string(), AnyValue::Empty)]));
    let root = SequenceBuilder::new().message("a").build();
    SimJob::new("demo", root, workspace, observer, flow)
}

#[test]
fn submit_local_registers_the_job_and_makes_it_active() {
    let scheduler = UiScheduler::new();
    let manager = JobManager::new(scheduler.handle());

    let handler = manager.submit_local("demo", ProcedureSource::File("demo.xml".into()), build_job);

    assert_eq!(manager.jobs().len(), 1);
    assert_eq!(manager.active_job_id(), Some(handler.item().lock().id.clone()));
}

#[test]
fn submit_file_based_reuses_an_existing_job_for_the_same_path() {
    let scheduler = UiScheduler::new();
    let manager = JobManager::new(scheduler.handle());

    let first = manager.submit_file_based("demo.xml", build_job).expect("first submit");
    let second = manager.submit_file_based("demo.xml", build_job).expect("second submit");

    assert_eq!(manager.jobs().len(), 1);
    assert_eq!(first.item().lock().id, second.item().lock().id);
}

#[test]
fn on_start_runs_the_active_job_to_completion() {
    let scheduler = UiScheduler::new();
    let manager = JobManager::new(scheduler.handle());
    let handler = manager.submit_local("demo", ProcedureSource::File("demo.xml".into()), build_job);

    assert!(manager.on_start().expect("active job"));
    handler.runner().wait_for_finished();
    scheduler.drain();
    manager.service_turn_all();

    assert_eq!(handler.item().lock().status, RunnerStatus::Completed);
}

#[test]
fn remove_rejects_a_busy_job() {
    let scheduler = UiScheduler::new();
    let manager = JobManager::new(scheduler.handle());
    let handler = manager.submit_local(
        "demo",
        ProcedureSource::File("demo.xml".into()),
        |observer, flow| {
            let workspace = Arc::new(SimWorkspace::new());
            let root = SequenceBuilder::new().wait(Duration::from_millis(300)).build();
            SimJob::new("demo", root, workspace, observer, flow)
        },
    );
    let id = handler.item().lock().id.clone();

    assert!(manager.on_start().expect("active job"));
    assert!(handler.runner().wait_for_state(JobState::Running, Duration::from_secs(2)));
    scheduler.drain();
    manager.service_turn_all();

    assert_eq!(manager.remove(&id), Err(RuntimeError::HandlerBusy));
    handler.runner().wait_for_finished();
}

#[test]
fn on_start_with_no_active_job_fails() {
    let scheduler = UiScheduler::new();
    let manager = JobManager::new(scheduler.handle());
    assert_eq!(manager.on_start(), Err(RuntimeError::JobNotInitialized));
}

#[test]
fn stop_all_jobs_stops_every_busy_handler() {
    let scheduler = UiScheduler::new();
    let manager = JobManager::new(scheduler.handle());
    let handler = manager.submit_local(
        "demo",
        ProcedureSource::File("demo.xml".into()),
        |observer, flow| {
            let workspace = Arc::new(SimWorkspace::new());
            let root = SequenceBuilder::new().wait(Duration::from_millis(300)).build();
            SimJob::new("demo", root, workspace, observer, flow)
        },
    );

    assert!(manager.on_start().expect("active job"));
    assert!(handler.runner().wait_for_state(JobState::Running, Duration::from_secs(2)));
    scheduler.drain();
    manager.service_turn_all();

    manager.stop_all_jobs();
    handler.runner().wait_for_finished();
    assert_eq!(handler.runner().job_state(), JobState::Halted);
}
