// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! S4: `Sequence{ Wait(10s) }`, started; 50ms in it is
//! *Running*; `stop` brings it to *Stopped/Halted* within 200ms with
//! `is_busy() == false`.

use std::time::Duration;

use oac_core::RunnerStatus;
use oac_sim::{SequenceBuilder, SimWorkspace};

use crate::support::Harness;

#[test]
fn stop_halts_a_running_job_promptly() {
    let harness = Harness::new(SimWorkspace::new());
    let root = SequenceBuilder::new().wait(Duration::from_secs(10)).build();
    let handler = harness.submit("s4", root);

    assert!(handler.start());

    let running = harness.pump_until(Duration::from_millis(200), || {
        handler.item().lock().status == RunnerStatus::Running
    });
    assert!(running, "job should be Running shortly after start");

    assert!(handler.stop());

    let stopped = harness.pump_until(Duration::from_millis(200), || {
        let status = handler.item().lock().status;
        status == RunnerStatus::Stopped
    });
    assert!(stopped, "job should be Stopped/Halted within 200ms of stop()");
    assert!(!handler.is_busy());
}
