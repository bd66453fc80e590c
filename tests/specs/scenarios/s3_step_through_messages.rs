// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! S3: `Sequence{ Message("a"), Message("b") }` with the flow
//! controller set to `WaitForRelease` before start. The job enters
//! *Paused* with an empty log; two `step` calls release both messages in
//! order and the job finishes *Completed*.

use std::time::Duration;

use oac_core::RunnerStatus;
use oac_sim::{SequenceBuilder, SimWorkspace};

use crate::support::Harness;

#[test]
fn stepping_releases_messages_one_at_a_time_in_order() {
    let harness = Harness::new(SimWorkspace::new());
    let root = SequenceBuilder::new().message("a").message("b").build();
    let handler = harness.submit("s3", root);

    assert!(handler.pause());
    assert!(handler.start());

    let paused = harness.pump_until(Duration::from_millis(500), || {
        handler.item().lock().status == RunnerStatus::Paused
    });
    assert!(paused, "job should pause before the first message");
    assert!(handler.log().lock().entries().is_empty());

    assert!(handler.step());
    let first = harness.pump_until(Duration::from_millis(500), || !handler.log().lock().entries().is_empty());
    assert!(first, "first step should release the first message");

    assert!(handler.step());
    let completed = harness.pump_until(Duration::from_millis(500), || {
        handler.item().lock().status == RunnerStatus::Completed
    });
    assert!(completed, "second step should run the job to completion");

    let log = handler.log();
    let log = log.lock();
    let messages: Vec<&str> = log.entries().iter().map(|entry| entry.message.as_str()).collect();
    assert_eq!(messages, vec!["a", "b"]);
}
