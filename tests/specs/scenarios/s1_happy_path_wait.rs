// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! S1: `Sequence{ Wait(50ms) }`, started, reaches *Completed*
//! within 500ms with no error log entries.

use std::time::Duration;

use oac_core::{ExecutionStatus, InstructionIndex, RunnerStatus};
use oac_sim::{SequenceBuilder, SimWorkspace};

use crate::support::Harness;

#[test]
fn wait_instruction_completes_with_no_errors() {
    let harness = Harness::new(SimWorkspace::new());
    let root = SequenceBuilder::new().wait(Duration::from_millis(50)).build();
    let handler = harness.submit("s1", root);

    assert!(handler.start());

    let completed = harness.pump_until(Duration::from_millis(500), || {
        handler.item().lock().status == RunnerStatus::Completed
    });
    assert!(completed, "job should reach Completed within 500ms");

    assert!(!handler.log().lock().has_errors());

    let wait_index = InstructionIndex::new(1);
    let item = handler.item();
    let item = item.lock();
    assert_eq!(item.expanded.get(wait_index).map(|i| i.execution_status), Some(ExecutionStatus::Success));
}
