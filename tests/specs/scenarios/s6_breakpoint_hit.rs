// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! S6: `Sequence{ Wait(5ms), Wait(5ms) }` with a breakpoint on
//! the second `Wait`. Starting emits `BreakpointHit` for that
//! instruction, the job pauses there, and one `step` finishes the run.

use std::time::Duration;

use oac_core::{InstructionIndex, RunnerStatus};
use oac_sim::{SequenceBuilder, SimWorkspace};

use crate::support::Harness;

#[test]
fn breakpoint_pauses_at_the_armed_instruction_then_step_completes() {
    let harness = Harness::new(SimWorkspace::new());
    let root = SequenceBuilder::new().wait(Duration::from_millis(5)).wait(Duration::from_millis(5)).build();
    let handler = harness.submit("s6", root);

    // root sequence=0, first wait=1, second wait=2
    let second_wait = InstructionIndex::new(2);
    handler.on_toggle_breakpoint_request(second_wait).expect("toggling while idle is allowed");

    assert!(handler.start());

    let hit = harness.pump_until(Duration::from_millis(500), || {
        handler.item().lock().current_active_breakpoint == Some(second_wait)
    });
    assert!(hit, "breakpoint should be hit at the second Wait");
    assert_eq!(handler.item().lock().status, RunnerStatus::Paused);

    assert!(handler.step());

    let completed = harness.pump_until(Duration::from_millis(500), || {
        handler.item().lock().status == RunnerStatus::Completed
    });
    assert!(completed, "stepping past the breakpoint should finish the run");
}
