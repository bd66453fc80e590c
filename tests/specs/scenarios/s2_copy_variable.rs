// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! S2: `Copy(var0 -> var1)` over a workspace seeded with
//! `var0=42`. After completion, a `VariableUpdated` was dispatched for
//! `var1` and both the job item and the domain workspace agree on 42.

use std::time::Duration;

use oac_core::{AnyValue, InstructionIndex, RunnerStatus, VariableIndex};
use oac_sim::{SequenceBuilder, SimWorkspace};

use crate::support::{var, Harness};

#[test]
fn copy_propagates_value_and_dispatches_variable_updated() {
    let harness = Harness::new(SimWorkspace::with_values([
        var("var0", AnyValue::UInt64(42)),
        var("var1", AnyValue::UInt64(0)),
    ]));
    let root = SequenceBuilder::new().copy(VariableIndex::new(0), VariableIndex::new(1)).build();
    let handler = harness.submit("s2", root);

    assert!(handler.start());

    let completed = harness.pump_until(Duration::from_millis(500), || {
        handler.item().lock().status == RunnerStatus::Completed
    });
    assert!(completed, "job should reach Completed within 500ms");

    assert_eq!(harness.workspace.get("var1"), Some(AnyValue::UInt64(42)));

    let item = handler.item();
    let item = item.lock();
    let var1 = item.variables.iter().find(|v| v.name == "var1").expect("var1 item exists");
    assert_eq!(var1.value, AnyValue::UInt64(42));
    assert!(var1.available);

    let copy_index = InstructionIndex::new(1);
    assert_eq!(
        item.expanded.get(copy_index).map(|i| i.execution_status),
        Some(oac_core::ExecutionStatus::Success)
    );
}
