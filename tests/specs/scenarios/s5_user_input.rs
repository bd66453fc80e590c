// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! S5: `Input(target=var0)` with a UI callback that answers
//! `{value=7, processed=true}`. After start, the job reaches *Completed*
//! and `var0 == 7`.

use std::time::Duration;

use oac_core::{AnyValue, RunnerStatus, VariableIndex};
use oac_sim::{SequenceBuilder, SimWorkspace};

use crate::support::{var, Harness};

#[test]
fn user_value_prompt_is_answered_and_written_back() {
    let harness = Harness::new(SimWorkspace::with_values([var("var0", AnyValue::Int64(0))]));
    let root = SequenceBuilder::new().input(VariableIndex::new(0)).build();
    let handler = harness.submit("s5", root);

    handler.runner().set_user_value_dialog(Box::new(|_id, _description, _current| AnyValue::Int64(7)));

    assert!(handler.start());

    let completed = harness.pump_until(Duration::from_millis(500), || {
        handler.item().lock().status == RunnerStatus::Completed
    });
    assert!(completed, "job should reach Completed within 500ms");

    assert_eq!(harness.workspace.get("var0"), Some(AnyValue::Int64(7)));
    let item = handler.item();
    let item = item.lock();
    let var0 = item.variables.iter().find(|v| v.name == "var0").expect("var0 item exists");
    assert_eq!(var0.value, AnyValue::Int64(7));
}
