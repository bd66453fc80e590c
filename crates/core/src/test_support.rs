// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Test-only helpers shared across this workspace's crates.

use crate::any_value::AnyValue;
use crate::event::DomainEvent;
use crate::execution_status::ExecutionStatus;
use crate::id::{InstructionIndex, VariableIndex};
use crate::job_state::JobState;

/// A minimal arbitrary `DomainEvent` for property tests. Not exhaustive
/// over every field combination — just enough variety to exercise queue
/// ordering and loss-free delivery.
#[cfg(feature = "proptest")]
pub fn arb_domain_event() -> impl proptest::strategy::Strategy<Value = DomainEvent> {
    use proptest::prelude::*;

    prop_oneof![
        (0u32..16).prop_map(|i| DomainEvent::InstructionStateUpdated {
            index: InstructionIndex::new(i),
            execution_status: ExecutionStatus::Running,
            breakpoint_set: false,
        }),
        (0u32..16, 0u64..1000).prop_map(|(i, v)| DomainEvent::VariableUpdated {
            index: VariableIndex::new(i),
            value: AnyValue::UInt64(v),
            connected: true,
        }),
        Just(DomainEvent::JobStateChanged { state: JobState::Running }),
        Just(DomainEvent::JobStateChanged { state: JobState::Succeeded }),
        "[a-z ]{0,20}".prop_map(|message| DomainEvent::Log {
            severity: crate::log::LogSeverity::Info,
            message,
        }),
    ]
}
