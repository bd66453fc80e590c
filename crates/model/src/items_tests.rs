// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

use oac_core::JobId;

use super::*;

#[test]
fn new_instruction_item_starts_not_started_and_unset() {
    let item = InstructionItem::new(InstructionIndex::new(0), "Wait");
    assert_eq!(item.execution_status, ExecutionStatus::NotStarted);
    assert_eq!(item.breakpoint_status, BreakpointStatus::Unset);
    assert_eq!(item.display_name, "Wait");
}

#[test]
fn job_item_starts_idle_with_an_empty_expanded_procedure() {
    let job = JobItem::new(JobId::from("job-1"), "demo", ProcedureSource::File("demo.xml".into()));
    assert_eq!(job.status, RunnerStatus::Idle);
    assert!(job.expanded.is_empty());
}

#[test]
fn variable_mut_finds_by_name() {
    let mut job = JobItem::new(JobId::from("job-1"), "demo", ProcedureSource::File("demo.xml".into()));
    job.variables.push(VariableItem::new("var0"));
    job.variable_mut("var0").expect("present").available = true;
    assert!(job.variables[0].available);
    assert!(job.variable_mut("missing").is_none());
}
