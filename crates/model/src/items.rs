// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! UI-domain item types: the tree the job handler writes
//! to and the model reads from. Owned by the model/project, never by a
//! handler — a handler holds only a non-owning `Arc<Mutex<JobItem>>`.

use std::path::PathBuf;

use oac_core::{AnyValue, BreakpointStatus, ExecutionStatus, InstructionIndex, JobId, RunnerStatus};

use crate::index_map::IndexItemMap;

/// Where a job's procedure comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcedureSource {
    File(PathBuf),
    Remote { manager: String, job_index: u32 },
}

/// One node of the expanded procedure. `children` holds the
/// indices of direct child instructions, in execution order — the
/// UI-domain tree counterpart to `oac_sim`'s flat `parents` table.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionItem {
    pub index: InstructionIndex,
    pub type_name: String,
    pub display_name: String,
    pub execution_status: ExecutionStatus,
    pub breakpoint_status: BreakpointStatus,
    pub x: f64,
    pub y: f64,
    pub collapsed: bool,
    pub children: Vec<InstructionIndex>,
}

impl InstructionItem {
    /// A freshly expanded item: not started, no breakpoint, not
    /// collapsed, graph position left at the origin (the graph-view
    /// layout pass — out of scope here — assigns real coordinates).
    pub fn new(index: InstructionIndex, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            index,
            display_name: type_name.clone(),
            type_name,
            execution_status: ExecutionStatus::NotStarted,
            breakpoint_status: BreakpointStatus::Unset,
            x: 0.0,
            y: 0.0,
            collapsed: false,
            children: Vec::new(),
        }
    }
}

/// A named workspace variable mirrored into the UI domain.
/// Read-only (name/channel attributes) while its parent workspace is
/// live — enforced by the synchronizer, not by this type.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableItem {
    pub name: String,
    pub value: AnyValue,
    pub available: bool,
}

impl VariableItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), value: AnyValue::Empty, available: false }
    }
}

/// One submitted job. Exactly one [`crate::handler::JobHandler`]
/// exists per live `JobItem`; the expanded procedure is rebuilt wholesale
/// (old one discarded) whenever the handler (re)generates the job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobItem {
    pub id: JobId,
    pub display_name: String,
    pub source: ProcedureSource,
    pub status: RunnerStatus,
    pub expanded: IndexItemMap<InstructionItem>,
    pub variables: Vec<VariableItem>,
    /// Set while a `BreakpointHit` is in effect; cleared on reset/stop.
    pub current_active_breakpoint: Option<InstructionIndex>,
}

impl JobItem {
    pub fn new(id: JobId, display_name: impl Into<String>, source: ProcedureSource) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            source,
            status: RunnerStatus::Idle,
            expanded: IndexItemMap::new(),
            variables: Vec::new(),
            current_active_breakpoint: None,
        }
    }

    pub fn variable_mut(&mut self, name: &str) -> Option<&mut VariableItem> {
        self.variables.iter_mut().find(|v| v.name == name)
    }
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;
